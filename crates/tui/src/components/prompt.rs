use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::input::QueryInput;
use crate::style::Theme;

/// Argument bundle for rendering the input area.
pub struct InputContext<'a> {
	/// The search input widget.
	pub search_input: &'a QueryInput<'a>,
	/// Label rendered before the input.
	pub prompt: &'a str,
	/// Placeholder text shown when input is empty.
	pub placeholder: Option<&'a str>,
	/// Rendering area.
	pub area: Rect,
	/// Color theme.
	pub theme: &'a Theme,
}

/// Status shown at the right edge of the prompt.
pub struct ProgressState<'a> {
	/// Text describing the status.
	pub progress_text: &'a str,
	/// Whether loading has finished; a spinner is drawn until it has.
	pub progress_complete: bool,
	/// Spinner animation state.
	pub throbber_state: &'a ThrobberState,
}

/// Render the prompt label, search input, placeholder and status.
pub fn render_input(
	frame: &mut ratatui::Frame,
	input: InputContext<'_>,
	progress: ProgressState<'_>,
) {
	let InputContext {
		search_input,
		prompt,
		placeholder,
		area,
		theme,
	} = input;

	let prompt_text = if prompt.is_empty() {
		String::new()
	} else {
		format!("{prompt} > ")
	};
	let prompt_width = prompt_text.width() as u16;
	let horizontal = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([Constraint::Length(prompt_width), Constraint::Min(1)])
		.split(area);

	if !prompt_text.is_empty() {
		frame.render_widget(Paragraph::new(prompt_text).style(theme.prompt), horizontal[0]);
	}

	let input_area = horizontal[1];
	search_input.render_textarea(frame, input_area);

	if search_input.text().is_empty()
		&& let Some(placeholder_text) = placeholder
	{
		render_placeholder(frame, input_area, placeholder_text, theme);
	}

	render_progress(frame, input_area, progress, theme);
}

fn render_placeholder(frame: &mut ratatui::Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width == 0 || area.height == 0 || text.is_empty() {
		return;
	}
	// Leave the first column to the cursor.
	let start = area.left().saturating_add(1);
	let width = area.width.saturating_sub(1);
	let display_text: String = text.chars().take(width as usize).collect();
	frame.buffer_mut().set_line(
		start,
		area.top(),
		&Line::from(Span::styled(display_text, theme.empty)),
		width,
	);
}

fn render_progress(
	frame: &mut ratatui::Frame,
	area: Rect,
	progress: ProgressState<'_>,
	theme: &Theme,
) {
	let ProgressState {
		progress_text,
		progress_complete,
		throbber_state,
	} = progress;
	if area.width == 0 || area.height == 0 || progress_text.is_empty() {
		return;
	}

	let mut line = Line::default();
	if !progress_complete {
		let spinner = Throbber::default()
			.style(theme.empty)
			.throbber_style(theme.empty);
		line.spans.push(spinner.to_symbol_span(throbber_state));
	}
	line.spans
		.push(Span::styled(progress_text.to_string(), theme.empty));

	let line_width = line.width() as u16;
	if line_width == 0 || line_width >= area.width {
		return;
	}
	let start_x = area.right().saturating_sub(line_width);
	frame
		.buffer_mut()
		.set_line(start_x, area.top(), &line, line_width);
}
