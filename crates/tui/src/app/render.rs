use iconpick_core::SessionPhase;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use super::App;
use crate::components::{
	CategoryTabs, GridContext, InputContext, ProgressState, render_category_tabs, render_grid,
	render_input,
};

const KEY_HINTS: &str = "tab: category · pgup/pgdn: page · enter: pick · esc: close";

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let [tabs_area, input_area, body_area, pager_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Min(3),
			Constraint::Length(1),
		])
		.areas(area);

		if let Some(view) = self.view.as_ref() {
			render_category_tabs(
				frame,
				CategoryTabs {
					categories: &view.categories,
					selected: view.category_index(),
					all_label: &self.labels.all_categories,
					area: tabs_area,
					theme: &self.theme,
				},
			);
		}

		let (progress_text, progress_complete) = self.progress_status();
		render_input(
			frame,
			InputContext {
				search_input: &self.search_input,
				prompt: &self.labels.prompt,
				placeholder: Some(&self.labels.placeholder),
				area: input_area,
				theme: &self.theme,
			},
			ProgressState {
				progress_text: &progress_text,
				progress_complete,
				throbber_state: &self.throbber_state,
			},
		);

		match self.phase() {
			SessionPhase::LoadFailed => self.render_failure(frame, body_area),
			SessionPhase::Loading => self.render_loading(frame, body_area),
			_ => self.render_page(frame, body_area, pager_area),
		}
	}

	fn progress_status(&self) -> (String, bool) {
		match self.phase() {
			SessionPhase::Loading => ("loading icons".to_string(), false),
			SessionPhase::LoadFailed => ("load failed".to_string(), true),
			_ => match self.view.as_ref() {
				Some(view) => (format!("{} icons", view.page.filtered_count), true),
				None => (String::new(), true),
			},
		}
	}

	fn render_page(&self, frame: &mut Frame, body: Rect, pager: Rect) {
		let Some(view) = self.view.as_ref() else {
			return;
		};
		render_grid(
			frame,
			GridContext {
				page: &view.page,
				layout: self.session.layout(),
				cursor: self.cursor,
				title: &self.labels.grid_title,
				empty_message: &self.labels.empty_message,
				area: body,
				theme: &self.theme,
			},
		);

		let line = Line::from(vec![
			Span::styled(
				format!(
					"page {}/{} · {} icons",
					view.page.current_page, view.page.total_pages, view.page.filtered_count
				),
				self.theme.header,
			),
			Span::raw("  "),
			Span::styled(KEY_HINTS, self.theme.empty),
		]);
		frame.render_widget(Paragraph::new(line), pager);
	}

	fn render_loading(&self, frame: &mut Frame, body: Rect) {
		let block = self.body_block();
		let inner = block.inner(body);
		frame.render_widget(block, body);
		frame.render_widget(
			Paragraph::new("Loading icons…")
				.style(self.theme.empty)
				.alignment(Alignment::Center),
			inner,
		);
	}

	fn render_failure(&self, frame: &mut Frame, body: Rect) {
		let block = self.body_block();
		let inner = block.inner(body);
		frame.render_widget(block, body);

		let reason = self
			.session
			.load_error()
			.map(|err| err.to_string())
			.unwrap_or_default();
		let text = vec![
			Line::from(Span::styled("Could not load icons", self.theme.error)),
			Line::from(reason),
			Line::from(Span::styled("r: retry · esc: close", self.theme.empty)),
		];
		frame.render_widget(
			Paragraph::new(text)
				.alignment(Alignment::Center)
				.wrap(Wrap { trim: true }),
			inner,
		);
	}

	fn body_block(&self) -> Block<'_> {
		Block::default()
			.borders(Borders::ALL)
			.border_type(BorderType::Rounded)
			.border_style(self.theme.header)
			.title(format!(" {} ", self.labels.grid_title))
	}
}
