use iconpick_core::{IconRecord, PageLayout, PagedResult};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::style::Theme;

/// Argument bundle for rendering a page of icons.
pub struct GridContext<'a> {
	pub page: &'a PagedResult<IconRecord>,
	pub layout: PageLayout,
	/// Visible index of the highlighted cell.
	pub cursor: usize,
	pub title: &'a str,
	pub empty_message: &'a str,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Render the visible icons as a `rows` × `cols` grid inside a bordered block.
pub fn render_grid(frame: &mut ratatui::Frame, grid: GridContext<'_>) {
	let GridContext {
		page,
		layout,
		cursor,
		title,
		empty_message,
		area,
		theme,
	} = grid;

	let block = Block::default()
		.borders(Borders::ALL)
		.border_type(BorderType::Rounded)
		.border_style(theme.header)
		.title(format!(" {title} "));
	let inner = block.inner(area);
	frame.render_widget(block, area);

	if inner.width == 0 || inner.height == 0 {
		return;
	}

	if page.is_empty() {
		let message = Paragraph::new(empty_message)
			.style(theme.empty)
			.alignment(Alignment::Center);
		frame.render_widget(message, centered_row(inner));
		return;
	}

	for (index, icon) in page.visible_items.iter().enumerate() {
		let Some(cell) = cell_area(inner, layout, index) else {
			continue;
		};
		render_cell(frame, icon, cell, index == cursor, theme);
	}
}

fn render_cell(
	frame: &mut ratatui::Frame,
	icon: &IconRecord,
	area: Rect,
	highlighted: bool,
	theme: &Theme,
) {
	if area.width == 0 || area.height == 0 {
		return;
	}
	let width = area.width.saturating_sub(1) as usize;
	let name_style = if highlighted {
		theme.cell_highlight
	} else {
		ratatui::style::Style::default()
	};

	let mut lines = vec![Line::from(Span::styled(
		truncate_to_width(&icon.name, width),
		name_style,
	))];
	if area.height > 1 {
		lines.push(Line::from(Span::styled(
			truncate_to_width(&icon.key, width),
			theme.empty,
		)));
	}
	frame.render_widget(Paragraph::new(lines), area);
}

/// Screen area of the cell at `index`, row-major.
///
/// Grids taller or wider than `inner` are cut to one line per row and one
/// column per cell; cells past that edge have no area.
pub fn cell_area(inner: Rect, layout: PageLayout, index: usize) -> Option<Rect> {
	let (row, col) = (index / layout.cols(), index % layout.cols());
	let rows = layout.rows().min(usize::from(inner.height)).max(1);
	let cols = layout.cols().min(usize::from(inner.width)).max(1);
	if row >= rows || col >= cols {
		return None;
	}

	let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(inner);
	let col_areas =
		Layout::horizontal(vec![Constraint::Ratio(1, cols as u32); cols]).split(row_areas[row]);
	Some(col_areas[col])
}

fn centered_row(area: Rect) -> Rect {
	Rect {
		y: area.y + area.height / 2,
		height: 1,
		..area
	}
}

/// Cut `text` to at most `width` terminal columns, marking the cut with `…`.
pub fn truncate_to_width(text: &str, width: usize) -> String {
	if width == 0 {
		return String::new();
	}
	let total: usize = text.chars().filter_map(UnicodeWidthChar::width).sum();
	if total <= width {
		return text.to_string();
	}

	let mut out = String::new();
	let mut used = 0;
	for ch in text.chars() {
		let ch_width = ch.width().unwrap_or(0);
		if used + ch_width + 1 > width {
			break;
		}
		used += ch_width;
		out.push(ch);
	}
	out.push('…');
	out
}
