use iconpick_core::ALL_CATEGORIES;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Tabs;

use crate::style::Theme;

/// Argument bundle for rendering the category selector.
pub struct CategoryTabs<'a> {
	/// Category vocabulary, "all" sentinel first.
	pub categories: &'a [String],
	/// Index of the active category.
	pub selected: usize,
	/// Display label for the "all" sentinel.
	pub all_label: &'a str,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Render one tab per category with the active one highlighted.
pub fn render_category_tabs(frame: &mut ratatui::Frame, tabs: CategoryTabs<'_>) {
	let CategoryTabs {
		categories,
		selected,
		all_label,
		area,
		theme,
	} = tabs;
	if area.width == 0 || area.height == 0 || categories.is_empty() {
		return;
	}

	let titles: Vec<Line> = categories
		.iter()
		.map(|category| {
			let label = if category == ALL_CATEGORIES {
				all_label
			} else {
				category.as_str()
			};
			Line::from(format!(" {label} "))
		})
		.collect();

	let widget = Tabs::new(titles)
		.select(selected)
		.divider("")
		.padding("", " ")
		.style(theme.tab_inactive_style())
		.highlight_style(theme.tab_highlight_style());

	frame.render_widget(widget, area);
}
