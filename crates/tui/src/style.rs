//! Colors applied to the picker widgets.

use ratatui::style::{Color, Modifier, Style};

/// Styles for the elements of the picker.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
	/// Style for the grid border and pager.
	pub header: Style,
	/// Style for the highlighted grid cell.
	pub cell_highlight: Style,
	/// Style for the prompt label.
	pub prompt: Style,
	/// Style for empty states, icon keys and hints.
	pub empty: Style,
	/// Style for error text.
	pub error: Style,
}

impl Theme {
	/// Returns the style for inactive tabs.
	#[must_use]
	pub fn tab_inactive_style(&self) -> Style {
		Style::new().fg(self.header.fg.unwrap_or(Color::Reset))
	}

	/// Returns the style for the active tab.
	#[must_use]
	pub fn tab_highlight_style(&self) -> Style {
		self.cell_highlight.add_modifier(Modifier::BOLD)
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			header: Style::new().fg(Color::Cyan),
			cell_highlight: Style::new().fg(Color::Black).bg(Color::Cyan),
			prompt: Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
			empty: Style::new().fg(Color::DarkGray),
			error: Style::new().fg(Color::Red),
		}
	}
}
