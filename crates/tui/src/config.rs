/// Textual configuration used when rendering the picker.
#[derive(Debug, Clone)]
pub struct UiLabels {
	/// Label rendered in front of the search input.
	pub prompt: String,
	/// Placeholder text displayed while the search input is empty.
	pub placeholder: String,
	/// Title used for the icon grid.
	pub grid_title: String,
	/// Message shown when the page has no icons.
	pub empty_message: String,
	/// Tab label for the "all categories" sentinel.
	pub all_categories: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			prompt: "Icons".to_string(),
			placeholder: "Type to search names and tags".to_string(),
			grid_title: "Pick an icon".to_string(),
			empty_message: "No icons".to_string(),
			all_categories: "All".to_string(),
		}
	}
}
