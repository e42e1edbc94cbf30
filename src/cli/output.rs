use std::fmt::Write;

use anyhow::Result;
use iconpick::{PickerOutcome, PickerView};
use serde_json::json;

use crate::workflow::RunResult;

/// Print a plain-text representation of the run result.
pub(crate) fn print_plain(result: &RunResult) {
	print!("{}", format_plain(result));
}

pub(crate) fn format_plain(result: &RunResult) -> String {
	match result {
		RunResult::Outcome(PickerOutcome::Selected(icon)) => format!("{}\n", icon.key),
		RunResult::Outcome(PickerOutcome::Cancelled) => "Selection cancelled\n".to_string(),
		RunResult::Page(view) => format_page_plain(view),
	}
}

fn format_page_plain(view: &PickerView) -> String {
	let page = &view.page;
	let mut out = format!(
		"page {}/{} · {} icons (category: {}, search: '{}')\n",
		page.current_page, page.total_pages, page.filtered_count, view.category, view.search_term
	);
	if page.visible_items.is_empty() {
		out.push_str("No icons\n");
	}
	for icon in &page.visible_items {
		let _ = writeln!(out, "{}\t{}\t{}", icon.key, icon.name, icon.category);
	}
	out
}

/// Format the run result as a JSON string.
pub(crate) fn format_result_json(result: &RunResult) -> Result<String> {
	let payload = match result {
		RunResult::Outcome(outcome) => json!({
			"accepted": outcome.is_selected(),
			"icon": outcome.icon(),
		}),
		RunResult::Page(view) => json!({
			"page": view.page.current_page,
			"total_pages": view.page.total_pages,
			"filtered_count": view.page.filtered_count,
			"category": view.category,
			"categories": view.categories,
			"search": view.search_term,
			"icons": view.page.visible_items,
		}),
	};

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the run result.
pub(crate) fn print_json(result: &RunResult) -> Result<()> {
	println!("{}", format_result_json(result)?);
	Ok(())
}
