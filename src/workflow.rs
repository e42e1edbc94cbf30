use std::sync::Arc;
use std::sync::mpsc;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use iconpick::{
	BuiltinCatalog, CatalogCache, JsonFileCatalog, PickerOutcome, PickerSession, PickerView,
	SelectionSink, SessionOptions,
};

use crate::cli::HeadlessPlan;
use crate::settings::ResolvedConfig;

/// What a run produced: a finished session, or the page a headless run
/// stopped on without picking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RunResult {
	Outcome(PickerOutcome),
	Page(PickerView),
}

/// Coordinates opening a picker session and driving it to a result.
pub(crate) struct PickerWorkflow {
	options: SessionOptions,
	cache: Arc<CatalogCache>,
	headless: Option<HeadlessPlan>,
}

impl PickerWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		let options = config.session_options();
		let cache = match config.catalog {
			Some(path) => CatalogCache::shared(JsonFileCatalog::new(path)),
			None => CatalogCache::shared(BuiltinCatalog),
		};
		Self {
			options,
			cache,
			headless: config.headless,
		}
	}

	pub(crate) fn run(self) -> Result<RunResult> {
		match self.headless {
			Some(plan) => run_headless(self.options, self.cache, plan),
			None => iconpick::run(self.options, self.cache).map(RunResult::Outcome),
		}
	}
}

/// Apply `plan` to a session without a terminal. Search commits are flushed
/// immediately instead of waiting out the quiet window.
fn run_headless(
	options: SessionOptions,
	cache: Arc<CatalogCache>,
	plan: HeadlessPlan,
) -> Result<RunResult> {
	let (tx, outcomes) = mpsc::channel();
	let mut session = PickerSession::open(options, cache, SelectionSink::new(tx));
	session.load_now();

	if let Some(err) = session.load_error() {
		let reason = std::error::Error::source(err)
			.map(|source| format!("{err}: {source}"))
			.unwrap_or_else(|| err.to_string());
		return Err(anyhow!(reason));
	}

	if let Some(category) = plan.category.as_deref()
		&& !session.set_category(category).is_applied()
		&& session.view().is_some_and(|view| view.category != category)
	{
		log::warn!("category '{category}' is not in the catalog; showing all icons");
	}

	session.input_search(plan.search, Instant::now());
	session.flush_search();

	if let Some(page) = plan.page
		&& !session.go_to_page(page).is_applied()
	{
		log::warn!("page {page} is out of range; staying on the current page");
	}

	if let Some(key) = plan.pick.as_deref() {
		session.select(key)?;
		let outcome = outcomes
			.recv()
			.context("picker closed without delivering its outcome")?;
		return Ok(RunResult::Outcome(outcome));
	}

	session
		.view()
		.map(RunResult::Page)
		.context("picker has no page to show")
}
