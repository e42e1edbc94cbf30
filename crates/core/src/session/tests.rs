use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::*;
use crate::catalog::{BuiltinCatalog, CatalogSource};

struct FixedSource(Vec<IconRecord>);

impl CatalogSource for FixedSource {
	fn describe(&self) -> String {
		"fixed".to_string()
	}

	fn load(&self) -> Result<Vec<IconRecord>, CatalogError> {
		Ok(self.0.clone())
	}
}

struct FailingSource;

impl CatalogSource for FailingSource {
	fn describe(&self) -> String {
		"failing".to_string()
	}

	fn load(&self) -> Result<Vec<IconRecord>, CatalogError> {
		Err(CatalogError::source_failure("network unreachable"))
	}
}

fn three_icons() -> Vec<IconRecord> {
	vec![
		IconRecord::new("Home", "General", "icon-home"),
		IconRecord::new("Settings", "General", "icon-settings"),
		IconRecord::new("User", "People", "icon-user"),
	]
}

fn open_with(
	source: impl CatalogSource + 'static,
	rows: i64,
	cols: i64,
) -> (PickerSession, Receiver<PickerOutcome>) {
	let (tx, rx) = mpsc::channel();
	let session = PickerSession::open(
		SessionOptions::grid(Some(rows), Some(cols)),
		CatalogCache::shared(source),
		SelectionSink::new(tx),
	);
	(session, rx)
}

fn ready_session() -> (PickerSession, Receiver<PickerOutcome>) {
	let (mut session, rx) = open_with(FixedSource(three_icons()), 1, 2);
	assert_eq!(session.load_now(), Transition::Applied);
	(session, rx)
}

fn visible_names(session: &PickerSession) -> Vec<String> {
	session
		.view()
		.expect("session should be ready")
		.page
		.visible_items
		.into_iter()
		.map(|icon| icon.name)
		.collect()
}

fn wait_until_ready(session: &mut PickerSession) {
	let deadline = Instant::now() + Duration::from_secs(1);
	while session.phase() == SessionPhase::Loading && Instant::now() < deadline {
		std::thread::sleep(Duration::from_millis(5));
		session.pump(Instant::now());
	}
}

#[test]
fn load_initializes_unfiltered_first_page() {
	let (session, _rx) = ready_session();
	let view = session.view().expect("ready");

	assert_eq!(session.phase(), SessionPhase::Ready);
	assert_eq!(view.category, ALL_CATEGORIES);
	assert_eq!(view.search_term, "");
	assert_eq!(view.page.current_page, 1);
	assert_eq!(view.page.total_pages, 2);
	assert_eq!(visible_names(&session), vec!["Home", "Settings"]);
	assert_eq!(view.categories, vec!["all", "General", "People"]);
}

#[test]
fn category_change_resets_page_and_narrows_results() {
	let (mut session, _rx) = ready_session();
	assert_eq!(session.go_to_page(2), Transition::Applied);
	assert_eq!(visible_names(&session), vec!["User"]);

	assert_eq!(session.set_category("People"), Transition::Applied);
	let view = session.view().expect("ready");
	assert_eq!(view.page.current_page, 1);
	assert_eq!(view.page.total_pages, 1);
	assert_eq!(visible_names(&session), vec!["User"]);

	assert_eq!(session.go_to_page(2), Transition::Ignored);
	assert_eq!(session.view().expect("ready"), view);
}

#[test]
fn repeated_or_unknown_category_is_ignored() {
	let (mut session, _rx) = ready_session();
	let updates = session.subscribe();

	assert_eq!(session.set_category(ALL_CATEGORIES), Transition::Ignored);
	assert_eq!(session.set_category("Animals"), Transition::Ignored);
	assert!(updates.try_recv().is_err());
}

#[test]
fn category_vocabulary_is_fixed_for_the_session() {
	let (mut session, _rx) = ready_session();
	session.input_search("zzz", Instant::now());
	session.flush_search();

	let view = session.view().expect("ready");
	assert_eq!(view.page.filtered_count, 0);
	assert_eq!(view.categories, vec!["all", "General", "People"]);
}

#[test]
fn search_commit_resets_page_even_when_count_is_unchanged() {
	let (mut session, _rx) = ready_session();
	let start = Instant::now();
	session.go_to_page(2);

	// Every icon contains an "e", so the filtered count stays at three.
	session.input_search("e", start);
	assert_eq!(session.tick(start + Duration::from_millis(299)), Transition::Ignored);
	assert_eq!(session.view().expect("ready").page.current_page, 2);

	assert_eq!(session.tick(start + Duration::from_millis(300)), Transition::Applied);
	let view = session.view().expect("ready");
	assert_eq!(view.search_term, "e");
	assert_eq!(view.page.filtered_count, 3);
	assert_eq!(view.page.current_page, 1);
}

#[test]
fn search_applies_within_selected_category() {
	let (mut session, _rx) = ready_session();
	session.set_category("General");
	session.input_search("SET", Instant::now());
	session.flush_search();

	assert_eq!(visible_names(&session), vec!["Settings"]);
}

#[test]
fn out_of_range_navigation_is_ignored() {
	let (mut session, _rx) = ready_session();
	assert_eq!(session.go_to_page(0), Transition::Ignored);
	assert_eq!(session.go_to_page(3), Transition::Ignored);
	assert_eq!(session.previous_page(), Transition::Ignored);
	assert_eq!(session.next_page(), Transition::Applied);
	assert_eq!(session.next_page(), Transition::Ignored);
	assert_eq!(session.view().expect("ready").page.current_page, 2);
}

#[test]
fn every_accepted_transition_emits_a_view() {
	let (mut session, _rx) = open_with(FixedSource(three_icons()), 1, 2);
	let updates = session.subscribe();

	session.load_now();
	session.go_to_page(2);
	session.go_to_page(9);
	session.set_category("People");

	let pages: Vec<usize> = updates.try_iter().map(|view| view.page.current_page).collect();
	assert_eq!(pages, vec![1, 2, 1]);
}

#[test]
fn committed_search_terms_emit_views_and_duplicates_do_not() {
	let (mut session, _rx) = open_with(FixedSource(three_icons()), 1, 2);
	let updates = session.subscribe();
	session.load_now();
	let start = Instant::now();

	session.input_search("e", start);
	assert_eq!(session.tick(start + Duration::from_millis(299)), Transition::Ignored);
	assert_eq!(session.tick(start + Duration::from_millis(300)), Transition::Applied);

	session.input_search("ex", start + Duration::from_millis(400));
	session.input_search("e", start + Duration::from_millis(450));
	assert_eq!(session.tick(start + Duration::from_secs(1)), Transition::Ignored);

	session.input_search("user", start + Duration::from_secs(2));
	assert_eq!(session.flush_search(), Transition::Applied);
	session.input_search("user", start + Duration::from_secs(3));
	assert_eq!(session.flush_search(), Transition::Ignored);

	let terms: Vec<String> = updates.try_iter().map(|view| view.search_term).collect();
	assert_eq!(terms, ["", "e", "user"]);
}

#[test]
fn selection_is_terminal() {
	let (mut session, rx) = ready_session();
	session.set_category("People");

	let icon = session.select("icon-user").expect("user is visible");
	assert_eq!(session.phase(), SessionPhase::Selected);
	assert_eq!(session.selection(), Some(&icon));
	assert_eq!(rx.try_recv(), Ok(PickerOutcome::Selected(icon.clone())));

	assert_eq!(
		session.commit(icon),
		Err(PickerError::InvalidSessionState {
			phase: SessionPhase::Selected
		})
	);
	assert_eq!(session.set_category(ALL_CATEGORIES), Transition::Ignored);
	assert_eq!(session.go_to_page(1), Transition::Ignored);
	assert!(rx.try_recv().is_err());
}

#[test]
fn selecting_hidden_icon_is_rejected() {
	let (mut session, _rx) = ready_session();
	assert_eq!(
		session.select("icon-user"),
		Err(PickerError::NotVisible {
			key: "icon-user".to_string()
		})
	);
	assert_eq!(session.phase(), SessionPhase::Ready);

	let picked = session.select_visible(1).expect("second cell");
	assert_eq!(picked.key, "icon-settings");
}

#[test]
fn selection_before_load_is_not_ready() {
	let (mut session, _rx) = open_with(FixedSource(three_icons()), 1, 2);
	assert_eq!(
		session.select_visible(0),
		Err(PickerError::NotReady {
			phase: SessionPhase::Loading
		})
	);
}

#[test]
fn pending_search_never_fires_after_selection() {
	let (mut session, _rx) = ready_session();
	let start = Instant::now();
	session.input_search("user", start);
	session.select_visible(0).expect("first cell");

	assert_eq!(session.search_deadline(), None);
	assert_eq!(session.tick(start + Duration::from_secs(1)), Transition::Ignored);
	assert_eq!(session.search_term(), "");
}

#[test]
fn cancel_delivers_explicit_no_selection() {
	let (mut session, rx) = ready_session();
	session.cancel().expect("cancel once");

	assert_eq!(session.phase(), SessionPhase::Cancelled);
	assert_eq!(rx.try_recv(), Ok(PickerOutcome::Cancelled));
	assert!(matches!(
		session.cancel(),
		Err(PickerError::InvalidSessionState { .. })
	));
}

#[test]
fn dropping_an_open_session_cancels_it() {
	let (session, rx) = ready_session();
	drop(session);
	assert_eq!(rx.try_recv(), Ok(PickerOutcome::Cancelled));
}

#[test]
fn load_failure_is_a_distinct_phase_and_can_be_retried() {
	let (mut session, _rx) = open_with(FailingSource, 5, 10);
	assert_eq!(session.load_now(), Transition::Applied);
	assert_eq!(session.phase(), SessionPhase::LoadFailed);
	assert!(session.view().is_none());
	assert!(matches!(session.load_error(), Some(CatalogError::Source(_))));

	assert_eq!(session.retry(), Transition::Applied);
	assert_eq!(session.phase(), SessionPhase::Loading);
	wait_until_ready(&mut session);
	assert_eq!(session.phase(), SessionPhase::LoadFailed);
}

#[test]
fn background_load_is_applied_by_pump() {
	let (mut session, _rx) = open_with(BuiltinCatalog, 0, 0);
	assert_eq!(session.start_load(), Transition::Applied);
	wait_until_ready(&mut session);

	let view = session.view().expect("builtin catalog loads");
	assert_eq!(view.page.filtered_count, 4);
	assert_eq!(view.page.total_pages, 1);
	assert_eq!(session.layout().page_size(), 50);
}

#[test]
fn stale_and_late_completions_are_ignored() {
	let (mut session, _rx) = open_with(FixedSource(three_icons()), 1, 2);
	let catalog = Catalog::new(three_icons());

	let first = session.begin_load().expect("loading");
	let second = session.begin_load().expect("still loading");
	assert_eq!(
		session.complete_load(LoadCompletion {
			ticket: first,
			result: Ok(catalog.clone()),
		}),
		Transition::Ignored
	);
	assert_eq!(session.phase(), SessionPhase::Loading);

	session.cancel().expect("cancel while loading");
	assert_eq!(
		session.complete_load(LoadCompletion {
			ticket: second,
			result: Ok(catalog),
		}),
		Transition::Ignored
	);
	assert_eq!(session.phase(), SessionPhase::Cancelled);
}

#[test]
fn search_committed_while_loading_seeds_the_ready_state() {
	let (mut session, _rx) = open_with(FixedSource(three_icons()), 1, 2);
	let start = Instant::now();
	session.input_search("user", start);
	assert_eq!(session.tick(start + Duration::from_millis(300)), Transition::Ignored);
	assert_eq!(session.search_term(), "user");

	session.load_now();
	let view = session.view().expect("ready");
	assert_eq!(view.search_term, "user");
	assert_eq!(visible_names(&session), vec!["User"]);
}

#[test]
fn sessions_share_one_cached_catalog() {
	let cache = CatalogCache::shared(FixedSource(three_icons()));
	let mut first = PickerSession::open(
		SessionOptions::default(),
		Arc::clone(&cache),
		SelectionSink::detached(),
	);
	let mut second = PickerSession::open(
		SessionOptions::default(),
		Arc::clone(&cache),
		SelectionSink::detached(),
	);

	first.load_now();
	second.load_now();
	first.set_category("People");

	assert_eq!(first.view().expect("ready").page.filtered_count, 1);
	assert_eq!(second.view().expect("ready").page.filtered_count, 3);
	assert_eq!(cache.cached().map(|catalog| catalog.len()), Some(3));
}
