//! The filter–paginate–select state machine behind one picker dialog.
//!
//! A [`PickerSession`] starts in [`SessionPhase::Loading`], becomes
//! [`SessionPhase::Ready`] once the catalog arrives, and ends in either
//! [`SessionPhase::Selected`] or [`SessionPhase::Cancelled`]. All transitions
//! are applied one at a time by the owner of the session; the only work that
//! happens elsewhere is the optional background catalog load, whose result is
//! drained by [`PickerSession::pump`].
//!
//! Load completions carry a [`LoadTicket`]. Completions for anything other
//! than the most recent ticket, or arriving after the session ended, are
//! dropped.

use std::fmt;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::catalog::{Catalog, CatalogCache, IconRecord, LoadCompletion, LoadTicket, spawn_load};
use crate::debounce::{Debouncer, SEARCH_QUIET_WINDOW};
use crate::error::{CatalogError, PickerError};
use crate::filter::{ALL_CATEGORIES, FilterCriteria, filter_indices};
use crate::paginate::{PageLayout, PagedResult, paginate};
use crate::sink::{PickerOutcome, SelectionSink};
use crate::view::PickerView;

/// Outer state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
	Loading,
	LoadFailed,
	Ready,
	Selected,
	Cancelled,
}

impl SessionPhase {
	/// Whether the session has ended and ignores further events.
	#[must_use]
	pub fn is_terminal(self) -> bool {
		matches!(self, Self::Selected | Self::Cancelled)
	}
}

impl fmt::Display for SessionPhase {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Loading => "loading",
			Self::LoadFailed => "load-failed",
			Self::Ready => "ready",
			Self::Selected => "selected",
			Self::Cancelled => "cancelled",
		})
	}
}

/// Whether an event changed the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
	Applied,
	Ignored,
}

impl Transition {
	#[must_use]
	pub fn is_applied(self) -> bool {
		self == Self::Applied
	}

	fn or(self, other: Self) -> Self {
		if self.is_applied() { self } else { other }
	}
}

/// Parameters supplied by the dialog that opens a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
	pub layout: PageLayout,
	pub quiet_window: Duration,
}

impl SessionOptions {
	/// Options for a `rows` × `cols` grid; invalid dimensions fall back to
	/// the defaults.
	#[must_use]
	pub fn grid(rows: Option<i64>, cols: Option<i64>) -> Self {
		Self {
			layout: PageLayout::new(rows, cols),
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_quiet_window(mut self, quiet_window: Duration) -> Self {
		self.quiet_window = quiet_window;
		self
	}
}

impl Default for SessionOptions {
	fn default() -> Self {
		Self {
			layout: PageLayout::default(),
			quiet_window: SEARCH_QUIET_WINDOW,
		}
	}
}

/// Derived state of a ready session.
#[derive(Debug)]
struct Browser {
	catalog: Catalog,
	categories: Vec<String>,
	criteria: FilterCriteria,
	filtered: Vec<usize>,
	page: PagedResult<IconRecord>,
}

impl Browser {
	fn new(catalog: Catalog, search_term: String, page_size: usize) -> Self {
		let mut categories = vec![ALL_CATEGORIES.to_string()];
		categories.extend(
			catalog
				.categories()
				.into_iter()
				.filter(|category| category != ALL_CATEGORIES),
		);
		let mut browser = Self {
			catalog,
			categories,
			criteria: FilterCriteria::new(ALL_CATEGORIES, search_term),
			filtered: Vec::new(),
			page: paginate::<IconRecord>(&[], page_size, 1),
		};
		browser.refilter(page_size);
		browser
	}

	/// Recompute the filtered set and return to the first page.
	fn refilter(&mut self, page_size: usize) {
		self.filtered = filter_indices(&self.catalog, &self.criteria);
		self.show_page(1, page_size);
	}

	fn show_page(&mut self, page: usize, page_size: usize) {
		let PagedResult {
			filtered_count,
			total_pages,
			current_page,
			visible_items,
		} = paginate(&self.filtered, page_size, page);
		self.page = PagedResult {
			filtered_count,
			total_pages,
			current_page,
			visible_items: visible_items
				.into_iter()
				.map(|index| self.catalog[index].clone())
				.collect(),
		};
	}

	fn view(&self) -> PickerView {
		PickerView {
			page: self.page.clone(),
			categories: self.categories.clone(),
			category: self.criteria.category.clone(),
			search_term: self.criteria.search_term.clone(),
		}
	}
}

enum State {
	Loading,
	LoadFailed(CatalogError),
	Ready(Box<Browser>),
	Selected(IconRecord),
	Cancelled,
}

impl State {
	fn phase(&self) -> SessionPhase {
		match self {
			Self::Loading => SessionPhase::Loading,
			Self::LoadFailed(_) => SessionPhase::LoadFailed,
			Self::Ready(_) => SessionPhase::Ready,
			Self::Selected(_) => SessionPhase::Selected,
			Self::Cancelled => SessionPhase::Cancelled,
		}
	}
}

#[derive(Default)]
struct LoadRuntime {
	last_ticket: u64,
	current: Option<LoadTicket>,
	completions: Option<Receiver<LoadCompletion>>,
}

impl LoadRuntime {
	fn issue(&mut self) -> LoadTicket {
		self.last_ticket = self.last_ticket.wrapping_add(1);
		let ticket = LoadTicket(self.last_ticket);
		self.current = Some(ticket);
		self.completions = None;
		ticket
	}

	fn matches_latest(&self, ticket: LoadTicket) -> bool {
		self.current == Some(ticket)
	}

	fn finish(&mut self) {
		self.current = None;
		self.completions = None;
	}
}

/// One picker lifecycle, from open to selection or cancellation.
pub struct PickerSession {
	layout: PageLayout,
	cache: Arc<CatalogCache>,
	state: State,
	search: Debouncer<String>,
	loads: LoadRuntime,
	sink: SelectionSink,
	observers: Vec<Sender<PickerView>>,
}

impl PickerSession {
	/// Open a session in the loading phase. No load is started yet; call
	/// [`start_load`](Self::start_load) or [`load_now`](Self::load_now).
	pub fn open(options: SessionOptions, cache: Arc<CatalogCache>, sink: SelectionSink) -> Self {
		Self {
			layout: options.layout,
			cache,
			state: State::Loading,
			search: Debouncer::new(options.quiet_window, String::new()),
			loads: LoadRuntime::default(),
			sink,
			observers: Vec::new(),
		}
	}

	#[must_use]
	pub fn phase(&self) -> SessionPhase {
		self.state.phase()
	}

	#[must_use]
	pub fn layout(&self) -> PageLayout {
		self.layout
	}

	/// Snapshot of the ready state, or `None` before the catalog arrives and
	/// after the session ends.
	#[must_use]
	pub fn view(&self) -> Option<PickerView> {
		match &self.state {
			State::Ready(browser) => Some(browser.view()),
			_ => None,
		}
	}

	/// The error behind [`SessionPhase::LoadFailed`].
	#[must_use]
	pub fn load_error(&self) -> Option<&CatalogError> {
		match &self.state {
			State::LoadFailed(err) => Some(err),
			_ => None,
		}
	}

	#[must_use]
	pub fn selection(&self) -> Option<&IconRecord> {
		match &self.state {
			State::Selected(icon) => Some(icon),
			_ => None,
		}
	}

	/// The committed search term.
	#[must_use]
	pub fn search_term(&self) -> &str {
		self.search.committed()
	}

	/// When a pending search term will commit, so hosts can schedule a tick.
	#[must_use]
	pub fn search_deadline(&self) -> Option<Instant> {
		self.search.deadline()
	}

	/// Receive a [`PickerView`] after every accepted transition.
	pub fn subscribe(&mut self) -> Receiver<PickerView> {
		let (tx, rx) = std::sync::mpsc::channel();
		self.observers.push(tx);
		rx
	}

	/// Issue a new load ticket, entering [`SessionPhase::Loading`].
	///
	/// Only valid while loading or after a failed load; returns `None` once
	/// the catalog is in place or the session has ended.
	pub fn begin_load(&mut self) -> Option<LoadTicket> {
		match self.state {
			State::Loading | State::LoadFailed(_) => {
				self.state = State::Loading;
				Some(self.loads.issue())
			}
			_ => None,
		}
	}

	/// Load the catalog on a background thread. The completion is applied by
	/// [`pump`](Self::pump).
	pub fn start_load(&mut self) -> Transition {
		let Some(ticket) = self.begin_load() else {
			return Transition::Ignored;
		};
		self.loads.completions = Some(spawn_load(Arc::clone(&self.cache), ticket));
		Transition::Applied
	}

	/// Load the catalog on the calling thread and apply the result.
	pub fn load_now(&mut self) -> Transition {
		let Some(ticket) = self.begin_load() else {
			return Transition::Ignored;
		};
		let result = self.cache.load();
		self.complete_load(LoadCompletion { ticket, result })
	}

	/// Re-enter loading after a failure and start a background load.
	pub fn retry(&mut self) -> Transition {
		if self.phase() != SessionPhase::LoadFailed {
			return Transition::Ignored;
		}
		log::info!("retrying icon catalog load");
		self.start_load()
	}

	/// Apply a catalog load result.
	pub fn complete_load(&mut self, completion: LoadCompletion) -> Transition {
		let LoadCompletion { ticket, result } = completion;
		if !matches!(self.state, State::Loading) || !self.loads.matches_latest(ticket) {
			log::debug!(
				"ignoring stale catalog load {ticket:?} in phase {}",
				self.phase()
			);
			return Transition::Ignored;
		}
		self.loads.finish();

		match result {
			Ok(catalog) => {
				let search_term = self.search.committed().clone();
				let browser = Browser::new(catalog, search_term, self.layout.page_size());
				self.state = State::Ready(Box::new(browser));
				self.emit();
			}
			Err(err) => {
				log::warn!("icon picker could not load its catalog: {err}");
				self.state = State::LoadFailed(err);
			}
		}
		Transition::Applied
	}

	/// Drain a finished background load and commit any due search term.
	pub fn pump(&mut self, now: Instant) -> Transition {
		let loaded = self.pump_load();
		let searched = self.tick(now);
		loaded.or(searched)
	}

	fn pump_load(&mut self) -> Transition {
		let Some(rx) = self.loads.completions.as_ref() else {
			return Transition::Ignored;
		};
		match rx.try_recv() {
			Ok(completion) => self.complete_load(completion),
			Err(TryRecvError::Empty) => Transition::Ignored,
			Err(TryRecvError::Disconnected) => {
				self.loads.completions = None;
				Transition::Ignored
			}
		}
	}

	/// Feed one raw search input observed at `now` into the debouncer.
	pub fn input_search(&mut self, text: impl Into<String>, now: Instant) {
		if self.phase().is_terminal() {
			return;
		}
		self.search.push(text.into(), now);
	}

	/// Commit the pending search term if its quiet window has elapsed.
	pub fn tick(&mut self, now: Instant) -> Transition {
		if self.phase().is_terminal() {
			return Transition::Ignored;
		}
		match self.search.poll(now) {
			Some(term) => self.apply_search(term),
			None => Transition::Ignored,
		}
	}

	/// Commit the pending search term immediately.
	pub fn flush_search(&mut self) -> Transition {
		if self.phase().is_terminal() {
			return Transition::Ignored;
		}
		match self.search.flush() {
			Some(term) => self.apply_search(term),
			None => Transition::Ignored,
		}
	}

	fn apply_search(&mut self, term: String) -> Transition {
		let page_size = self.layout.page_size();
		let State::Ready(browser) = &mut self.state else {
			// Picked up as the initial term once the catalog arrives.
			return Transition::Ignored;
		};
		browser.criteria.search_term = term;
		browser.refilter(page_size);
		self.emit();
		Transition::Applied
	}

	/// Switch the category filter and return to the first page.
	///
	/// Ignored when the category is already active or is not part of the
	/// session's vocabulary.
	pub fn set_category(&mut self, category: &str) -> Transition {
		let page_size = self.layout.page_size();
		let State::Ready(browser) = &mut self.state else {
			return Transition::Ignored;
		};
		if browser.criteria.category == category {
			return Transition::Ignored;
		}
		if !browser.categories.iter().any(|known| known == category) {
			log::debug!("ignoring unknown category '{category}'");
			return Transition::Ignored;
		}
		browser.criteria.category = category.to_string();
		browser.refilter(page_size);
		self.emit();
		Transition::Applied
	}

	/// Jump to the one-based `page`. Requests outside `1..=total_pages` are
	/// ignored.
	pub fn go_to_page(&mut self, page: usize) -> Transition {
		let page_size = self.layout.page_size();
		let State::Ready(browser) = &mut self.state else {
			return Transition::Ignored;
		};
		if page < 1 || page > browser.page.total_pages {
			log::debug!(
				"ignoring navigation to page {page} of {}",
				browser.page.total_pages
			);
			return Transition::Ignored;
		}
		browser.show_page(page, page_size);
		self.emit();
		Transition::Applied
	}

	pub fn next_page(&mut self) -> Transition {
		match self.current_page() {
			Some(page) => self.go_to_page(page.saturating_add(1)),
			None => Transition::Ignored,
		}
	}

	pub fn previous_page(&mut self) -> Transition {
		match self.current_page() {
			Some(page) => self.go_to_page(page.saturating_sub(1)),
			None => Transition::Ignored,
		}
	}

	fn current_page(&self) -> Option<usize> {
		match &self.state {
			State::Ready(browser) => Some(browser.page.current_page),
			_ => None,
		}
	}

	/// Pick the visible icon with `key`.
	pub fn select(&mut self, key: &str) -> Result<IconRecord, PickerError> {
		let icon = self.visible_icon(|icon| icon.key == key, key)?;
		self.commit(icon.clone())?;
		Ok(icon)
	}

	/// Pick the icon at `index` within the visible page.
	pub fn select_visible(&mut self, index: usize) -> Result<IconRecord, PickerError> {
		let icon = match &self.state {
			State::Ready(browser) => browser.page.visible_items.get(index).cloned(),
			_ => None,
		};
		match icon {
			Some(icon) => {
				self.commit(icon.clone())?;
				Ok(icon)
			}
			None => Err(self.selection_error(&format!("#{index}"))),
		}
	}

	/// Record `icon` as the session's selection and hand it to the dialog host.
	///
	/// The icon must be on the visible page. Fails with
	/// [`PickerError::InvalidSessionState`] once the session has ended.
	pub fn commit(&mut self, icon: IconRecord) -> Result<(), PickerError> {
		let icon = self.visible_icon(|visible| *visible == icon, &icon.key)?;
		log::info!("selected icon '{}'", icon.key);
		self.finish(State::Selected(icon.clone()), PickerOutcome::Selected(icon));
		Ok(())
	}

	/// Close the session without a selection.
	pub fn cancel(&mut self) -> Result<(), PickerError> {
		let phase = self.phase();
		if phase.is_terminal() {
			return Err(PickerError::InvalidSessionState { phase });
		}
		log::info!("icon picker cancelled in phase {phase}");
		self.finish(State::Cancelled, PickerOutcome::Cancelled);
		Ok(())
	}

	fn visible_icon(
		&self,
		predicate: impl Fn(&IconRecord) -> bool,
		label: &str,
	) -> Result<IconRecord, PickerError> {
		let found = match &self.state {
			State::Ready(browser) => browser
				.page
				.visible_items
				.iter()
				.find(|icon| predicate(icon))
				.cloned(),
			_ => None,
		};
		found.ok_or_else(|| self.selection_error(label))
	}

	fn selection_error(&self, label: &str) -> PickerError {
		let phase = self.phase();
		match phase {
			SessionPhase::Ready => PickerError::NotVisible {
				key: label.to_string(),
			},
			SessionPhase::Selected | SessionPhase::Cancelled => {
				PickerError::InvalidSessionState { phase }
			}
			SessionPhase::Loading | SessionPhase::LoadFailed => PickerError::NotReady { phase },
		}
	}

	fn finish(&mut self, state: State, outcome: PickerOutcome) {
		self.search.cancel();
		self.loads.finish();
		self.state = state;
		self.observers.clear();
		self.sink.deliver(outcome);
	}

	fn emit(&mut self) {
		if self.observers.is_empty() {
			return;
		}
		let Some(view) = self.view() else {
			return;
		};
		self.observers
			.retain(|observer| observer.send(view.clone()).is_ok());
	}
}

impl Drop for PickerSession {
	fn drop(&mut self) {
		if !self.sink.is_closed() {
			self.sink.deliver(PickerOutcome::Cancelled);
		}
	}
}

impl fmt::Debug for PickerSession {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PickerSession")
			.field("phase", &self.phase())
			.field("layout", &self.layout)
			.field("search_term", &self.search.committed())
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests;
