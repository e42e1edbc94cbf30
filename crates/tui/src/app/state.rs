//! Core state container for the terminal picker.
//!
//! The [`App`] owns one [`PickerSession`] and the UI affordances around it:
//! the search prompt, the highlighted grid cell, and the spinner shown while
//! the catalog loads.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};
use std::time::Instant;

use iconpick_core::{
	CatalogCache, PickerOutcome, PickerSession, PickerView, SelectionSink, SessionOptions,
	SessionPhase,
};
use throbber_widgets_tui::ThrobberState;

use crate::config::UiLabels;
use crate::input::QueryInput;
use crate::style::Theme;

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	/// Text input widget for the search filter.
	pub search_input: QueryInput<'a>,
	pub(crate) session: PickerSession,
	pub(crate) outcomes: Receiver<PickerOutcome>,
	/// Last view emitted by the session.
	pub(crate) view: Option<PickerView>,
	/// Visible index of the highlighted grid cell.
	pub(crate) cursor: usize,
	pub(crate) labels: UiLabels,
	pub(crate) theme: Theme,
	pub(crate) throbber_state: ThrobberState,
}

impl<'a> App<'a> {
	/// Open a picker session and start loading its catalog in the background.
	pub fn new(options: SessionOptions, cache: Arc<CatalogCache>) -> Self {
		let (tx, outcomes) = mpsc::channel();
		let mut session = PickerSession::open(options, cache, SelectionSink::new(tx));
		session.start_load();

		Self {
			search_input: QueryInput::default(),
			session,
			outcomes,
			view: None,
			cursor: 0,
			labels: UiLabels::default(),
			theme: Theme::default(),
			throbber_state: ThrobberState::default(),
		}
	}

	#[must_use]
	pub fn phase(&self) -> SessionPhase {
		self.session.phase()
	}

	/// The view currently on screen.
	#[must_use]
	pub fn view(&self) -> Option<&PickerView> {
		self.view.as_ref()
	}

	/// Apply finished loads and due search commits.
	///
	/// A committed search returns the session to page 1, so the highlight
	/// goes back to the first cell.
	pub(crate) fn pump(&mut self, now: Instant) {
		if !self.session.pump(now).is_applied() {
			return;
		}
		let previous_term = self.view.as_ref().map(|view| view.search_term.clone());
		self.refresh_view();
		let current_term = self.view.as_ref().map(|view| &view.search_term);
		if current_term != previous_term.as_ref() {
			self.cursor = 0;
		}
	}

	/// Pull the latest view from the session and keep the cursor on a
	/// visible cell.
	pub(crate) fn refresh_view(&mut self) {
		self.view = self.session.view();
		let visible = self.visible_len();
		if visible == 0 {
			self.cursor = 0;
		} else if self.cursor >= visible {
			self.cursor = visible - 1;
		}
	}

	pub(crate) fn visible_len(&self) -> usize {
		self.view
			.as_ref()
			.map_or(0, |view| view.page.visible_items.len())
	}

	/// The outcome delivered by the session, once it has ended.
	pub(crate) fn take_outcome(&self) -> Option<PickerOutcome> {
		self.outcomes.try_recv().ok()
	}
}
