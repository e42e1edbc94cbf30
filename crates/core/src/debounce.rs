//! Quiet-window reducer for keystroke streams.
//!
//! [`Debouncer`] holds at most one pending value together with the deadline
//! at which it commits. Every new input replaces the pending value and pushes
//! the deadline out; [`poll`](Debouncer::poll) commits once the deadline has
//! passed. A commit equal to the previous one is swallowed. Time is supplied
//! by the caller, so the reducer itself never sleeps.

use std::time::{Duration, Instant};

/// Quiet window applied to search input.
pub const SEARCH_QUIET_WINDOW: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
struct Pending<T> {
	value: T,
	deadline: Instant,
}

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
	window: Duration,
	pending: Option<Pending<T>>,
	committed: T,
}

impl<T: Clone + PartialEq> Debouncer<T> {
	/// Create a debouncer whose first commit is `initial`.
	///
	/// The initial value counts as already emitted: callers apply it
	/// immediately and later duplicates of it are suppressed.
	#[must_use]
	pub fn new(window: Duration, initial: T) -> Self {
		Self {
			window,
			pending: None,
			committed: initial,
		}
	}

	#[must_use]
	pub fn window(&self) -> Duration {
		self.window
	}

	/// The most recently committed value.
	#[must_use]
	pub fn committed(&self) -> &T {
		&self.committed
	}

	#[must_use]
	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	/// When the pending value will commit, if one is waiting.
	#[must_use]
	pub fn deadline(&self) -> Option<Instant> {
		self.pending.as_ref().map(|pending| pending.deadline)
	}

	/// Record a raw input observed at `now`, discarding any earlier pending value.
	pub fn push(&mut self, value: T, now: Instant) {
		self.pending = Some(Pending {
			value,
			deadline: now + self.window,
		});
	}

	/// Commit the pending value if its quiet window has elapsed by `now`.
	///
	/// Returns the committed value only when it differs from the previous
	/// commit.
	pub fn poll(&mut self, now: Instant) -> Option<T> {
		let due = self
			.pending
			.as_ref()
			.is_some_and(|pending| now >= pending.deadline);
		if !due {
			return None;
		}
		self.flush()
	}

	/// Commit the pending value immediately, ignoring the deadline.
	pub fn flush(&mut self) -> Option<T> {
		let pending = self.pending.take()?;
		if pending.value == self.committed {
			return None;
		}
		self.committed = pending.value;
		Some(self.committed.clone())
	}

	/// Drop the pending value so it never commits.
	pub fn cancel(&mut self) {
		self.pending = None;
	}
}
