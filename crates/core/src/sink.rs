//! Single commit point between a picker session and the dialog that opened it.

use std::sync::mpsc::Sender;

use serde::Serialize;

use crate::catalog::IconRecord;

/// Terminal result delivered to the [`DialogHost`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "icon", rename_all = "snake_case")]
pub enum PickerOutcome {
	/// The user picked an icon.
	Selected(IconRecord),
	/// The dialog closed without a pick.
	Cancelled,
}

impl PickerOutcome {
	#[must_use]
	pub fn icon(&self) -> Option<&IconRecord> {
		match self {
			Self::Selected(icon) => Some(icon),
			Self::Cancelled => None,
		}
	}

	#[must_use]
	pub fn is_selected(&self) -> bool {
		matches!(self, Self::Selected(_))
	}
}

/// Whoever opened the picker and waits for its result.
pub trait DialogHost: Send {
	/// Receive the session's terminal outcome. Called exactly once.
	fn close(&mut self, outcome: PickerOutcome);
}

impl DialogHost for Sender<PickerOutcome> {
	fn close(&mut self, outcome: PickerOutcome) {
		if self.send(outcome).is_err() {
			log::debug!("dialog host stopped listening before the picker closed");
		}
	}
}

/// Hands the outcome to the host at most once.
pub struct SelectionSink {
	host: Option<Box<dyn DialogHost>>,
}

impl SelectionSink {
	pub fn new(host: impl DialogHost + 'static) -> Self {
		Self {
			host: Some(Box::new(host)),
		}
	}

	/// A sink whose outcome nobody observes.
	#[must_use]
	pub fn detached() -> Self {
		Self {
			host: Some(Box::new(DetachedHost)),
		}
	}

	/// Whether an outcome has already been delivered.
	#[must_use]
	pub fn is_closed(&self) -> bool {
		self.host.is_none()
	}

	/// Deliver `outcome`. Returns `false` if the sink was already used.
	pub fn deliver(&mut self, outcome: PickerOutcome) -> bool {
		match self.host.take() {
			Some(mut host) => {
				host.close(outcome);
				true
			}
			None => false,
		}
	}
}

impl std::fmt::Debug for SelectionSink {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SelectionSink")
			.field("closed", &self.is_closed())
			.finish()
	}
}

struct DetachedHost;

impl DialogHost for DetachedHost {
	fn close(&mut self, _outcome: PickerOutcome) {}
}

#[cfg(test)]
mod tests {
	use std::sync::mpsc;

	use super::*;

	#[test]
	fn delivers_only_once() {
		let (tx, rx) = mpsc::channel();
		let mut sink = SelectionSink::new(tx);
		let icon = IconRecord::new("User", "People", "icon-user");

		assert!(sink.deliver(PickerOutcome::Selected(icon.clone())));
		assert!(sink.is_closed());
		assert!(!sink.deliver(PickerOutcome::Cancelled));

		assert_eq!(rx.try_recv(), Ok(PickerOutcome::Selected(icon)));
		assert!(rx.try_recv().is_err());
	}

	#[test]
	fn cancellation_is_distinct_from_selection() {
		let outcome = PickerOutcome::Cancelled;
		assert!(!outcome.is_selected());
		assert_eq!(outcome.icon(), None);

		let json = serde_json::to_value(&outcome).expect("serialize");
		assert_eq!(json["outcome"], "cancelled");
	}
}
