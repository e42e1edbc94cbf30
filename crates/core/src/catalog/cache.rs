use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;

use super::{Catalog, CatalogSource};
use crate::error::CatalogError;

/// Load-once service wrapping a [`CatalogSource`].
///
/// The first successful load is kept for the lifetime of the cache and every
/// later [`load`](Self::load) returns it without consulting the source. There
/// is no invalidation point. Failed loads leave the slot empty so a retry goes
/// back to the source.
pub struct CatalogCache {
	source: Box<dyn CatalogSource>,
	slot: Mutex<Option<Catalog>>,
}

impl CatalogCache {
	pub fn new(source: impl CatalogSource + 'static) -> Self {
		Self {
			source: Box::new(source),
			slot: Mutex::new(None),
		}
	}

	/// Convenience constructor for sharing one cache between sessions.
	pub fn shared(source: impl CatalogSource + 'static) -> Arc<Self> {
		Arc::new(Self::new(source))
	}

	/// Return the cached catalog, loading it from the source on first use.
	///
	/// Concurrent callers block on the same slot, so the source runs at most
	/// once per successful result.
	pub fn load(&self) -> Result<Catalog, CatalogError> {
		let mut slot = self.lock_slot();
		if let Some(catalog) = slot.as_ref() {
			return Ok(catalog.clone());
		}

		let description = self.source.describe();
		match self.source.load() {
			Ok(icons) => {
				log::info!("loaded {} icons from {description}", icons.len());
				let catalog = Catalog::new(icons);
				*slot = Some(catalog.clone());
				Ok(catalog)
			}
			Err(err) => {
				log::warn!("icon catalog load from {description} failed: {err}");
				Err(err)
			}
		}
	}

	/// Whether a catalog has been loaded successfully.
	pub fn is_loaded(&self) -> bool {
		self.lock_slot().is_some()
	}

	/// The cached catalog, if any, without touching the source.
	pub fn cached(&self) -> Option<Catalog> {
		self.lock_slot().clone()
	}

	fn lock_slot(&self) -> MutexGuard<'_, Option<Catalog>> {
		self.slot
			.lock()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
	}
}

/// Identifies one load request issued by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(pub u64);

/// Result of a background load, tagged with the ticket that requested it.
#[derive(Debug)]
pub struct LoadCompletion {
	pub ticket: LoadTicket,
	pub result: Result<Catalog, CatalogError>,
}

/// Run [`CatalogCache::load`] on a background thread.
///
/// The completion arrives on the returned receiver. If the receiver has been
/// dropped by then the result is discarded.
pub fn spawn_load(cache: Arc<CatalogCache>, ticket: LoadTicket) -> Receiver<LoadCompletion> {
	let (tx, rx) = mpsc::channel();
	thread::spawn(move || {
		let result = cache.load();
		let _ = tx.send(LoadCompletion { ticket, result });
	});
	rx
}
