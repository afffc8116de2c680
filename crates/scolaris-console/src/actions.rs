//! Entity action callbacks and in-flight guards
//!
//! The engine owns orchestration (modal lifecycle, notifications, page
//! resets) but never talks to the records API itself: the host supplies an
//! [`EntityActions`] implementation per entity and the engine dispatches
//! through it. Each action kind also carries an [`ActionGuard`] so a
//! double-click cannot issue the same request twice.

use async_trait::async_trait;
use scolaris_core::{ConsoleResult, RowKey};
use std::sync::atomic::{AtomicBool, Ordering};

/// Per-entity CRUD callbacks supplied by the host
///
/// The capability methods gate which actions the view offers at all; they
/// default to everything allowed. A capability returning false hides the
/// action rather than failing it at submit time.
#[async_trait]
pub trait EntityActions: Send + Sync {
	/// Record type the callbacks operate on
	type Record: Send + 'static;

	/// Persists a new record
	async fn create(&self, record: Self::Record) -> ConsoleResult<()>;

	/// Persists changes to the record identified by `key`
	async fn update(&self, key: RowKey, record: Self::Record) -> ConsoleResult<()>;

	/// Deletes the record identified by `key`
	async fn delete(&self, key: RowKey) -> ConsoleResult<()>;

	/// Whether the add action is offered
	fn can_create(&self) -> bool {
		true
	}

	/// Whether the edit action is offered
	fn can_update(&self) -> bool {
		true
	}

	/// Whether the delete action is offered
	fn can_delete(&self) -> bool {
		true
	}
}

/// One-at-a-time guard for an action kind
///
/// `try_begin` hands out a permit only while no other permit is live; the
/// permit releases the guard on drop, including on the error path.
#[derive(Debug, Default)]
pub struct ActionGuard {
	busy: AtomicBool,
}

impl ActionGuard {
	/// Creates an idle guard
	pub fn new() -> Self {
		Self::default()
	}

	/// Attempts to start the action; returns `None` while one is in flight
	pub fn try_begin(&self) -> Option<ActionPermit<'_>> {
		self.busy
			.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
			.ok()
			.map(|_| ActionPermit { guard: self })
	}

	/// Returns true while a permit is live
	pub fn is_busy(&self) -> bool {
		self.busy.load(Ordering::Acquire)
	}
}

/// Live permit for one in-flight action
#[derive(Debug)]
pub struct ActionPermit<'a> {
	guard: &'a ActionGuard,
}

impl Drop for ActionPermit<'_> {
	fn drop(&mut self) {
		self.guard.busy.store(false, Ordering::Release);
	}
}
