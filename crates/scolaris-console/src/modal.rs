//! Modal and overlay lifecycle
//!
//! One enum holds the whole overlay state, so two modals can never be open at
//! once: opening one closes whatever was open before. Escape and a backdrop
//! click both dismiss the current overlay.

use parking_lot::Mutex;
use scolaris_core::RowKey;

/// The single overlay state of a console view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
	/// No overlay is open
	#[default]
	Closed,
	/// The add-record form is open
	AddOpen,
	/// The edit-record form is open for the given row
	EditOpen(RowKey),
	/// The import preview table is open
	ImportPreviewOpen,
}

impl ModalState {
	/// Returns true when any overlay is open
	pub fn is_open(&self) -> bool {
		*self != ModalState::Closed
	}
}

/// Shared owner of the overlay state
#[derive(Debug, Default)]
pub struct ModalController {
	state: Mutex<ModalState>,
}

impl ModalController {
	/// Creates a controller with no overlay open
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns a snapshot of the current state
	pub fn current(&self) -> ModalState {
		self.state.lock().clone()
	}

	/// Opens the add form, displacing any open overlay
	pub fn open_add(&self) {
		*self.state.lock() = ModalState::AddOpen;
	}

	/// Opens the edit form for one row, displacing any open overlay
	pub fn open_edit(&self, key: RowKey) {
		*self.state.lock() = ModalState::EditOpen(key);
	}

	/// Opens the import preview, displacing any open overlay
	pub fn open_import_preview(&self) {
		*self.state.lock() = ModalState::ImportPreviewOpen;
	}

	/// Closes whatever overlay is open
	///
	/// Returns the state that was dismissed so the caller can run the
	/// matching teardown (e.g. discarding an import preview buffer).
	pub fn close(&self) -> ModalState {
		std::mem::take(&mut *self.state.lock())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_overlays_are_mutually_exclusive() {
		let modal = ModalController::new();
		modal.open_add();
		assert_eq!(modal.current(), ModalState::AddOpen);

		modal.open_edit(RowKey::Int(7));
		assert_eq!(modal.current(), ModalState::EditOpen(RowKey::Int(7)));

		modal.open_import_preview();
		assert_eq!(modal.current(), ModalState::ImportPreviewOpen);
	}

	#[test]
	fn test_close_returns_dismissed_state() {
		let modal = ModalController::new();
		modal.open_add();
		assert_eq!(modal.close(), ModalState::AddOpen);
		assert_eq!(modal.current(), ModalState::Closed);

		// Closing an already-closed controller is a no-op
		assert_eq!(modal.close(), ModalState::Closed);
	}
}
