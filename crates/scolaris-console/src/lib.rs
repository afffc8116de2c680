//! Headless console orchestration
//!
//! The pieces a data-management screen is made of, with no rendering
//! attached: [`TableView`] combines search, filters and pagination over one
//! record set, [`ModalController`] keeps overlays mutually exclusive,
//! [`NotificationCenter`] queues action outcomes, and [`EntityActions`] is
//! the seam through which the host's CRUD calls flow.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod actions;
pub mod modal;
pub mod notifications;
pub mod view;

pub use actions::{ActionGuard, ActionPermit, EntityActions};
pub use modal::{ModalController, ModalState};
pub use notifications::{Notice, NoticeLevel, NotificationCenter};
pub use view::{PageSnapshot, RowSnapshot, TableView, TableViewBuilder};
