//! Scolaris: an administrative console engine for school-management platforms
//!
//! Scolaris is the headless core of a school administration back office. It
//! turns a loaded record set into a searchable, filterable, paginated table
//! view with modal-driven CRUD, spreadsheet import with a confirm-or-cancel
//! preview, and spreadsheet export. Rendering stays with the host; Scolaris
//! owns every state transition in between.
//!
//! The workspace splits along its seams:
//!
//! - `scolaris-core` — columns, row identity, filter/search pipeline,
//!   pagination
//! - `scolaris-interchange` — workbook import/export pipelines
//! - `scolaris-console` — the [`TableView`] engine, modal lifecycle,
//!   notifications
//! - `scolaris-client` — the authenticated HTTP client for bulk endpoints
//!
//! The [`entities`] module provides ready-made column sets, filters and
//! import/export contracts for the five school entities.
//!
//! # Examples
//!
//! ```rust
//! use scolaris::entities::students;
//! use scolaris::prelude::*;
//!
//! let view = TableView::builder(students::columns()?)
//!     .with_data(vec![students::Student {
//!         id: 1,
//!         first_name: "Maria".into(),
//!         last_name: "Lopez".into(),
//!         email: "maria.lopez@example.edu".into(),
//!         status: "active".into(),
//!         formation: "Licence Informatique".into(),
//!     }])
//!     .with_filters(students::filters())
//!     .with_row_id(students::row_key)
//!     .build();
//!
//! view.set_search_text("lopez");
//! view.submit_search();
//! assert_eq!(view.visible_rows().total_items, 1);
//! # Ok::<(), scolaris::ConsoleError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub use scolaris_client as client;
pub use scolaris_console as console;
pub use scolaris_core as core;
pub use scolaris_interchange as interchange;

pub mod entities;

pub use scolaris_client::{ApiClient, Credential};
pub use scolaris_console::{
	EntityActions, ModalState, Notice, NoticeLevel, PageSnapshot, RowSnapshot, TableView,
};
pub use scolaris_core::{
	Column, ColumnSet, ConsoleError, ConsoleResult, FilterConfig, FilterOption, FilterSet,
	RowKey, TextColumn,
};
pub use scolaris_interchange::{
	ExportConfig, ExportFormat, ExportResult, ImportConfig, ImportPipeline, ImportStage,
};

/// Everything a host application typically needs in scope
pub mod prelude {
	pub use crate::client::{ApiClient, Credential};
	pub use crate::console::{
		EntityActions, ModalState, Notice, NoticeLevel, PageSnapshot, RowSnapshot, TableView,
	};
	pub use crate::core::{
		Column, ColumnSet, ConsoleError, ConsoleResult, FilterConfig, FilterOption, FilterSet,
		RowKey, TextColumn,
	};
	pub use crate::interchange::{
		ExportConfig, ExportFormat, ExportResult, ImportConfig, ImportPipeline, ImportStage,
	};
}
