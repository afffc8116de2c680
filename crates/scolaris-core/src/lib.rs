//! Record-agnostic table engine for the scolaris admin console
//!
//! This crate provides the data-side half of the console: declarative column
//! definitions, stable row identity, a combined full-text search and
//! exact-match filter pipeline, and a pagination controller. It is parametric
//! over the record type and never inspects domain fields beyond what the
//! column set and filter configuration expose.
//!
//! # Example
//!
//! ```rust
//! use scolaris_core::{ColumnSet, FilterSet, Paginator, TextColumn, filters};
//! use serde::Serialize;
//!
//! #[derive(Debug, Serialize)]
//! struct Student {
//!     id: i64,
//!     name: String,
//!     status: String,
//! }
//!
//! let columns = ColumnSet::new(vec![
//!     TextColumn::new("id", "ID", |s: &Student| s.id.to_string()).boxed(),
//!     TextColumn::new("name", "Name", |s: &Student| s.name.clone()).boxed(),
//! ])
//! .unwrap();
//!
//! let data = vec![
//!     Student { id: 1, name: "Maria Lopez".into(), status: "active".into() },
//!     Student { id: 2, name: "Jon Snow".into(), status: "inactive".into() },
//! ];
//!
//! let mut active = FilterSet::new();
//! active.set("status", "active");
//!
//! let visible = filters::apply(&data, "maria", &active);
//! assert_eq!(visible.len(), 1);
//!
//! let paginator = Paginator::new(25);
//! let page = paginator.paginate(&visible);
//! assert_eq!(page.total_pages, 1);
//! assert_eq!(columns.render_row(visible[0])[1], "Maria Lopez");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod column;
pub mod error;
pub mod filters;
pub mod identity;
pub mod pagination;

// Re-exports for convenience
pub use column::{Column, ColumnSet, TextColumn};
pub use error::{ConsoleError, ConsoleResult};
pub use filters::{FilterConfig, FilterOption, FilterSet};
pub use identity::RowKey;
pub use pagination::{PageView, Paginator};
