//! Spreadsheet import/export pipelines for the scolaris admin console
//!
//! The import side reads a workbook file, resolves its header row against
//! the declared contract, maps data rows into a transient preview buffer,
//! and on confirmation re-serializes the buffer into a single workbook
//! payload for upload. The export side serializes the full loaded record
//! set (never the filtered view) into a workbook or CSV file, and can
//! produce an empty header-only template for offline fill-in.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod export;
pub mod import;
pub mod workbook;

// Re-exports for convenience
pub use export::{ExportConfig, ExportFormat, ExportResult};
pub use import::{ImportConfig, ImportPipeline, ImportStage};
