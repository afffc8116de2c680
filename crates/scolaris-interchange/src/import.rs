//! Spreadsheet import pipeline
//!
//! Stages: `Idle -> FileSelected -> Parsed -> PreviewOpen`, then either
//! `cancel` (discard the buffer) or a confirmed upload (the console layer
//! submits [`ImportPipeline::confirm_payload`] and calls
//! [`ImportPipeline::complete`] on success). Any parse failure returns the
//! pipeline to `Idle` without a partial buffer.

use crate::workbook;
use scolaris_core::{ConsoleError, ConsoleResult};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// Import configuration
///
/// Declares the contract a spreadsheet file must satisfy to be accepted,
/// and where confirmed import data is submitted.
///
/// # Examples
///
/// ```rust
/// use scolaris_interchange::ImportConfig;
///
/// let config = ImportConfig::new()
///     .with_header("first_name")
///     .with_header("last_name")
///     .with_api_url("/api/admin/students/import");
///
/// assert_eq!(config.headers().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportConfig {
	/// Expected column headers, order-significant
	headers: Vec<String>,
	/// Endpoint confirmed import data is uploaded to
	api_url: Option<String>,
	/// Explicit override for "is the first file row a header row"
	header_row: Option<bool>,
}

impl ImportConfig {
	/// Creates an empty import configuration
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends one expected header
	pub fn with_header(mut self, header: impl Into<String>) -> Self {
		self.headers.push(header.into());
		self
	}

	/// Sets all expected headers at once
	pub fn with_headers(mut self, headers: Vec<String>) -> Self {
		self.headers = headers;
		self
	}

	/// Sets the upload endpoint
	pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
		self.api_url = Some(url.into());
		self
	}

	/// Overrides header-row detection instead of relying on inference
	pub fn with_header_row(mut self, first_row_is_header: bool) -> Self {
		self.header_row = Some(first_row_is_header);
		self
	}

	/// Returns the declared headers
	pub fn headers(&self) -> &[String] {
		&self.headers
	}

	/// Returns the upload endpoint, if configured
	pub fn api_url(&self) -> Option<&str> {
		self.api_url.as_deref()
	}

	/// Returns the explicit header-row override, if set
	pub fn header_row_override(&self) -> Option<bool> {
		self.header_row
	}
}

/// Pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStage {
	/// No file selected
	Idle,
	/// A file was supplied and is being read
	FileSelected,
	/// The worksheet was decoded into raw rows
	Parsed,
	/// The preview buffer is populated and awaiting confirm/cancel
	PreviewOpen,
}

/// The spreadsheet import pipeline
///
/// Holds the transient preview buffer between parse and confirmation. The
/// buffer is discarded on cancel and cleared after a successful commit; a
/// failed upload leaves it untouched for retry.
#[derive(Debug)]
pub struct ImportPipeline {
	config: ImportConfig,
	stage: ImportStage,
	headers: Vec<String>,
	buffer: Vec<HashMap<String, String>>,
}

impl ImportPipeline {
	/// Creates an idle pipeline for the given contract
	pub fn new(config: ImportConfig) -> Self {
		Self {
			config,
			stage: ImportStage::Idle,
			headers: Vec::new(),
			buffer: Vec::new(),
		}
	}

	/// Returns the configuration
	pub fn config(&self) -> &ImportConfig {
		&self.config
	}

	/// Returns the current stage
	pub fn stage(&self) -> ImportStage {
		self.stage
	}

	/// Returns the resolved headers of the loaded file
	pub fn headers(&self) -> &[String] {
		&self.headers
	}

	/// Returns the preview buffer
	pub fn buffer(&self) -> &[HashMap<String, String>] {
		&self.buffer
	}

	/// Returns true when the preview is awaiting confirm/cancel
	pub fn is_preview_open(&self) -> bool {
		self.stage == ImportStage::PreviewOpen
	}

	/// Reads a workbook file and fills the preview buffer
	///
	/// Returns the number of preview records. Any failure resets the
	/// pipeline to `Idle` with an empty buffer; there is never a partial
	/// preview.
	pub fn load_file(&mut self, bytes: &[u8]) -> ConsoleResult<usize> {
		self.stage = ImportStage::FileSelected;

		let raw = match workbook::read_rows(bytes) {
			Ok(raw) => raw,
			Err(err) => {
				self.reset();
				return Err(err);
			}
		};
		self.stage = ImportStage::Parsed;
		tracing::debug!(rows = raw.len(), "worksheet decoded");

		match map_rows(&self.config, raw) {
			Ok((headers, records)) => {
				self.headers = headers;
				self.buffer = records;
				self.stage = ImportStage::PreviewOpen;
				tracing::debug!(records = self.buffer.len(), "import preview ready");
				Ok(self.buffer.len())
			}
			Err(err) => {
				self.reset();
				Err(err)
			}
		}
	}

	/// Discards the preview buffer and returns to `Idle`
	pub fn cancel(&mut self) {
		self.reset();
	}

	/// Serializes the preview buffer into the workbook upload payload
	///
	/// Fails before any network interaction when no endpoint is configured
	/// or the buffer is empty. Does not mutate pipeline state; the caller
	/// invokes [`ImportPipeline::complete`] only after a successful upload.
	pub fn confirm_payload(&self) -> ConsoleResult<Vec<u8>> {
		if self.config.api_url().is_none() {
			return Err(ConsoleError::Precondition(
				"import endpoint is not configured".to_string(),
			));
		}
		if self.buffer.is_empty() {
			return Err(ConsoleError::Precondition(
				"nothing to import".to_string(),
			));
		}

		let rows: Vec<Vec<String>> = self
			.buffer
			.iter()
			.map(|record| {
				self.headers
					.iter()
					.map(|h| record.get(h).cloned().unwrap_or_default())
					.collect()
			})
			.collect();

		workbook::write_rows(&self.headers, &rows)
	}

	/// Clears the buffer after a successful commit
	pub fn complete(&mut self) {
		self.reset();
	}

	/// Converts the preview buffer into typed records
	pub fn records<T: DeserializeOwned>(&self) -> ConsoleResult<Vec<T>> {
		self.buffer
			.iter()
			.enumerate()
			.map(|(index, record)| {
				let mut fields = serde_json::Map::new();
				for (key, value) in record {
					fields.insert(key.clone(), serde_json::Value::String(value.clone()));
				}
				serde_json::from_value(serde_json::Value::Object(fields)).map_err(|e| {
					ConsoleError::Validation(format!("row {}: {}", index + 1, e))
				})
			})
			.collect()
	}

	fn reset(&mut self) {
		self.stage = ImportStage::Idle;
		self.headers.clear();
		self.buffer.clear();
	}
}

/// Maps raw worksheet rows to preview records under the resolved headers
///
/// Header resolution, in order of precedence:
/// 1. Declared headers are authoritative and map positionally; the first
///    file row is skipped only when its normalized cells match the declared
///    headers in order (or the explicit override says so).
/// 2. Without declared headers, the first row is treated as a header row
///    when it has at least one non-empty cell and more than one data row
///    follows; otherwise generic column names are synthesized.
///
/// Rows whose cells are all blank never reach the preview buffer.
fn map_rows(
	config: &ImportConfig,
	raw: Vec<Vec<String>>,
) -> ConsoleResult<(Vec<String>, Vec<HashMap<String, String>>)> {
	if raw.is_empty() {
		return Err(ConsoleError::Parse("file is empty".to_string()));
	}

	let (headers, skip_first) = if !config.headers().is_empty() {
		let declared = config.headers().to_vec();
		let skip = config
			.header_row_override()
			.unwrap_or_else(|| first_row_matches(&raw[0], &declared));
		(declared, skip)
	} else {
		let width = raw.iter().map(Vec::len).max().unwrap_or(0);
		let skip = config.header_row_override().unwrap_or_else(|| {
			raw[0].iter().any(|cell| !cell.trim().is_empty()) && raw.len() > 2
		});
		if skip {
			let headers = raw[0]
				.iter()
				.enumerate()
				.map(|(i, cell)| {
					let trimmed = cell.trim();
					if trimmed.is_empty() {
						format!("column_{}", i + 1)
					} else {
						trimmed.to_string()
					}
				})
				.collect();
			(headers, true)
		} else {
			((1..=width).map(|i| format!("column_{}", i)).collect(), false)
		}
	};

	let records: Vec<HashMap<String, String>> = raw
		.into_iter()
		.skip(if skip_first { 1 } else { 0 })
		.filter(|row| row.iter().any(|cell| !cell.trim().is_empty()))
		.map(|row| {
			headers
				.iter()
				.enumerate()
				.map(|(i, header)| (header.clone(), row.get(i).cloned().unwrap_or_default()))
				.collect()
		})
		.collect();

	if records.is_empty() {
		return Err(ConsoleError::Parse("file is empty".to_string()));
	}

	Ok((headers, records))
}

/// Compares the first file row against the declared headers
///
/// Cells are trimmed and case-folded; any cells beyond the declared width
/// must be blank for the row to count as a header row.
fn first_row_matches(row: &[String], declared: &[String]) -> bool {
	if row.len() < declared.len() {
		return false;
	}
	let matches = declared
		.iter()
		.zip(row.iter())
		.all(|(expected, cell)| normalize(cell) == normalize(expected));
	matches && row[declared.len()..].iter().all(|cell| cell.trim().is_empty())
}

fn normalize(cell: &str) -> String {
	cell.trim().to_lowercase()
}
