//! Spreadsheet export pipeline
//!
//! Exports always serialize the full loaded record set, never the filtered
//! view: the current search, filters and page are presentation state, not
//! data state. When an endpoint is configured the console layer downloads
//! the server-built workbook instead; this module then only names the file.

use crate::workbook;
use chrono::Utc;
use csv::Writer;
use scolaris_core::{ColumnSet, ConsoleError, ConsoleResult};

/// Export file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
	/// Excel workbook (xlsx)
	#[default]
	Xlsx,
	/// Comma-separated values
	Csv,
}

impl ExportFormat {
	/// Returns the file extension for this format
	pub fn extension(&self) -> &'static str {
		match self {
			ExportFormat::Xlsx => "xlsx",
			ExportFormat::Csv => "csv",
		}
	}

	/// Returns the MIME type for this format
	pub fn mime_type(&self) -> &'static str {
		match self {
			ExportFormat::Xlsx => {
				"application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
			}
			ExportFormat::Csv => "text/csv",
		}
	}
}

/// Export configuration
///
/// # Examples
///
/// ```rust
/// use scolaris_interchange::ExportConfig;
///
/// let config = ExportConfig::new("students")
///     .with_api_url("/api/admin/students/export");
///
/// assert!(config.download_name().starts_with("students_"));
/// assert!(config.download_name().ends_with(".xlsx"));
/// ```
#[derive(Debug, Clone)]
pub struct ExportConfig {
	filename: String,
	api_url: Option<String>,
	format: ExportFormat,
}

impl ExportConfig {
	/// Creates a new export configuration
	pub fn new(filename: impl Into<String>) -> Self {
		Self {
			filename: filename.into(),
			api_url: None,
			format: ExportFormat::default(),
		}
	}

	/// Sets the server export endpoint
	///
	/// Without an endpoint the export runs client-side over the loaded
	/// record set (the legacy variant).
	pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
		self.api_url = Some(url.into());
		self
	}

	/// Sets the export format
	pub fn with_format(mut self, format: ExportFormat) -> Self {
		self.format = format;
		self
	}

	/// Returns the configured base filename
	pub fn filename(&self) -> &str {
		&self.filename
	}

	/// Returns the server endpoint, if configured
	pub fn api_url(&self) -> Option<&str> {
		self.api_url.as_deref()
	}

	/// Returns the export format
	pub fn format(&self) -> ExportFormat {
		self.format
	}

	/// Returns the dated download filename, e.g. `students_2026-08-23.xlsx`
	pub fn download_name(&self) -> String {
		format!(
			"{}_{}.{}",
			self.filename,
			Utc::now().format("%Y-%m-%d"),
			self.format.extension()
		)
	}
}

/// Export result handed back to the host for the actual file save
#[derive(Debug, Clone)]
pub struct ExportResult {
	/// Exported file content
	pub data: Vec<u8>,
	/// MIME type of the content
	pub mime_type: String,
	/// Dated download filename
	pub filename: String,
	/// Number of exported records
	pub row_count: usize,
}

/// Serializes the full record set through the column set
///
/// The header row carries the column keys, not the display titles, so that
/// an exported file can be re-imported under the same declared headers.
pub fn export_records<R>(
	config: &ExportConfig,
	columns: &ColumnSet<R>,
	data: &[R],
) -> ConsoleResult<ExportResult> {
	let headers = columns.keys();
	let rows: Vec<Vec<String>> = data.iter().map(|record| columns.render_row(record)).collect();

	let bytes = match config.format() {
		ExportFormat::Xlsx => workbook::write_rows(&headers, &rows)?,
		ExportFormat::Csv => csv_bytes(&headers, &rows)?,
	};

	Ok(ExportResult {
		data: bytes,
		mime_type: config.format().mime_type().to_string(),
		filename: config.download_name(),
		row_count: data.len(),
	})
}

/// Builds the header-only template workbook for offline fill-in
pub fn export_template(headers: &[String]) -> ConsoleResult<Vec<u8>> {
	workbook::template(headers)
}

/// Counts the data rows of an exported file, excluding the header row
///
/// Used for server-built files, where the record count is only knowable by
/// reading the payload back. Unreadable payloads count as zero rows; the
/// file is still handed to the host as-is.
pub fn exported_row_count(format: ExportFormat, data: &[u8]) -> usize {
	match format {
		ExportFormat::Xlsx => workbook::read_rows(data)
			.map(|rows| rows.len().saturating_sub(1))
			.unwrap_or(0),
		ExportFormat::Csv => csv::Reader::from_reader(data)
			.records()
			.filter(Result::is_ok)
			.count(),
	}
}

fn csv_bytes(headers: &[String], rows: &[Vec<String>]) -> ConsoleResult<Vec<u8>> {
	let mut writer = Writer::from_writer(Vec::new());

	writer
		.write_record(headers)
		.map_err(|e| ConsoleError::Validation(format!("failed to write CSV headers: {}", e)))?;
	for row in rows {
		writer
			.write_record(row)
			.map_err(|e| ConsoleError::Validation(format!("failed to write CSV row: {}", e)))?;
	}

	writer
		.flush()
		.map_err(|e| ConsoleError::Validation(format!("failed to flush CSV writer: {}", e)))?;
	writer
		.into_inner()
		.map_err(|e| ConsoleError::Validation(format!("failed to get CSV output: {}", e)))
}

#[cfg(test)]
mod tests {
	use super::*;
	use scolaris_core::{Column, TextColumn};

	#[derive(Debug)]
	struct Module {
		code: String,
		title: String,
	}

	fn module_columns() -> ColumnSet<Module> {
		let columns: Vec<Box<dyn Column<Row = Module>>> = vec![
			TextColumn::new("code", "Code", |m: &Module| m.code.clone()).boxed(),
			TextColumn::new("title", "Title", |m: &Module| m.title.clone()).boxed(),
		];
		ColumnSet::new(columns).unwrap()
	}

	fn sample() -> Vec<Module> {
		vec![
			Module {
				code: "INF101".to_string(),
				title: "Algorithmique".to_string(),
			},
			Module {
				code: "MAT201".to_string(),
				title: "Analyse, partie 2".to_string(),
			},
		]
	}

	#[test]
	fn test_download_name_is_dated() {
		let config = ExportConfig::new("modules");
		let name = config.download_name();
		assert!(name.starts_with("modules_"));
		assert!(name.ends_with(".xlsx"));

		let csv = ExportConfig::new("modules").with_format(ExportFormat::Csv);
		assert!(csv.download_name().ends_with(".csv"));
	}

	#[test]
	fn test_xlsx_export_writes_keys_and_rows() {
		let config = ExportConfig::new("modules");
		let result = export_records(&config, &module_columns(), &sample()).unwrap();
		assert_eq!(result.row_count, 2);
		assert_eq!(result.mime_type, ExportFormat::Xlsx.mime_type());

		let decoded = crate::workbook::read_rows(&result.data).unwrap();
		assert_eq!(decoded[0], vec!["code", "title"]);
		assert_eq!(decoded[1], vec!["INF101", "Algorithmique"]);
	}

	#[test]
	fn test_csv_export_quotes_embedded_commas() {
		let config = ExportConfig::new("modules").with_format(ExportFormat::Csv);
		let result = export_records(&config, &module_columns(), &sample()).unwrap();
		let text = String::from_utf8(result.data).unwrap();
		assert!(text.contains("code,title"));
		assert!(text.contains("\"Analyse, partie 2\""));
	}

	#[test]
	fn test_row_count_covers_full_data_set() {
		let config = ExportConfig::new("modules");
		let result = export_records(&config, &module_columns(), &sample()).unwrap();
		assert_eq!(result.row_count, sample().len());
	}

	#[test]
	fn test_exported_row_count_reads_the_payload_back() {
		let xlsx = export_records(&ExportConfig::new("modules"), &module_columns(), &sample())
			.unwrap();
		assert_eq!(exported_row_count(ExportFormat::Xlsx, &xlsx.data), 2);

		let csv_config = ExportConfig::new("modules").with_format(ExportFormat::Csv);
		let csv = export_records(&csv_config, &module_columns(), &sample()).unwrap();
		assert_eq!(exported_row_count(ExportFormat::Csv, &csv.data), 2);

		assert_eq!(exported_row_count(ExportFormat::Xlsx, b"garbage"), 0);
	}

	#[test]
	fn test_template_contains_only_headers() {
		let bytes = export_template(&["code".to_string(), "title".to_string()]).unwrap();
		let decoded = crate::workbook::read_rows(&bytes).unwrap();
		assert_eq!(decoded.len(), 1);
	}
}
