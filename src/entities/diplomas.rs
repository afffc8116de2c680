//! Diploma records

use scolaris_core::{
	Column, ColumnSet, ConsoleResult, FilterConfig, RowKey, TextColumn,
};
use scolaris_interchange::{ExportConfig, ImportConfig};
use serde::{Deserialize, Serialize};

/// One diploma row
///
/// Diplomas are keyed by their registry code rather than a numeric id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diploma {
	/// Registry code, e.g. `LIC-INF`
	pub code: String,
	/// Display title
	pub title: String,
	/// Level, e.g. `licence` or `master`
	pub level: String,
	/// Awarding year
	pub year: String,
}

/// Columns of the diplomas table
pub fn columns() -> ConsoleResult<ColumnSet<Diploma>> {
	let columns: Vec<Box<dyn Column<Row = Diploma>>> = vec![
		TextColumn::new("code", "Code", |d: &Diploma| d.code.clone()).boxed(),
		TextColumn::new("title", "Title", |d: &Diploma| d.title.clone()).boxed(),
		TextColumn::new("level", "Level", |d: &Diploma| d.level.clone()).boxed(),
		TextColumn::new("year", "Year", |d: &Diploma| d.year.clone()).boxed(),
	];
	ColumnSet::new(columns)
}

/// Dropdown filters of the diplomas table
pub fn filters() -> Vec<FilterConfig> {
	vec![
		FilterConfig::new("level", "Level")
			.add_option("licence", "Licence")
			.add_option("master", "Master")
			.add_option("doctorat", "Doctorat"),
	]
}

/// Import contract
pub fn import_config() -> ImportConfig {
	ImportConfig::new()
		.with_headers(vec![
			"code".to_string(),
			"title".to_string(),
			"level".to_string(),
			"year".to_string(),
		])
		.with_api_url("/api/admin/diplomas/import")
}

/// Export contract
pub fn export_config() -> ExportConfig {
	ExportConfig::new("diplomas").with_api_url("/api/admin/diplomas/export")
}

/// Row identity accessor
pub fn row_key(diploma: &Diploma) -> RowKey {
	RowKey::Str(diploma.code.clone())
}
