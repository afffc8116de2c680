//! Formation (degree program) records

use scolaris_core::{
	Column, ColumnSet, ConsoleResult, FilterConfig, RowKey, TextColumn,
};
use scolaris_interchange::{ExportConfig, ImportConfig};
use serde::{Deserialize, Serialize};

/// One formation row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formation {
	/// Backend identifier; absent on rows arriving through import
	#[serde(default)]
	pub id: i64,
	/// Program name
	pub name: String,
	/// Diploma the program leads to, by registry code
	pub diploma_code: String,
	/// Number of study years, kept as text for spreadsheet round-trips
	pub duration_years: String,
	/// Whether the program currently accepts enrollments
	pub status: String,
}

/// Columns of the formations table
pub fn columns() -> ConsoleResult<ColumnSet<Formation>> {
	let columns: Vec<Box<dyn Column<Row = Formation>>> = vec![
		TextColumn::new("name", "Name", |f: &Formation| f.name.clone()).boxed(),
		TextColumn::new("diploma_code", "Diploma", |f: &Formation| {
			f.diploma_code.clone()
		})
		.boxed(),
		TextColumn::new("duration_years", "Duration (years)", |f: &Formation| {
			f.duration_years.clone()
		})
		.boxed(),
		TextColumn::new("status", "Status", |f: &Formation| f.status.clone()).boxed(),
	];
	ColumnSet::new(columns)
}

/// Dropdown filters of the formations table
pub fn filters() -> Vec<FilterConfig> {
	vec![
		FilterConfig::new("status", "Status")
			.add_option("open", "Open")
			.add_option("closed", "Closed"),
	]
}

/// Import contract
pub fn import_config() -> ImportConfig {
	ImportConfig::new()
		.with_headers(vec![
			"name".to_string(),
			"diploma_code".to_string(),
			"duration_years".to_string(),
			"status".to_string(),
		])
		.with_api_url("/api/admin/formations/import")
}

/// Export contract
pub fn export_config() -> ExportConfig {
	ExportConfig::new("formations").with_api_url("/api/admin/formations/export")
}

/// Row identity accessor
pub fn row_key(formation: &Formation) -> RowKey {
	RowKey::Int(formation.id)
}
