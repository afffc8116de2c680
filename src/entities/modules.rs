//! Teaching module records

use scolaris_core::{
	Column, ColumnSet, ConsoleResult, FilterConfig, RowKey, TextColumn,
};
use scolaris_interchange::{ExportConfig, ImportConfig};
use serde::{Deserialize, Serialize};

/// One teaching module row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
	/// Catalog code, e.g. `INF101`
	pub code: String,
	/// Display title
	pub title: String,
	/// Semester the module runs in, e.g. `S1`
	pub semester: String,
	/// ECTS credit count, kept as text for spreadsheet round-trips
	pub credits: String,
}

/// Columns of the modules table
pub fn columns() -> ConsoleResult<ColumnSet<Module>> {
	let columns: Vec<Box<dyn Column<Row = Module>>> = vec![
		TextColumn::new("code", "Code", |m: &Module| m.code.clone()).boxed(),
		TextColumn::new("title", "Title", |m: &Module| m.title.clone()).boxed(),
		TextColumn::new("semester", "Semester", |m: &Module| m.semester.clone()).boxed(),
		TextColumn::new("credits", "Credits", |m: &Module| m.credits.clone()).boxed(),
	];
	ColumnSet::new(columns)
}

/// Dropdown filters of the modules table
pub fn filters() -> Vec<FilterConfig> {
	vec![FilterConfig::new("semester", "Semester").with_options(
		(1..=6).map(|n| (format!("S{}", n), format!("Semester {}", n))).collect(),
	)]
}

/// Import contract
pub fn import_config() -> ImportConfig {
	ImportConfig::new()
		.with_headers(vec![
			"code".to_string(),
			"title".to_string(),
			"semester".to_string(),
			"credits".to_string(),
		])
		.with_api_url("/api/admin/modules/import")
}

/// Export contract
pub fn export_config() -> ExportConfig {
	ExportConfig::new("modules").with_api_url("/api/admin/modules/export")
}

/// Row identity accessor
pub fn row_key(module: &Module) -> RowKey {
	RowKey::Str(module.code.clone())
}
