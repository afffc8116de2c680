//! Professor records

use scolaris_core::{
	Column, ColumnSet, ConsoleResult, FilterConfig, RowKey, TextColumn,
};
use scolaris_interchange::{ExportConfig, ImportConfig};
use serde::{Deserialize, Serialize};

/// One professor row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Professor {
	/// Backend identifier; absent on rows arriving through import
	#[serde(default)]
	pub id: i64,
	/// Given name
	pub first_name: String,
	/// Family name
	pub last_name: String,
	/// Contact email
	pub email: String,
	/// Teaching department
	pub department: String,
	/// Employment status, `active` or `inactive`
	pub status: String,
}

/// Columns of the professors table
pub fn columns() -> ConsoleResult<ColumnSet<Professor>> {
	let columns: Vec<Box<dyn Column<Row = Professor>>> = vec![
		TextColumn::new("first_name", "First name", |p: &Professor| {
			p.first_name.clone()
		})
		.boxed(),
		TextColumn::new("last_name", "Last name", |p: &Professor| p.last_name.clone()).boxed(),
		TextColumn::new("email", "Email", |p: &Professor| p.email.clone()).boxed(),
		TextColumn::new("department", "Department", |p: &Professor| {
			p.department.clone()
		})
		.boxed(),
		TextColumn::new("status", "Status", |p: &Professor| p.status.clone()).boxed(),
	];
	ColumnSet::new(columns)
}

/// Dropdown filters of the professors table
pub fn filters() -> Vec<FilterConfig> {
	vec![
		FilterConfig::new("department", "Department"),
		FilterConfig::new("status", "Status")
			.add_option("active", "Active")
			.add_option("inactive", "Inactive"),
	]
}

/// Import contract
pub fn import_config() -> ImportConfig {
	ImportConfig::new()
		.with_headers(vec![
			"first_name".to_string(),
			"last_name".to_string(),
			"email".to_string(),
			"department".to_string(),
			"status".to_string(),
		])
		.with_api_url("/api/admin/professors/import")
}

/// Export contract
pub fn export_config() -> ExportConfig {
	ExportConfig::new("professors").with_api_url("/api/admin/professors/export")
}

/// Row identity accessor
pub fn row_key(professor: &Professor) -> RowKey {
	RowKey::Int(professor.id)
}
