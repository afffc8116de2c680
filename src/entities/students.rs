//! Student records

use scolaris_core::{
	Column, ColumnSet, ConsoleResult, FilterConfig, RowKey, TextColumn,
};
use scolaris_interchange::{ExportConfig, ImportConfig};
use serde::{Deserialize, Serialize};

/// One student row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
	/// Backend identifier; absent on rows arriving through import
	#[serde(default)]
	pub id: i64,
	/// Given name
	pub first_name: String,
	/// Family name
	pub last_name: String,
	/// Contact email
	pub email: String,
	/// Enrollment status, `active` or `inactive`
	pub status: String,
	/// Name of the enrolled formation
	pub formation: String,
}

/// Columns of the students table
pub fn columns() -> ConsoleResult<ColumnSet<Student>> {
	let columns: Vec<Box<dyn Column<Row = Student>>> = vec![
		TextColumn::new("first_name", "First name", |s: &Student| {
			s.first_name.clone()
		})
		.boxed(),
		TextColumn::new("last_name", "Last name", |s: &Student| s.last_name.clone()).boxed(),
		TextColumn::new("email", "Email", |s: &Student| s.email.clone()).boxed(),
		TextColumn::new("status", "Status", |s: &Student| s.status.clone()).boxed(),
		TextColumn::new("formation", "Formation", |s: &Student| s.formation.clone()).boxed(),
	];
	ColumnSet::new(columns)
}

/// Dropdown filters of the students table
pub fn filters() -> Vec<FilterConfig> {
	vec![
		FilterConfig::new("status", "Status")
			.add_option("active", "Active")
			.add_option("inactive", "Inactive"),
		FilterConfig::new("formation", "Formation"),
	]
}

/// Import contract: column keys only, identifiers are assigned server-side
pub fn import_config() -> ImportConfig {
	ImportConfig::new()
		.with_headers(vec![
			"first_name".to_string(),
			"last_name".to_string(),
			"email".to_string(),
			"status".to_string(),
			"formation".to_string(),
		])
		.with_api_url("/api/admin/students/import")
}

/// Export contract
pub fn export_config() -> ExportConfig {
	ExportConfig::new("students").with_api_url("/api/admin/students/export")
}

/// Row identity accessor
pub fn row_key(student: &Student) -> RowKey {
	RowKey::Int(student.id)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_columns_build_without_duplicates() {
		let columns = columns().unwrap();
		assert_eq!(columns.len(), 5);
	}

	#[test]
	fn test_import_headers_match_column_keys() {
		let keys = columns().unwrap().keys();
		assert_eq!(import_config().headers(), &keys[..]);
	}
}
