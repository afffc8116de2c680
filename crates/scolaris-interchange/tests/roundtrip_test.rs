//! Export-then-import round-trip tests

use scolaris_core::{Column, ColumnSet, TextColumn};
use scolaris_interchange::export::{self, ExportConfig};
use scolaris_interchange::import::{ImportConfig, ImportPipeline};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Diploma {
	code: String,
	title: String,
	year: String,
}

fn diploma_columns() -> ColumnSet<Diploma> {
	let columns: Vec<Box<dyn Column<Row = Diploma>>> = vec![
		TextColumn::new("code", "Code", |d: &Diploma| d.code.clone()).boxed(),
		TextColumn::new("title", "Title", |d: &Diploma| d.title.clone()).boxed(),
		TextColumn::new("year", "Year", |d: &Diploma| d.year.clone()).boxed(),
	];
	ColumnSet::new(columns).unwrap()
}

fn sample() -> Vec<Diploma> {
	vec![
		Diploma {
			code: "LIC-INF".to_string(),
			title: "Licence Informatique".to_string(),
			year: "2026".to_string(),
		},
		Diploma {
			code: "MAS-MAT".to_string(),
			title: "Master Mathematiques".to_string(),
			year: "2027".to_string(),
		},
	]
}

#[test]
fn test_export_then_import_preserves_field_values() {
	let exported = export::export_records(&ExportConfig::new("diplomas"), &diploma_columns(), &sample())
		.unwrap();

	let import_config = ImportConfig::new()
		.with_headers(diploma_columns().keys())
		.with_api_url("/api/admin/diplomas/import");
	let mut pipeline = ImportPipeline::new(import_config);

	let count = pipeline.load_file(&exported.data).unwrap();
	assert_eq!(count, sample().len());

	let reimported: Vec<Diploma> = pipeline.records().unwrap();
	assert_eq!(reimported, sample());
}

#[test]
fn test_confirm_payload_round_trips_through_workbook() {
	let exported = export::export_records(&ExportConfig::new("diplomas"), &diploma_columns(), &sample())
		.unwrap();

	let import_config = ImportConfig::new()
		.with_headers(diploma_columns().keys())
		.with_api_url("/api/admin/diplomas/import");
	let mut pipeline = ImportPipeline::new(import_config);
	pipeline.load_file(&exported.data).unwrap();

	// The upload payload is itself a workbook of the preview buffer
	let payload = pipeline.confirm_payload().unwrap();
	let mut second = ImportPipeline::new(
		ImportConfig::new()
			.with_headers(diploma_columns().keys())
			.with_api_url("/api/admin/diplomas/import"),
	);
	second.load_file(&payload).unwrap();

	let reimported: Vec<Diploma> = second.records().unwrap();
	assert_eq!(reimported, sample());
}

#[test]
fn test_template_round_trips_as_empty_import() {
	let template = export::export_template(&diploma_columns().keys()).unwrap();

	let mut pipeline = ImportPipeline::new(
		ImportConfig::new()
			.with_headers(diploma_columns().keys())
			.with_api_url("/api/admin/diplomas/import"),
	);

	// A header-only template carries no data rows
	let err = pipeline.load_file(&template).unwrap_err();
	assert_eq!(err.to_string(), "Failed to parse spreadsheet: file is empty");
}
