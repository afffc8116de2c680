//! In-memory workbook decoding and encoding
//!
//! Decoding takes the first worksheet of an xlsx file and flattens it into
//! rows of strings, with empty cells as empty strings. Encoding writes a
//! header row plus data rows into a single-sheet workbook buffer.

use calamine::{Data, Reader, Xlsx};
use rust_xlsxwriter::Workbook;
use scolaris_core::{ConsoleError, ConsoleResult};
use std::io::Cursor;

/// Decodes the first worksheet of an xlsx file into rows of cell strings
///
/// Empty cells become empty strings; numeric cells are stringified, with
/// integral floats losing their trailing `.0` so that `1.0` round-trips as
/// `"1"`.
pub fn read_rows(bytes: &[u8]) -> ConsoleResult<Vec<Vec<String>>> {
	let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes.to_vec()))
		.map_err(|e| ConsoleError::Parse(format!("unreadable workbook: {}", e)))?;

	let range = workbook
		.worksheet_range_at(0)
		.ok_or_else(|| ConsoleError::Parse("workbook has no worksheets".to_string()))?
		.map_err(|e| ConsoleError::Parse(format!("failed to read worksheet: {}", e)))?;

	Ok(range
		.rows()
		.map(|row| row.iter().map(cell_text).collect())
		.collect())
}

/// Stringifies one cell value
fn cell_text(cell: &Data) -> String {
	match cell {
		Data::Empty => String::new(),
		Data::String(s) => s.clone(),
		Data::Int(i) => i.to_string(),
		Data::Float(f) => {
			if f.fract() == 0.0 && f.is_finite() {
				(*f as i64).to_string()
			} else {
				f.to_string()
			}
		}
		Data::Bool(b) => b.to_string(),
		Data::DateTime(d) => d.as_f64().to_string(),
		Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
		Data::Error(e) => format!("#ERR {:?}", e),
	}
}

/// Encodes a header row plus data rows into a single-sheet xlsx buffer
pub fn write_rows(headers: &[String], rows: &[Vec<String>]) -> ConsoleResult<Vec<u8>> {
	let mut workbook = Workbook::new();
	let worksheet = workbook.add_worksheet();

	for (col, header) in headers.iter().enumerate() {
		worksheet
			.write_string(0, col as u16, header)
			.map_err(|e| ConsoleError::Validation(format!("failed to write header: {}", e)))?;
	}

	for (row_index, row) in rows.iter().enumerate() {
		for (col, cell) in row.iter().enumerate() {
			worksheet
				.write_string((row_index + 1) as u32, col as u16, cell)
				.map_err(|e| ConsoleError::Validation(format!("failed to write cell: {}", e)))?;
		}
	}

	workbook
		.save_to_buffer()
		.map_err(|e| ConsoleError::Validation(format!("failed to build workbook: {}", e)))
}

/// Encodes an empty workbook containing only the declared header row
///
/// Used as the downloadable template a caller fills in offline before
/// importing.
pub fn template(headers: &[String]) -> ConsoleResult<Vec<u8>> {
	write_rows(headers, &[])
}

#[cfg(test)]
mod tests {
	use super::*;

	fn headers() -> Vec<String> {
		vec!["id".to_string(), "name".to_string()]
	}

	#[test]
	fn test_write_then_read_round_trip() {
		let rows = vec![
			vec!["1".to_string(), "Maria".to_string()],
			vec!["2".to_string(), "Jon".to_string()],
		];
		let bytes = write_rows(&headers(), &rows).unwrap();
		let decoded = read_rows(&bytes).unwrap();

		assert_eq!(decoded.len(), 3);
		assert_eq!(decoded[0], vec!["id", "name"]);
		assert_eq!(decoded[1], vec!["1", "Maria"]);
		assert_eq!(decoded[2], vec!["2", "Jon"]);
	}

	#[test]
	fn test_template_has_only_header_row() {
		let bytes = template(&headers()).unwrap();
		let decoded = read_rows(&bytes).unwrap();
		assert_eq!(decoded, vec![vec!["id".to_string(), "name".to_string()]]);
	}

	#[test]
	fn test_unreadable_bytes_are_a_parse_error() {
		let err = read_rows(b"definitely not a workbook").unwrap_err();
		assert!(matches!(err, ConsoleError::Parse(_)));
	}

	#[test]
	fn test_cell_text_trims_integral_floats() {
		assert_eq!(cell_text(&Data::Float(1.0)), "1");
		assert_eq!(cell_text(&Data::Float(1.5)), "1.5");
		assert_eq!(cell_text(&Data::Empty), "");
	}
}
