//! Column definitions for console tables
//!
//! A column owns the extraction and presentation of one cell per row. When a
//! column carries a custom renderer, that renderer fully owns the cell's
//! presentation; the engine applies no default formatting on top of it.

use crate::error::{ConsoleError, ConsoleResult};
use std::collections::HashSet;
use std::fmt::Debug;

/// Trait for table column definitions
///
/// Each column is responsible for:
/// - Providing a unique key and a header title
/// - Extracting data from a row
/// - Rendering the cell as a string (for display or export)
pub trait Column: Debug + Send + Sync {
	/// The type of rows this column operates on
	type Row;

	/// Returns the key of this column
	///
	/// This is the identifier used for filtering and import/export header
	/// alignment. It must be unique within a column set.
	fn key(&self) -> &str;

	/// Returns the header title for this column
	fn title(&self) -> &str;

	/// Renders the column value for the given row
	fn render(&self, row: &Self::Row) -> String;
}

/// A column implementation using a function to extract values
///
/// # Example
///
/// ```rust
/// use scolaris_core::TextColumn;
///
/// #[derive(Debug)]
/// struct Student {
///     id: i64,
///     last_name: String,
/// }
///
/// let column = TextColumn::new("last_name", "Last Name", |s: &Student| s.last_name.clone());
/// ```
pub struct TextColumn<R, F>
where
	F: Fn(&R) -> String,
{
	key: String,
	title: String,
	extractor: F,
	_phantom: std::marker::PhantomData<R>,
}

impl<R, F> TextColumn<R, F>
where
	R: Send + Sync,
	F: Fn(&R) -> String + Send + Sync + 'static,
{
	/// Creates a new text column
	pub fn new(key: impl Into<String>, title: impl Into<String>, extractor: F) -> Self {
		Self {
			key: key.into(),
			title: title.into(),
			extractor,
			_phantom: std::marker::PhantomData,
		}
	}

	/// Boxes this column for use in a [`ColumnSet`]
	pub fn boxed(self) -> Box<dyn Column<Row = R>>
	where
		R: 'static,
	{
		Box::new(self)
	}
}

impl<R, F> Debug for TextColumn<R, F>
where
	F: Fn(&R) -> String,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TextColumn")
			.field("key", &self.key)
			.field("title", &self.title)
			.finish_non_exhaustive()
	}
}

impl<R, F> Column for TextColumn<R, F>
where
	R: Send + Sync,
	F: Fn(&R) -> String + Send + Sync,
{
	type Row = R;

	fn key(&self) -> &str {
		&self.key
	}

	fn title(&self) -> &str {
		&self.title
	}

	fn render(&self, row: &Self::Row) -> String {
		(self.extractor)(row)
	}
}

/// An ordered set of columns with unique keys
///
/// Construction fails if two columns share a key; the key is the contract
/// used for filtering and for aligning import/export headers, so collisions
/// would make cell targeting ambiguous.
#[derive(Debug)]
pub struct ColumnSet<R> {
	columns: Vec<Box<dyn Column<Row = R>>>,
}

impl<R> ColumnSet<R> {
	/// Creates a column set, validating key uniqueness
	pub fn new(columns: Vec<Box<dyn Column<Row = R>>>) -> ConsoleResult<Self> {
		let mut seen = HashSet::new();
		for column in &columns {
			if !seen.insert(column.key().to_string()) {
				return Err(ConsoleError::DuplicateColumn(column.key().to_string()));
			}
		}
		Ok(Self { columns })
	}

	/// Returns the columns in declaration order
	pub fn columns(&self) -> &[Box<dyn Column<Row = R>>] {
		&self.columns
	}

	/// Returns the number of columns
	pub fn len(&self) -> usize {
		self.columns.len()
	}

	/// Returns true if the set has no columns
	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}

	/// Returns the column keys in declaration order
	pub fn keys(&self) -> Vec<String> {
		self.columns.iter().map(|c| c.key().to_string()).collect()
	}

	/// Returns the header titles in declaration order
	pub fn titles(&self) -> Vec<String> {
		self.columns.iter().map(|c| c.title().to_string()).collect()
	}

	/// Renders one row through every column
	pub fn render_row(&self, row: &R) -> Vec<String> {
		self.columns.iter().map(|c| c.render(row)).collect()
	}
}
