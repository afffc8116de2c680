//! Common test fixtures for scolaris-core tests

use rstest::*;
use scolaris_core::{Column, ColumnSet, TextColumn};
use serde::Serialize;

/// Test student data structure for engine tests
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestStudent {
	pub id: i64,
	pub name: String,
	pub email: String,
	pub status: String,
	pub formation: String,
}

/// Fixture providing sample students for testing
#[fixture]
pub fn sample_students() -> Vec<TestStudent> {
	vec![
		TestStudent {
			id: 1,
			name: "Maria Lopez".to_string(),
			email: "maria.lopez@example.edu".to_string(),
			status: "active".to_string(),
			formation: "Informatique".to_string(),
		},
		TestStudent {
			id: 2,
			name: "Jon Snow".to_string(),
			email: "jon.snow@example.edu".to_string(),
			status: "active".to_string(),
			formation: "Mathematiques".to_string(),
		},
		TestStudent {
			id: 3,
			name: "Maria Duval".to_string(),
			email: "maria.duval@example.edu".to_string(),
			status: "inactive".to_string(),
			formation: "Informatique".to_string(),
		},
		TestStudent {
			id: 4,
			name: "Ada Lovelace".to_string(),
			email: "ada.lovelace@example.edu".to_string(),
			status: "active".to_string(),
			formation: "Informatique".to_string(),
		},
	]
}

/// Fixture providing the student column set
#[fixture]
pub fn student_columns() -> ColumnSet<TestStudent> {
	let columns: Vec<Box<dyn Column<Row = TestStudent>>> = vec![
		TextColumn::new("id", "ID", |s: &TestStudent| s.id.to_string()).boxed(),
		TextColumn::new("name", "Name", |s: &TestStudent| s.name.clone()).boxed(),
		TextColumn::new("email", "Email", |s: &TestStudent| s.email.clone()).boxed(),
		TextColumn::new("status", "Status", |s: &TestStudent| s.status.clone()).boxed(),
		TextColumn::new("formation", "Formation", |s: &TestStudent| {
			s.formation.clone()
		})
		.boxed(),
	];
	ColumnSet::new(columns).expect("unique column keys")
}
