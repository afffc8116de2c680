//! Integration tests for the filter/search/pagination engine

mod fixtures;

use fixtures::{TestStudent, sample_students, student_columns};
use rstest::rstest;
use scolaris_core::identity::{RowKey, assert_unique_keys, resolve_key};
use scolaris_core::{ColumnSet, FilterSet, Paginator, filters};

#[rstest]
fn test_search_and_filter_interaction(sample_students: Vec<TestStudent>) {
	// searchTerm = "maria" AND status = "active" keeps exactly the rows
	// containing "maria" anywhere AND having status == "active"
	let mut active = FilterSet::new();
	active.set("status", "active");

	let visible = filters::apply(&sample_students, "maria", &active);
	assert_eq!(visible.len(), 1);
	assert_eq!(visible[0].name, "Maria Lopez");
}

#[rstest]
fn test_filters_persist_across_pagination(sample_students: Vec<TestStudent>) {
	let mut active = FilterSet::new();
	active.set("formation", "Informatique");

	let mut paginator = Paginator::new(2);
	let filtered = filters::apply(&sample_students, "", &active);
	assert_eq!(filtered.len(), 3);

	paginator.set_page(2, filtered.len());
	let page = paginator.paginate(&filtered);
	assert_eq!(page.items.len(), 1);
	assert_eq!(page.items[0].name, "Ada Lovelace");

	// The filter set is untouched by page navigation
	assert_eq!(active.get("formation"), Some("Informatique"));
}

#[rstest]
#[case(1, 4)]
#[case(2, 2)]
#[case(3, 2)]
#[case(10, 1)]
fn test_total_pages_formula(
	sample_students: Vec<TestStudent>,
	#[case] per_page: usize,
	#[case] expected_pages: usize,
) {
	let paginator = Paginator::new(per_page);
	let page = paginator.paginate(&sample_students);
	assert_eq!(page.total_pages, expected_pages);
	assert!(page.current_page >= 1 && page.current_page <= page.total_pages);
}

#[rstest]
fn test_filtering_is_idempotent(sample_students: Vec<TestStudent>) {
	let mut active = FilterSet::new();
	active.set("status", "active");

	let once: Vec<i64> = filters::apply(&sample_students, "", &active)
		.iter()
		.map(|s| s.id)
		.collect();
	let kept: Vec<TestStudent> = sample_students
		.iter()
		.filter(|s| once.contains(&s.id))
		.cloned()
		.collect();
	let twice: Vec<i64> = filters::apply(&kept, "", &active)
		.iter()
		.map(|s| s.id)
		.collect();

	assert_eq!(once, twice);
}

#[rstest]
fn test_row_keys_unique_with_explicit_accessor(sample_students: Vec<TestStudent>) {
	let accessor = |s: &TestStudent| RowKey::Int(s.id);
	assert!(assert_unique_keys(&sample_students, &accessor).is_ok());

	for (index, student) in sample_students.iter().enumerate() {
		let key = resolve_key(student, index, Some(&accessor));
		assert!(key.is_mutation_target());
	}
}

#[rstest]
fn test_columns_render_in_declaration_order(
	sample_students: Vec<TestStudent>,
	student_columns: ColumnSet<TestStudent>,
) {
	let cells = student_columns.render_row(&sample_students[0]);
	assert_eq!(
		cells,
		vec![
			"1".to_string(),
			"Maria Lopez".to_string(),
			"maria.lopez@example.edu".to_string(),
			"active".to_string(),
			"Informatique".to_string(),
		]
	);
}

#[rstest]
fn test_clear_filters_restores_full_set(sample_students: Vec<TestStudent>) {
	let mut active = FilterSet::new();
	active.set("status", "inactive");
	assert_eq!(filters::apply(&sample_students, "", &active).len(), 1);

	active.clear_all();
	assert_eq!(
		filters::apply(&sample_students, "", &active).len(),
		sample_students.len()
	);
}
