//! Filter and search pipeline
//!
//! Combines a free-text search term with a set of exact-match field filters
//! into a single predicate over the record set. Both halves are pure: the
//! pipeline never re-sorts, so result ordering always equals input ordering.
//!
//! Search matches case-insensitively against every serialized field value of
//! a record, not only the rendered columns. That is intentionally permissive:
//! a match on an irrelevant nested field is acceptable, a miss on a displayed
//! value is not.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// One selectable value of a dropdown filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOption {
	/// Value matched against the record field; empty means "no constraint"
	pub value: String,
	/// Display text for the option
	pub label: String,
}

impl FilterOption {
	/// Creates a new filter option
	pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			label: label.into(),
		}
	}
}

/// Configuration of one exact-match dropdown filter
///
/// # Examples
///
/// ```rust
/// use scolaris_core::FilterConfig;
///
/// let filter = FilterConfig::new("status", "Status")
///     .add_option("active", "Active")
///     .add_option("inactive", "Inactive");
///
/// assert_eq!(filter.key, "status");
/// assert_eq!(filter.options.len(), 3); // leading "All" option included
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
	/// Record field this filter constrains
	pub key: String,
	/// Filter title displayed in the UI
	pub label: String,
	/// Selectable options; the first is always the empty "All" option
	pub options: Vec<FilterOption>,
}

impl FilterConfig {
	/// Creates a new filter configuration with a leading "All" option
	pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			label: label.into(),
			options: vec![FilterOption::new("", "All")],
		}
	}

	/// Adds a selectable option
	pub fn add_option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
		self.options.push(FilterOption::new(value, label));
		self
	}

	/// Sets all non-"All" options at once
	pub fn with_options(mut self, options: Vec<(String, String)>) -> Self {
		self.options.truncate(1);
		for (value, label) in options {
			self.options.push(FilterOption::new(value, label));
		}
		self
	}
}

/// The set of currently active filter selections
///
/// Maps filter key to selected value. Selecting the empty value clears the
/// constraint for that key. The set persists across pagination and search
/// changes within one view lifetime; `clear_all` resets it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
	active: HashMap<String, String>,
}

impl FilterSet {
	/// Creates an empty filter set
	pub fn new() -> Self {
		Self::default()
	}

	/// Selects a value for a filter key; an empty value clears the key
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
		let key = key.into();
		let value = value.into();
		if value.is_empty() {
			self.active.remove(&key);
		} else {
			self.active.insert(key, value);
		}
	}

	/// Clears the constraint for one key
	pub fn clear(&mut self, key: &str) {
		self.active.remove(key);
	}

	/// Clears every constraint
	pub fn clear_all(&mut self) {
		self.active.clear();
	}

	/// Returns the selected value for a key, if any
	pub fn get(&self, key: &str) -> Option<&str> {
		self.active.get(key).map(|s| s.as_str())
	}

	/// Returns true if no constraint is active
	pub fn is_empty(&self) -> bool {
		self.active.is_empty()
	}

	/// Iterates over active (key, value) pairs
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.active.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}
}

/// Applies search and filters to a record set, preserving input order
///
/// Search is a case-insensitive substring match over the concatenation of
/// every serialized field value. Active filters require the record field at
/// the filter key to stringify to an exact match; multiple filters combine
/// with logical AND. The pipeline is idempotent and performs no sorting.
pub fn apply<'a, T: Serialize>(data: &'a [T], search_term: &str, filters: &FilterSet) -> Vec<&'a T> {
	let needle = search_term.trim().to_lowercase();

	data.iter()
		.filter(|item| {
			let value = serde_json::to_value(item).unwrap_or(Value::Null);

			if !needle.is_empty() && !haystack(&value).contains(&needle) {
				return false;
			}

			filters
				.iter()
				.all(|(key, expected)| field_text(&value, key) == expected)
		})
		.collect()
}

/// Concatenates every scalar leaf of a serialized record, lowercased
fn haystack(value: &Value) -> String {
	let mut out = String::new();
	collect_scalars(value, &mut out);
	out.to_lowercase()
}

fn collect_scalars(value: &Value, out: &mut String) {
	match value {
		Value::Null => {}
		Value::Bool(b) => {
			out.push_str(if *b { "true" } else { "false" });
			out.push(' ');
		}
		Value::Number(n) => {
			out.push_str(&n.to_string());
			out.push(' ');
		}
		Value::String(s) => {
			out.push_str(s);
			out.push(' ');
		}
		Value::Array(items) => {
			for item in items {
				collect_scalars(item, out);
			}
		}
		Value::Object(fields) => {
			for field in fields.values() {
				collect_scalars(field, out);
			}
		}
	}
}

/// Stringifies the field at `key` for exact-match comparison
fn field_text(value: &Value, key: &str) -> String {
	match value.get(key) {
		None | Some(Value::Null) => String::new(),
		Some(Value::String(s)) => s.clone(),
		Some(Value::Bool(b)) => b.to_string(),
		Some(Value::Number(n)) => n.to_string(),
		Some(other) => other.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde::Serialize;

	#[derive(Debug, Serialize, PartialEq)]
	struct Record {
		id: i64,
		name: String,
		status: String,
	}

	fn sample() -> Vec<Record> {
		vec![
			Record {
				id: 1,
				name: "Maria Lopez".to_string(),
				status: "active".to_string(),
			},
			Record {
				id: 2,
				name: "Jon Snow".to_string(),
				status: "active".to_string(),
			},
			Record {
				id: 3,
				name: "Maria Duval".to_string(),
				status: "inactive".to_string(),
			},
		]
	}

	#[test]
	fn test_search_is_case_insensitive() {
		let data = sample();
		let result = apply(&data, "MARIA", &FilterSet::new());
		assert_eq!(result.len(), 2);
	}

	#[test]
	fn test_search_matches_any_field() {
		let data = sample();
		// "inactive" only appears in the status field
		let result = apply(&data, "inactive", &FilterSet::new());
		assert_eq!(result.len(), 1);
		assert_eq!(result[0].id, 3);
	}

	#[test]
	fn test_filters_combine_with_and() {
		let data = sample();
		let mut filters = FilterSet::new();
		filters.set("status", "active");
		let result = apply(&data, "maria", &filters);
		assert_eq!(result.len(), 1);
		assert_eq!(result[0].id, 1);
	}

	#[test]
	fn test_empty_value_clears_filter() {
		let mut filters = FilterSet::new();
		filters.set("status", "active");
		assert_eq!(filters.get("status"), Some("active"));
		filters.set("status", "");
		assert!(filters.is_empty());
	}

	#[test]
	fn test_apply_is_idempotent() {
		let data = sample();
		let mut filters = FilterSet::new();
		filters.set("status", "active");

		let once: Vec<i64> = apply(&data, "", &filters).iter().map(|r| r.id).collect();
		let kept: Vec<Record> = sample()
			.into_iter()
			.filter(|r| once.contains(&r.id))
			.collect();
		let twice: Vec<i64> = apply(&kept, "", &filters).iter().map(|r| r.id).collect();
		assert_eq!(once, twice);
	}

	#[test]
	fn test_ordering_is_preserved() {
		let data = sample();
		let result = apply(&data, "", &FilterSet::new());
		let ids: Vec<i64> = result.iter().map(|r| r.id).collect();
		assert_eq!(ids, vec![1, 2, 3]);
	}

	#[test]
	fn test_filter_config_all_option() {
		let config = FilterConfig::new("status", "Status")
			.add_option("active", "Active")
			.add_option("inactive", "Inactive");
		assert_eq!(config.options[0].value, "");
		assert_eq!(config.options[0].label, "All");
		assert_eq!(config.options.len(), 3);
	}
}
