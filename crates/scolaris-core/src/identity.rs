//! Row identity resolution
//!
//! Every record needs a key distinguishing it from its siblings so that edit
//! and delete actions can target the right backend row. Callers should supply
//! an explicit accessor; without one, the resolver probes a fixed list of
//! conventional identifier field names on the serialized record and, as a
//! last resort, falls back to the positional index. Positional keys are not
//! stable across filtering or re-sorting and are rejected as mutation
//! targets by the console layer.

use serde::Serialize;
use std::fmt;

/// Identifier field names probed in priority order
const ID_FIELD_CANDIDATES: [&str; 5] = ["id", "_id", "uuid", "pk", "code"];

/// A key identifying one record among its siblings
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
	/// Integer identifier
	Int(i64),
	/// String identifier
	Str(String),
	/// Positional fallback; not stable across filtering or sorting
	Synthetic(usize),
}

impl RowKey {
	/// Returns true if this key is safe to use as a backend mutation target
	///
	/// Synthetic keys identify a render position, not a logical entity.
	pub fn is_mutation_target(&self) -> bool {
		!matches!(self, RowKey::Synthetic(_))
	}
}

impl fmt::Display for RowKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			RowKey::Int(n) => write!(f, "{}", n),
			RowKey::Str(s) => write!(f, "{}", s),
			RowKey::Synthetic(index) => write!(f, "row-{}", index),
		}
	}
}

/// Resolves the key for one record
///
/// An explicit accessor is authoritative and its result is used as-is.
/// Otherwise the serialized record is probed for conventional identifier
/// fields; if none is present the positional index is used and a warning is
/// logged, since synthetic keys must never reach the backend.
///
/// # Example
///
/// ```rust
/// use scolaris_core::identity::{RowKey, resolve_key};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Diploma {
///     id: i64,
///     title: String,
/// }
///
/// let diploma = Diploma { id: 42, title: "Licence Informatique".into() };
/// assert_eq!(resolve_key(&diploma, 0, None), RowKey::Int(42));
/// ```
pub fn resolve_key<T: Serialize>(
	item: &T,
	index: usize,
	explicit: Option<&(dyn Fn(&T) -> RowKey + Send + Sync)>,
) -> RowKey {
	if let Some(accessor) = explicit {
		return accessor(item);
	}

	if let Ok(serde_json::Value::Object(fields)) = serde_json::to_value(item) {
		for candidate in ID_FIELD_CANDIDATES {
			match fields.get(candidate) {
				None | Some(serde_json::Value::Null) => {}
				Some(serde_json::Value::String(s)) => return RowKey::Str(s.clone()),
				Some(serde_json::Value::Number(n)) => {
					if let Some(i) = n.as_i64() {
						return RowKey::Int(i);
					}
					return RowKey::Str(n.to_string());
				}
				Some(other) => return RowKey::Str(other.to_string()),
			}
		}
	}

	tracing::warn!(
		index,
		"no identifier field found; falling back to positional row key"
	);
	RowKey::Synthetic(index)
}

/// Checks that an explicit accessor yields unique keys over a data set
///
/// Two distinct records resolving to the same key would make edit and delete
/// targeting ambiguous.
pub fn assert_unique_keys<T>(
	data: &[T],
	accessor: &(dyn Fn(&T) -> RowKey + Send + Sync),
) -> crate::ConsoleResult<()> {
	let mut seen = std::collections::HashSet::new();
	for item in data {
		let key = accessor(item);
		if !seen.insert(key.clone()) {
			return Err(crate::ConsoleError::Validation(format!(
				"duplicate row key '{}' in data set",
				key
			)));
		}
	}
	Ok(())
}
