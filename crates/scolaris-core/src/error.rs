//! Error types for the console engine

use thiserror::Error;

/// Console engine error type
#[derive(Debug, Error)]
pub enum ConsoleError {
	/// A precondition was not met; rejected before any I/O
	#[error("Precondition failed: {0}")]
	Precondition(String),

	/// No credential available for an authenticated call
	#[error("Missing credential for {0}")]
	MissingCredential(String),

	/// A spreadsheet file could not be read or decoded
	#[error("Failed to parse spreadsheet: {0}")]
	Parse(String),

	/// Invalid configuration or data
	#[error("Validation error: {0}")]
	Validation(String),

	/// A backend endpoint rejected or failed a request
	#[error("API error: {0}")]
	Api(String),

	/// Two columns in one column set share a key
	#[error("Duplicate column key '{0}'")]
	DuplicateColumn(String),

	/// Wrapped opaque error
	#[error(transparent)]
	Other(#[from] anyhow::Error),
}

/// Result type for console engine operations
pub type ConsoleResult<T> = Result<T, ConsoleError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_error_display() {
		let err = ConsoleError::Precondition("import endpoint is not configured".to_string());
		assert_eq!(
			err.to_string(),
			"Precondition failed: import endpoint is not configured"
		);

		let err = ConsoleError::DuplicateColumn("id".to_string());
		assert_eq!(err.to_string(), "Duplicate column key 'id'");
	}
}
