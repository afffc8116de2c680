//! Authenticated HTTP client for import/export endpoints
//!
//! The console engine never reads an ambient token store: the host builds a
//! [`Credential`] at init time and threads it through an [`ApiClient`],
//! which owns all authenticated traffic to the bulk import and export
//! endpoints. CRUD calls stay with the host's own callbacks; this client
//! only covers the workbook upload/download pair the engine drives itself.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

use scolaris_core::{ConsoleError, ConsoleResult};

/// MIME type of an xlsx workbook payload
const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// A short-lived bearer credential owned by the host application
///
/// The engine treats a missing or empty credential as a hard precondition
/// failure; refresh and expiry are the host's concern.
#[derive(Clone)]
pub struct Credential {
	token: String,
}

impl Credential {
	/// Creates a credential, rejecting empty tokens
	pub fn new(token: impl Into<String>) -> ConsoleResult<Self> {
		let token = token.into();
		if token.trim().is_empty() {
			return Err(ConsoleError::MissingCredential(
				"bearer token".to_string(),
			));
		}
		Ok(Self { token })
	}
}

impl std::fmt::Debug for Credential {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		// Token value stays out of logs
		f.debug_struct("Credential").finish_non_exhaustive()
	}
}

/// HTTP client for the console's bulk endpoints
#[derive(Debug, Clone)]
pub struct ApiClient {
	http: reqwest::Client,
	credential: Credential,
}

impl ApiClient {
	/// Creates a client around the given credential
	pub fn new(credential: Credential) -> Self {
		Self {
			http: reqwest::Client::new(),
			credential,
		}
	}

	/// Uploads a workbook payload to the import endpoint
	///
	/// The payload is sent as a multipart file part named `file`. A non-2xx
	/// response is an API error; the caller's local state is left untouched
	/// either way.
	pub async fn upload_workbook(
		&self,
		api_url: &str,
		filename: &str,
		payload: Vec<u8>,
	) -> ConsoleResult<()> {
		let part = reqwest::multipart::Part::bytes(payload)
			.file_name(filename.to_string())
			.mime_str(XLSX_MIME)
			.map_err(|e| ConsoleError::Validation(format!("invalid upload part: {}", e)))?;
		let form = reqwest::multipart::Form::new().part("file", part);

		let response = self
			.http
			.post(api_url)
			.bearer_auth(&self.credential.token)
			.multipart(form)
			.send()
			.await
			.map_err(|e| ConsoleError::Api(format!("import upload failed: {}", e)))?;

		if !response.status().is_success() {
			tracing::error!(status = %response.status(), api_url, "import endpoint rejected upload");
			return Err(ConsoleError::Api(format!(
				"import endpoint returned {}",
				response.status()
			)));
		}

		Ok(())
	}

	/// Downloads a workbook from the export endpoint
	pub async fn download_workbook(&self, api_url: &str) -> ConsoleResult<Vec<u8>> {
		let response = self
			.http
			.get(api_url)
			.bearer_auth(&self.credential.token)
			.send()
			.await
			.map_err(|e| ConsoleError::Api(format!("export download failed: {}", e)))?;

		if !response.status().is_success() {
			tracing::error!(status = %response.status(), api_url, "export endpoint rejected download");
			return Err(ConsoleError::Api(format!(
				"export endpoint returned {}",
				response.status()
			)));
		}

		let bytes = response
			.bytes()
			.await
			.map_err(|e| ConsoleError::Api(format!("export body unreadable: {}", e)))?;
		Ok(bytes.to_vec())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_token_is_rejected() {
		assert!(matches!(
			Credential::new(""),
			Err(ConsoleError::MissingCredential(_))
		));
		assert!(matches!(
			Credential::new("   "),
			Err(ConsoleError::MissingCredential(_))
		));
		assert!(Credential::new("tok-123").is_ok());
	}

	#[test]
	fn test_credential_debug_redacts_token() {
		let credential = Credential::new("super-secret").unwrap();
		let rendered = format!("{:?}", credential);
		assert!(!rendered.contains("super-secret"));
	}
}
