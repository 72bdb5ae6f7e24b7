//! Errors surfaced by the console's service calls.

use thiserror::Error;

/// Result alias for service calls.
pub type Result<T> = std::result::Result<T, ServiceError>;

/// A failed call to the backend. Shown to the user as an inline notice.
#[derive(Debug, Error)]
pub enum ServiceError {
	/// No `window` global, e.g. when not running in a browser.
	#[error("browser window is not available")]
	NoWindow,

	/// The request could not be sent or the body could not be read.
	#[error("network error: {0}")]
	Network(String),

	/// The server answered with a non-success status.
	#[error("{status} {status_text}")]
	Status {
		/// HTTP status code.
		status: u16,
		/// Reason phrase sent with the status.
		status_text: String,
	},

	/// The response body was not the expected JSON.
	#[error("unexpected response: {0}")]
	Decode(#[from] serde_json::Error),
}

impl From<wasm_bindgen::JsValue> for ServiceError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		Self::Network(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}
