//! Client error taxonomy.
//!
//! Network failures, non-success statuses, malformed response bodies, and
//! session-storage failures. None of these are fatal to the session: the
//! conversation controller degrades greeting and persistence failures to
//! defaults and surfaces the rest to the caller.

/// Errors produced by backend calls and session storage.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request to the support backend failed outright.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The support backend returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The response body could not be deserialized, or a required field
    /// was missing or null.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The session file could not be read or written.
    #[error("session storage failed: {0}")]
    Storage(#[from] std::io::Error),

    /// The persisted transcript could not be (de)serialized.
    #[error("session transcript parse failed: {0}")]
    StorageParse(#[from] serde_json::Error),
}
