//! Error types for the API client.

/// Errors that can occur when building or making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A caller-supplied value failed a domain rule (season, tournament level, path segment).
    #[error("Invalid value: {0}")]
    Validation(String),
    /// The client was constructed with an unknown environment, partial credentials, or a bad base URL.
    #[error("Invalid client configuration: {0}")]
    Configuration(String),
    /// Supplied optional parameters violate a mutual-exclusion or companion rule.
    #[error("Conflicting parameters: {0}")]
    ParameterConflict(String),
    /// The API returned a non-success status.
    #[error("Request failed with status {status}")]
    Http { status: u16, body: String },
    /// The API returned a success status but the body was not valid JSON.
    #[error("Failed to decode response body")]
    Decode(#[source] serde_json::Error),
    /// The request never produced a response (connect failure, timeout, body read).
    #[error("Request failed")]
    Transport(#[from] reqwest::Error),
}

impl Error {
    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
