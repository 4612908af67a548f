use thiserror::Error;

/// Failure of a single REST call.
///
/// Panels do not branch on the variant: any error becomes the same generic
/// alert. The variants exist so that logs say what actually went wrong.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },

    /// The body was not the JSON shape the caller expected.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}
