use thiserror::Error;

/// Errors produced while generating a code snippet.
///
/// Generation is one-shot and stateless: any error is fatal for that call
/// and surfaces to the host with no partial output.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The host supplied an empty request list.
    #[error("no request supplied to generator")]
    NoRequest,

    /// The request URL has no `//`-delimited host segment.
    #[error("malformed request URL, cannot extract host: {0}")]
    MalformedUrl(String),

    /// JSON parse or serialization error (malformed embedded `data`).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
