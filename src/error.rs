//! Error types for bankform library.

use std::io;
use thiserror::Error;

/// Result type alias for bankform operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Document-level failures.
///
/// Field and row anomalies inside a recognized form never surface here; they
/// are recorded as warnings on the [`ParseResult`](crate::ParseResult).
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading token dumps or schema files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The token stream produced no lines (e.g. a scanned image).
    #[error("Document has no extractable text")]
    EmptyDocument,

    /// No registered schema matched the document.
    #[error("Unknown form: {0}")]
    UnknownForm(String),

    /// Schema data failed validation.
    #[error("Invalid form schema: {0}")]
    InvalidSchema(String),

    /// Malformed JSON input (token dump or schema file).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error while rendering a result.
    #[error("Rendering error: {0}")]
    Render(String),
}
