use thiserror::Error;

/// Failures a single input row can produce on its way through the pipeline.
///
/// A row whose payload simply contains no transaction request message is not
/// represented here; that case is an ordinary (empty) result, not an error.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The input row had fewer than the two required fields.
    #[error("expected at least 2 fields, found {0}")]
    MalformedRow(usize),

    /// The payload was too short to carry wrapping quotes around JSON.
    #[error("log payload too short after normalization")]
    InvalidLogPayload,

    /// The normalized payload was not a valid JSON array of log entries.
    #[error("invalid log JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A fixed marker expected inside the target message was missing.
    #[error("marker {0:?} not found in target message")]
    UrlExtraction(&'static str),

    /// A required numeric field was absent or not numeric.
    #[error("required parameter {name:?} is missing or not numeric (got {value:?})")]
    ParamParse { name: &'static str, value: String },
}
