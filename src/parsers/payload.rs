use crate::error::ExtractError;
use crate::models::LogEntry;

/// Turn an escaped, quote-wrapped log payload into parseable JSON text.
///
/// Removes every literal backslash, then strips exactly one leading and one
/// trailing character (the wrapping quotes). The input is assumed to carry
/// that wrapping; a payload shorter than 2 characters after unescaping fails
/// with [`ExtractError::InvalidLogPayload`].
pub fn normalize_payload(raw: &str) -> Result<String, ExtractError> {
    let unescaped: String = raw.chars().filter(|c| *c != '\\').collect();

    let mut inner = unescaped.chars();
    if inner.next().is_none() || inner.next_back().is_none() {
        return Err(ExtractError::InvalidLogPayload);
    }
    Ok(inner.as_str().to_string())
}

/// Parse normalized payload text into its ordered log entries.
///
/// An empty array is a valid result; invalid JSON (or an entry without a
/// `msg` field) fails with [`ExtractError::JsonParse`].
pub fn parse_log_entries(json: &str) -> Result<Vec<LogEntry>, ExtractError> {
    Ok(serde_json::from_str(json)?)
}
