use crate::error::ExtractError;
use crate::models::LogEntry;

/// Path marker opening the request URL inside a log message.
pub const PATH_MARKER: &str = "/transaction/customers/";
/// Marker separating the customer id segment from the query string.
pub const QUERY_MARKER: &str = "/transactions?";

// Both substrings must appear in a message for it to be the target.
const CALL_MARKER: &str = "Call to GET /transaction/customers/";
const RESULTS_MARKER: &str = "/transactions?maxResults";
// The URL ends immediately before the request duration.
const DURATION_MARKER: &str = " took";
// The source logs encode `&` as this literal sequence.
const AMPERSAND_ARTIFACT: &str = "u0026";

/// Find the first log entry describing the transaction listing request.
///
/// `None` means the row has no such request; that is a valid outcome, not an
/// error, and the row is still reported with empty URL and parameter fields.
pub fn find_target_message(entries: &[LogEntry]) -> Option<&LogEntry> {
    entries
        .iter()
        .find(|entry| entry.msg.contains(CALL_MARKER) && entry.msg.contains(RESULTS_MARKER))
}

/// Cut the request URL out of a matched log message.
///
/// Takes the substring from the first path marker up to (not including) the
/// first `" took"`, decodes the `u0026` ampersand artifact, and appends one
/// trailing `&` so every parameter value, including the last, ends at a `&`.
pub fn clean_url(message: &str) -> Result<String, ExtractError> {
    let start = message
        .find(PATH_MARKER)
        .ok_or(ExtractError::UrlExtraction(PATH_MARKER))?;
    let tail = &message[start..];
    let end = tail
        .find(DURATION_MARKER)
        .ok_or(ExtractError::UrlExtraction(DURATION_MARKER))?;

    let mut url = tail[..end].replace(AMPERSAND_ARTIFACT, "&");
    url.push('&');
    Ok(url)
}
