use serde::Deserialize;

/// One element of a row's embedded JSON log array.
///
/// Only `msg` is required; entries without a `dateTime` are still scanned.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogEntry {
    pub msg: String,
    #[serde(default, rename = "dateTime")]
    pub date_time: Option<String>,
}
