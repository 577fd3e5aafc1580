use crate::models::RequestParams;

/// Everything one report line is built from.
///
/// `url` and `params` are `None` when the row's log array held no transaction
/// request message; the line is still emitted with empty fields.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRow {
    pub date: String,
    pub url: Option<String>,
    pub params: Option<RequestParams>,
}
