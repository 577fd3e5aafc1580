use crate::error::ExtractError;
use crate::extract::url::{PATH_MARKER, QUERY_MARKER};
use crate::models::RequestParams;

const KEY_MAX_RESULTS: &str = "maxResults=";
const KEY_FIRST_RESULT: &str = "firstResult=";
const KEY_STATUS: &str = "status=";
const KEY_PARTNER_CODE: &str = "partnerCode=";
const KEY_DATE_FROM: &str = "dateFrom=";
const KEY_DATE_TO: &str = "dateTo=";
const KEY_ORDER_FIELD: &str = "orderField=";
const KEY_ORDER_TYPE: &str = "orderType=";

/// Parse the customer id path segment between the two fixed URL markers.
///
/// A missing `/transactions?` delimiter or a non-numeric segment is fatal for
/// the row.
pub fn customer_id(url: &str) -> Result<i64, ExtractError> {
    let end = url.find(QUERY_MARKER).ok_or_else(|| ExtractError::ParamParse {
        name: "customerId",
        value: url.to_string(),
    })?;
    let segment = url[..end].strip_prefix(PATH_MARKER).unwrap_or(&url[..end]);
    segment.parse().map_err(|_| ExtractError::ParamParse {
        name: "customerId",
        value: segment.to_string(),
    })
}

/// Look up a query parameter by key (the key includes its trailing `=`).
///
/// The value runs from the end of the key's first occurrence to the next `&`.
/// URLs produced by [`crate::extract::clean_url`] always carry a trailing
/// `&`, so the last parameter terminates like any other. An absent key yields
/// an empty string, never an error.
pub fn param_value(url: &str, key: &str) -> String {
    let Some(pos) = url.find(key) else {
        return String::new();
    };
    let tail = &url[pos + key.len()..];
    match tail.find('&') {
        Some(end) => tail[..end].to_string(),
        None => tail.to_string(),
    }
}

fn numeric_param(url: &str, key: &'static str) -> Result<i64, ExtractError> {
    let value = param_value(url, key);
    value.parse().map_err(|_| ExtractError::ParamParse { name: key, value })
}

impl RequestParams {
    /// Build the full parameter record from a cleaned URL.
    ///
    /// `maxResults` and `firstResult` must parse as integers; the string
    /// parameters default to empty when absent.
    pub fn from_url(url: &str) -> Result<Self, ExtractError> {
        Ok(Self {
            customer_id: customer_id(url)?,
            max_result: numeric_param(url, KEY_MAX_RESULTS)?,
            first_result: numeric_param(url, KEY_FIRST_RESULT)?,
            status: param_value(url, KEY_STATUS),
            partner_code: param_value(url, KEY_PARTNER_CODE),
            date_from: param_value(url, KEY_DATE_FROM),
            date_to: param_value(url, KEY_DATE_TO),
            order_field: param_value(url, KEY_ORDER_FIELD),
            order_type: param_value(url, KEY_ORDER_TYPE),
        })
    }
}
