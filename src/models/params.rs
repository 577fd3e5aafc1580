/// Query parameters extracted from a transaction listing URL.
///
/// Numeric fields must be present in the URL; string fields fall back to the
/// empty string when their key is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    pub customer_id: i64,
    pub max_result: i64,
    pub first_result: i64,
    pub status: String,
    pub partner_code: String,
    pub date_from: String,
    pub date_to: String,
    pub order_field: String,
    pub order_type: String,
}
