use crate::models::OutputRow;

/// Column header for the generated report. The formatter must emit fields in
/// exactly this order.
pub const REPORT_HEADER: &str =
    "Date;Url;CustomerId;MaxResult;FirstResult;Status;PartnerCode;DateFrom;DateTo;OrderField;OrderType";

const OUTPUT_DELIMITER: char = ';';
const PARAM_FIELD_COUNT: usize = 9;

/// Format one report line: date, url, then the nine parameter fields, each
/// followed by the delimiter (trailing separator included).
///
/// A row without a target message keeps its column count; url and parameters
/// are emitted as empty fields.
pub fn format_line(row: &OutputRow) -> String {
    let mut line = String::new();
    let mut push = |field: &str| {
        line.push_str(field);
        line.push(OUTPUT_DELIMITER);
    };

    push(&row.date);
    push(row.url.as_deref().unwrap_or(""));
    match &row.params {
        Some(params) => {
            push(&params.customer_id.to_string());
            push(&params.max_result.to_string());
            push(&params.first_result.to_string());
            push(&params.status);
            push(&params.partner_code);
            push(&params.date_from);
            push(&params.date_to);
            push(&params.order_field);
            push(&params.order_type);
        }
        None => {
            for _ in 0..PARAM_FIELD_COUNT {
                push("");
            }
        }
    }

    line
}
