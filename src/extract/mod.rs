//! Locating the target log message and pulling the request URL and its query
//! parameters out of it.
//!
//! All matching is fixed-substring scanning against documented marker
//! constants, mirroring the shape of the source logs. The markers are brittle
//! by nature; they live in one place (`url`) so the assumptions stay
//! auditable.

pub mod params;
pub mod url;

pub use params::{customer_id, param_value};
pub use url::{clean_url, find_target_message};
