//! HTML parsers for euroshare.eu
//!
//! One module per page shape, so markup changes stay inside this layer.

pub mod credit;
pub mod login;
pub mod search;
pub mod size;
pub mod stream;

pub use credit::parse_credit;
pub use login::has_login_form;
pub use search::parse_search_results;
pub use size::parse_size;
pub use stream::parse_stream_url;

use scraper::Selector;

use crate::error::{EuroshareError, Result};

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| EuroshareError::ParseError(format!("Invalid selector {}: {:?}", css, e)))
}
