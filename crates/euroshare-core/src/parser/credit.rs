//! Account page parser for euroshare.eu

use scraper::Html;

use crate::error::Result;
use crate::parser::selector;

/// Extracts the remaining credit from the `/user/informacie` page
///
/// The price list entry reads like `Kredit: 12,50 €`; the text after the
/// first colon is returned trimmed. Anonymous pages have no such entry.
///
/// # Returns
/// `Some(credit)` when the entry is present and non-empty, `None` otherwise
///
/// # Errors
/// Returns `ParseError` if the selector cannot be built
pub fn parse_credit(html: &str) -> Result<Option<String>> {
    let document = Html::parse_document(html);
    let entry_selector = selector("li.price-list a")?;

    let Some(entry) = document.select(&entry_selector).next() else {
        return Ok(None);
    };

    let text = entry.text().collect::<String>();
    Ok(text
        .split_once(':')
        .map(|(_, credit)| credit.trim().to_string())
        .filter(|credit| !credit.is_empty()))
}
