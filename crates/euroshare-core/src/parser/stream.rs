//! Detail page parser for euroshare.eu
//!
//! Resolves the directly playable URL from a file detail page. Files with an
//! inline player carry a `<video><source>`; the rest only offer a play link.

use scraper::Html;

use crate::error::{EuroshareError, Result};
use crate::parser::selector;
use crate::url::absolutize;

/// Extracts the playable URL from a detail page
///
/// The content block is the first `div` inside `div#obsah`. Its video
/// `source` wins; otherwise the link in `p.text-vpravo` is used.
///
/// # Arguments
/// * `html` - Raw HTML string from the detail page
/// * `base_url` - Site root used when the page links relatively
///
/// # Errors
/// - `ElementNotFound` if the content block, video source and play link are all missing
/// - `ParseError` if a selector cannot be built
pub fn parse_stream_url(html: &str, base_url: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let content_selector = selector("div#obsah div")?;
    let source_selector = selector("video source[src]")?;
    let link_selector = selector("p.text-vpravo a[href]")?;

    let content = document.select(&content_selector).next().ok_or_else(|| {
        EuroshareError::ElementNotFound("content block div#obsah".to_string())
    })?;

    let url = content
        .select(&source_selector)
        .find_map(|source| source.value().attr("src"))
        .or_else(|| {
            content
                .select(&link_selector)
                .find_map(|link| link.value().attr("href"))
        })
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| {
            EuroshareError::ElementNotFound("video source or play link".to_string())
        })?;

    Ok(absolutize(base_url, url))
}
