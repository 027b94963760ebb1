//! Search results parser for euroshare.eu
//!
//! Parses HTML from the `/files/search` page and extracts video entries
//! together with the pagination state.

use log::debug;
use scraper::{ElementRef, Html, Selector};

use crate::error::Result;
use crate::parser::selector;
use crate::parser::size::parse_size;
use crate::types::{SearchPage, VideoResult};
use crate::url::{absolutize, extract_page_param};

/// Parses search results HTML into a [`SearchPage`]
///
/// # Arguments
/// * `html` - Raw HTML string from the search results page
/// * `base_url` - Site root used to absolutize thumbnail and detail links
///
/// # Returns
/// The results in page order and the next page number, if any.
/// A page without the results container is an empty page, not an error.
///
/// # Errors
/// Returns `ParseError` if a selector cannot be built
pub fn parse_search_results(html: &str, base_url: &str) -> Result<SearchPage> {
    let document = Html::parse_document(html);

    let container_selector = selector("div#snippet--hledani")?;
    let Some(container) = document.select(&container_selector).next() else {
        debug!("No search results container on page");
        return Ok(SearchPage::default());
    };

    let item_selector = selector("p.image-result")?;
    let selectors = ItemSelectors::new()?;
    let videos = container
        .select(&item_selector)
        .filter_map(|item| parse_result_item(&item, &selectors, base_url))
        .collect();

    Ok(SearchPage {
        videos,
        next_page: parse_next_page(&document)?,
    })
}

/// Selectors applied inside each result item, built once per page
struct ItemSelectors {
    link: Selector,
    image: Selector,
    title: Selector,
    size: Selector,
}

impl ItemSelectors {
    fn new() -> Result<Self> {
        Ok(Self {
            link: selector("a[href]")?,
            image: selector("img[src]")?,
            title: selector("span[title]")?,
            size: selector("strong")?,
        })
    }
}

/// Parses a single `p.image-result` element
///
/// Items without a link or preview image are skipped.
fn parse_result_item(
    item: &ElementRef,
    selectors: &ItemSelectors,
    base_url: &str,
) -> Option<VideoResult> {
    let Some(href) = first_attr(item, &selectors.link, "href") else {
        debug!("Skipping result item without link");
        return None;
    };
    let Some(src) = first_attr(item, &selectors.image, "src") else {
        debug!("Skipping result item without thumbnail: {}", href);
        return None;
    };

    let label = item
        .select(&selectors.title)
        .next()
        .map(|span| {
            let text = collapse_text(&span);
            if text.is_empty() {
                span.value().attr("title").unwrap_or_default().trim().to_string()
            } else {
                text
            }
        })
        .unwrap_or_default();

    let size_bytes = item
        .select(&selectors.size)
        .next()
        .map(|strong| parse_size(&collapse_text(&strong)))
        .unwrap_or(0);

    Some(VideoResult {
        label,
        size_bytes,
        thumbnail_url: absolutize(base_url, src),
        detail_url: absolutize(base_url, href),
    })
}

/// Reads the next page number from the `p.stranky` pagination block
///
/// The next page is the first `a.tlacitko` sibling after the current page
/// marker. Its caption is the page number; when the caption is not numeric
/// the number is taken from the link's page parameter instead.
fn parse_next_page(document: &Html) -> Result<Option<u32>> {
    let pages_selector = selector("p.stranky")?;
    let current_selector = selector("span.aktualni")?;

    let Some(pages) = document.select(&pages_selector).next() else {
        return Ok(None);
    };
    let Some(current) = pages.select(&current_selector).next() else {
        return Ok(None);
    };

    let next = current
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "a" && el.value().classes().any(|c| c == "tlacitko"));

    Ok(next.and_then(|link| {
        collapse_text(&link).parse::<u32>().ok().or_else(|| {
            link.value().attr("href").and_then(extract_page_param)
        })
    }))
}

fn first_attr<'a>(item: &ElementRef<'a>, selector: &Selector, attr: &str) -> Option<&'a str> {
    item.select(selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn collapse_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
