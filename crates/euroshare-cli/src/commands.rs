//! Command implementations
//!
//! Each command drives the scraper and returns what the front end prints.

use std::io::{self, BufRead, Write};

use euroshare_core::{EuroshareError, EuroshareScraper, Result};
use log::debug;

use crate::menu::{MenuItem, SEARCH_VIDEOS, SortMethod, root_menu, search_menu};

/// Root listing with the account credit
pub async fn show_root_menu(scraper: &mut EuroshareScraper) -> Result<Vec<MenuItem>> {
    let credit = scraper.get_credit().await?;
    Ok(root_menu(credit.as_deref()))
}

/// One page of search results as rows
pub async fn search_results(
    scraper: &mut EuroshareScraper,
    query: &str,
    page: u32,
    sort: SortMethod,
) -> Result<Vec<MenuItem>> {
    let page = page.max(1);
    let results = scraper.get_videos(query, page).await?;
    debug!(
        "{} results for {:?} on page {}, next: {:?}",
        results.videos.len(),
        query,
        page,
        results.next_page
    );
    Ok(search_menu(query, page, &results, sort))
}

/// Playable URL for a detail page
pub async fn stream_url(scraper: &EuroshareScraper, detail_url: &str) -> Result<String> {
    scraper.get_stream(detail_url).await
}

/// True when a command failed because the site could not be reached
pub fn is_network_failure(err: &anyhow::Error) -> bool {
    err.downcast_ref::<EuroshareError>()
        .is_some_and(EuroshareError::is_network)
}

/// Reads a search query from stdin, `None` when the user enters nothing
pub fn prompt_query() -> io::Result<Option<String>> {
    print!("{}: ", SEARCH_VIDEOS);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let query = line.trim();
    Ok((!query.is_empty()).then(|| query.to_string()))
}
