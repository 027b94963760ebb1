//! Menu rows for the euroshare front end
//!
//! Maps the plain data returned by the client to listing rows, adding the
//! navigation and status captions the client itself knows nothing about.

use clap::ValueEnum;
use euroshare_core::{SearchPage, VideoResult};
use serde::Serialize;

pub const NOT_LOGGED_IN: &str = "Not logged in";
pub const CREDIT: &str = "Credit";
pub const SEARCH_VIDEOS: &str = "Search videos";
pub const NEXT_PAGE: &str = "Next >>";
pub const PREVIOUS_PAGE: &str = "<< Previous";
pub const NETWORK_ERROR: &str = "Network error, see log for details";

/// One row of a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub label: String,
    /// Command line that opens this row
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    pub is_playable: bool,
}

impl MenuItem {
    fn folder(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            thumbnail: None,
            size: None,
            is_playable: false,
        }
    }

    fn playable(video: &VideoResult) -> Self {
        Self {
            label: video.label.clone(),
            path: stream_path(&video.detail_url),
            thumbnail: Some(video.thumbnail_url.clone()),
            size: Some(video.size_bytes),
            is_playable: true,
        }
    }
}

/// Ordering of playable rows in a search listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortMethod {
    /// Site order (best rated first)
    #[default]
    Unsorted,
    /// Alphabetical, ignoring case
    Label,
    /// Smallest file first
    Size,
}

/// Root listing: account status row and the search entry
pub fn root_menu(credit: Option<&str>) -> Vec<MenuItem> {
    let status = match credit {
        Some(credit) => format!("{}: {}", CREDIT, credit),
        None => NOT_LOGGED_IN.to_string(),
    };

    vec![
        MenuItem::folder(status, "menu"),
        MenuItem::folder(SEARCH_VIDEOS, "search"),
    ]
}

/// Search listing for `page`: navigation rows first, then the videos
///
/// "Previous" is offered on every page after the first, "Next" only when
/// the site reported a following page.
pub fn search_menu(query: &str, page: u32, results: &SearchPage, sort: SortMethod) -> Vec<MenuItem> {
    let mut videos: Vec<&VideoResult> = results.videos.iter().collect();
    match sort {
        SortMethod::Unsorted => {}
        SortMethod::Label => videos.sort_by_key(|v| v.label.to_lowercase()),
        SortMethod::Size => videos.sort_by_key(|v| v.size_bytes),
    }

    let mut items = Vec::with_capacity(videos.len() + 2);
    if page > 1 {
        items.push(MenuItem::folder(PREVIOUS_PAGE, search_path(query, page - 1)));
    }
    if let Some(next) = results.next_page {
        items.push(MenuItem::folder(NEXT_PAGE, search_path(query, next)));
    }
    items.extend(videos.into_iter().map(MenuItem::playable));
    items
}

fn search_path(query: &str, page: u32) -> String {
    format!("search {:?} --page {}", query, page)
}

fn stream_path(detail_url: &str) -> String {
    format!("stream {:?}", detail_url)
}
