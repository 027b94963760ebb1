//! Core data types for the euroshare.eu client
//!
//! Contains the plain data structures returned by the client. None of them
//! carry presentation concerns; adapters map them to menu rows.

use serde::{Deserialize, Serialize};

/// A single video file from a euroshare.eu search results page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoResult {
    /// File title as shown in the result list
    pub label: String,

    /// File size in bytes, 0 when the listed size could not be read
    pub size_bytes: u64,

    /// Absolute URL of the preview image
    pub thumbnail_url: String,

    /// Absolute URL of the file detail page, input for stream resolution
    pub detail_url: String,
}

/// One page of search results
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPage {
    /// Results in site order
    pub videos: Vec<VideoResult>,

    /// Number of the following page, present iff the site shows a "next" control
    pub next_page: Option<u32>,
}

impl SearchPage {
    /// True when the page holds no results
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

/// Authentication state of a client instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoginState {
    /// No session and no successful login (yet)
    Anonymous,
    /// Session loaded from storage or login accepted
    LoggedIn,
    /// The site answered the login POST with the login form again
    Rejected,
}
