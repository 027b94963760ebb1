//! Euroshare.eu Client Core Library
//!
//! Provides async API for browsing videos on euroshare.eu and resolving
//! their stream URLs.
//!
//! # Overview
//!
//! This crate provides a complete client for euroshare.eu with:
//! - Cookie session persisted to disk, with lazy login on first use
//! - HTML parsers for the account, search results and file detail pages
//! - High-level API returning plain data for any front end to present
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use euroshare_core::{Credentials, EuroshareScraper, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let credentials = Credentials::new("user", "secret");
//!     let mut scraper = EuroshareScraper::new(credentials, Path::new("/tmp/euroshare"))?;
//!
//!     if let Some(credit) = scraper.get_credit().await? {
//!         println!("Credit: {}", credit);
//!     }
//!
//!     let page = scraper.get_videos("doctor who", 1).await?;
//!     if let Some(video) = page.videos.first() {
//!         let stream = scraper.get_stream(&video.detail_url).await?;
//!         println!("{}: {}", video.label, stream);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Sessions
//!
//! A session restored from the storage directory is trusted as logged in and
//! never re-validated. When it goes stale on the server, requests quietly
//! return anonymous content until the session file is removed.

mod client;
mod error;
pub mod parser;
mod scraper;
pub mod session;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, EuroshareClient};

// Re-export error types
pub use error::{EuroshareError, Result};

// Re-export parser functions
pub use parser::{parse_credit, parse_search_results, parse_size, parse_stream_url};

// Re-export main scraper API
pub use scraper::{Credentials, EuroshareScraper};

// Re-export session handle
pub use session::Session;

// Re-export data types
pub use types::{LoginState, SearchPage, VideoResult};
