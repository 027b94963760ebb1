//! Command-line arguments

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use directories::ProjectDirs;
use euroshare_core::Credentials;

use crate::menu::SortMethod;

#[derive(Parser, Debug)]
#[clap(name = "euroshare", version, about = "Browse and stream videos from euroshare.eu")]
pub struct Cli {
    /// Account username; browsing stays anonymous without it
    #[clap(short, long, env = "EUROSHARE_USERNAME")]
    pub username: Option<String>,

    /// Account password
    #[clap(short, long, env = "EUROSHARE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Directory for the session file
    #[clap(long, env = "EUROSHARE_STORAGE_DIR")]
    pub storage_dir: Option<PathBuf>,

    /// Request timeout in seconds
    #[clap(long, default_value_t = 30)]
    pub timeout: u64,

    /// Print rows as JSON
    #[clap(long)]
    pub json: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show account status and the search entry
    Menu,
    /// Search videos; asks for the query when none is given
    Search {
        query: Option<String>,

        /// Result page, starting at 1
        #[clap(long, default_value_t = 1)]
        page: u32,

        /// Row ordering
        #[clap(long, value_enum, default_value_t = SortMethod::Unsorted)]
        sort: SortMethod,
    },
    /// Resolve the playable URL of a file detail page
    Stream { url: String },
}

impl Cli {
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Credentials::new(username.as_str(), password.as_str()),
            _ => None,
        }
    }

    /// The configured storage directory, or the platform data directory
    pub fn storage_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.storage_dir {
            return Ok(dir.clone());
        }
        ProjectDirs::from("eu", "euroshare", "euroshare")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .context("Could not determine a data directory, pass --storage-dir")
    }
}
