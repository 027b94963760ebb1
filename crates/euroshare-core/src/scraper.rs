//! Main scraper API for euroshare.eu
//!
//! Combines the HTTP client, the cookie session and the page parsers. Login
//! happens lazily, on the first call that needs an account.

use std::path::Path;

use log::{info, warn};

use crate::client::{ClientConfig, EuroshareClient};
use crate::error::Result;
use crate::parser::{has_login_form, parse_credit, parse_search_results, parse_stream_url};
use crate::session::Session;
use crate::types::{LoginState, SearchPage};
use crate::url::{ACCOUNT_PATH, LOGIN_PATH, build_search_path};

/// Caption of the login form's submit button, posted along with the credentials
const LOGIN_SUBMIT: &str = "PRIHLÁSENIE";

/// Account credentials
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Returns `None` unless both values are non-empty
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Option<Self> {
        let username = username.into();
        let password = password.into();
        if username.is_empty() || password.is_empty() {
            return None;
        }
        Some(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Main scraper API for euroshare.eu
///
/// One instance owns one cookie session. Operations that may log in take
/// `&mut self`, so calls on an instance never overlap.
pub struct EuroshareScraper {
    client: EuroshareClient,
    session: Session,
    credentials: Option<Credentials>,
    state: LoginState,
}

impl EuroshareScraper {
    /// Create a scraper with default configuration
    ///
    /// # Arguments
    /// * `credentials` - Account to log in with; `None` browses anonymously
    /// * `storage_dir` - Directory holding the session file
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new(credentials: Option<Credentials>, storage_dir: &Path) -> Result<Self> {
        Self::with_config(ClientConfig::default(), credentials, storage_dir)
    }

    /// Create a scraper with custom client configuration
    ///
    /// A session restored from `storage_dir` counts as logged in for the
    /// lifetime of the instance; it is never re-validated.
    pub fn with_config(
        config: ClientConfig,
        credentials: Option<Credentials>,
        storage_dir: &Path,
    ) -> Result<Self> {
        let session = Session::open(storage_dir);
        let client = EuroshareClient::new(&config, &session)?;
        let state = if session.restored() {
            LoginState::LoggedIn
        } else {
            LoginState::Anonymous
        };

        Ok(Self {
            client,
            session,
            credentials,
            state,
        })
    }

    /// Current authentication state
    pub fn login_state(&self) -> LoginState {
        self.state
    }

    pub fn is_logged_in(&self) -> bool {
        self.state == LoginState::LoggedIn
    }

    /// Log in unless already logged in
    ///
    /// Without credentials, or after the site rejected them once, this does
    /// nothing and later calls proceed anonymously. An accepted login is
    /// persisted to the session file right away.
    ///
    /// # Errors
    /// - `Network` if the login request fails
    /// - `Session` if the accepted session cannot be written
    pub async fn ensure_logged_in(&mut self) -> Result<()> {
        if self.state != LoginState::Anonymous {
            return Ok(());
        }
        let Some(credentials) = &self.credentials else {
            return Ok(());
        };

        let form = [
            ("username", credentials.username.as_str()),
            ("password", credentials.password.as_str()),
            ("remember", "on"),
            ("send", LOGIN_SUBMIT),
        ];
        let body = self.client.fetch(LOGIN_PATH, Some(&form)).await?;

        if has_login_form(&body)? {
            warn!(
                "Login rejected for {}, continuing anonymously",
                credentials.username
            );
            self.state = LoginState::Rejected;
            return Ok(());
        }

        info!("Logged in as {}", credentials.username);
        self.state = LoginState::LoggedIn;
        self.session.save()
    }

    /// Get the remaining account credit
    ///
    /// # Returns
    /// The credit text (e.g. "12,50 €"), or `None` when the account page shows
    /// none, which is the case for anonymous visitors
    ///
    /// # Errors
    /// - `Network` if a request fails
    /// - `Session` if a fresh login cannot be persisted
    pub async fn get_credit(&mut self) -> Result<Option<String>> {
        let html = self.api_call(ACCOUNT_PATH).await?;
        parse_credit(&html)
    }

    /// Search for videos
    ///
    /// # Arguments
    /// * `query` - Search query string
    /// * `page` - 1-based page number; 0 is treated as 1
    ///
    /// # Returns
    /// The page of results with the next page number, if the site has one.
    /// No matches is an empty page.
    ///
    /// # Errors
    /// - `Network` if a request fails
    /// - `Session` if a fresh login cannot be persisted
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> euroshare_core::Result<()> {
    /// use euroshare_core::EuroshareScraper;
    /// let mut scraper = EuroshareScraper::new(None, std::path::Path::new("/tmp/euroshare"))?;
    /// let page = scraper.get_videos("doctor who", 1).await?;
    /// for video in &page.videos {
    ///     println!("{} ({} bytes): {}", video.label, video.size_bytes, video.detail_url);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_videos(&mut self, query: &str, page: u32) -> Result<SearchPage> {
        let path = build_search_path(query, page.max(1));
        let html = self.api_call(&path).await?;
        parse_search_results(&html, self.client.base_url())
    }

    /// Resolve the playable URL of a file
    ///
    /// # Arguments
    /// * `detail_url` - Detail page URL as returned in [`crate::VideoResult::detail_url`]
    ///
    /// # Errors
    /// - `Network` if the request fails
    /// - `ElementNotFound` if the page has neither a video source nor a play link
    pub async fn get_stream(&self, detail_url: &str) -> Result<String> {
        let html = self.client.fetch(detail_url, None).await?;
        parse_stream_url(&html, self.client.base_url())
    }

    /// GET a site path after making sure a login was attempted
    async fn api_call(&mut self, path: &str) -> Result<String> {
        if !self.is_logged_in() {
            self.ensure_logged_in().await?;
        }
        self.client.fetch(path, None).await
    }
}
