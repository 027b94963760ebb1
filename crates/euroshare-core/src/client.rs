//! HTTP client for euroshare.eu
//!
//! Single shared HTTP context: fixed User-Agent, request timeout and the
//! session cookie jar. All transport failures surface as
//! [`EuroshareError::Network`].

use std::time::Duration;

use log::debug;

use crate::error::{EuroshareError, Result};
use crate::session::Session;
use crate::url::{BASE_URL, absolutize};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 6.1; WOW64; rv:37.0) Gecko/20100101 Firefox/37.0";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Site root every relative path is resolved against (default: http://euroshare.eu)
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// HTTP client wrapper bound to one cookie session
pub struct EuroshareClient {
    client: reqwest::Client,
    base_url: String,
}

impl EuroshareClient {
    /// Create a client that reads and writes cookies through `session`
    pub fn new(config: &ClientConfig, session: &Session) -> Result<Self> {
        if !(config.base_url.starts_with("http://") || config.base_url.starts_with("https://")) {
            return Err(EuroshareError::InvalidConfig(format!(
                "base URL must be http(s): {}",
                config.base_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .cookie_provider(session.jar())
            .build()
            .map_err(|e| EuroshareError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Site root without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a page and return its body
    ///
    /// Issues a GET when `form` is `None`, otherwise POSTs the fields
    /// url-encoded. `target` is either a site path or an absolute URL.
    ///
    /// # Errors
    /// - `Network` - connection, DNS, timeout, non-2xx status or body read failure
    pub async fn fetch(&self, target: &str, form: Option<&[(&str, &str)]>) -> Result<String> {
        let url = absolutize(&self.base_url, target);

        let request = match form {
            Some(fields) => {
                debug!("POST {}", url);
                self.client.post(&url).form(fields)
            }
            None => {
                debug!("GET {}", url);
                self.client.get(&url)
            }
        };

        let response = request.send().await?.error_for_status()?;
        let body = response.text().await?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://euroshare.eu");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_client_creation_trims_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::open(dir.path());
        let config = ClientConfig {
            base_url: "http://127.0.0.1:8080/".to_string(),
            ..ClientConfig::default()
        };
        let client = EuroshareClient::new(&config, &session).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_client_rejects_non_http_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::open(dir.path());
        let config = ClientConfig {
            base_url: "ftp://euroshare.eu".to_string(),
            ..ClientConfig::default()
        };
        assert!(matches!(
            EuroshareClient::new(&config, &session),
            Err(EuroshareError::InvalidConfig(_))
        ));
    }
}
