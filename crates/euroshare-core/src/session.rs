//! Persistent cookie session
//!
//! The jar is shared with the HTTP client as its cookie provider, so every
//! request carries the session cookies without further handling. Cookies are
//! written to disk only after a successful login.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use cookie_store::CookieStore;
use log::debug;
use reqwest_cookie_store::CookieStoreMutex;

use crate::error::{EuroshareError, Result};

/// Name of the session file inside the storage directory
pub const COOKIE_FILE: &str = "cookies.json";

/// Cookie jar bound to its storage location
pub struct Session {
    jar: Arc<CookieStoreMutex>,
    path: PathBuf,
    restored: bool,
}

impl Session {
    /// Opens the session kept in `storage_dir`
    ///
    /// Never fails: a missing or unreadable session file yields an empty jar.
    pub fn open(storage_dir: &Path) -> Self {
        let path = storage_dir.join(COOKIE_FILE);
        let (store, restored) = match load(&path) {
            Some(store) => (store, true),
            None => (CookieStore::default(), false),
        };

        Self {
            jar: Arc::new(CookieStoreMutex::new(store)),
            path,
            restored,
        }
    }

    /// True when cookies were restored from storage at open time
    pub fn restored(&self) -> bool {
        self.restored
    }

    /// Location of the session file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Shared handle to the jar, for use as the HTTP client's cookie provider
    pub fn jar(&self) -> Arc<CookieStoreMutex> {
        Arc::clone(&self.jar)
    }

    /// Writes the current cookies to the session file
    pub fn save(&self) -> Result<()> {
        let store = self
            .jar
            .lock()
            .map_err(|_| EuroshareError::Session("cookie jar lock poisoned".to_string()))?;
        save(&store, &self.path)
    }
}

/// Reads a cookie jar from `path`
///
/// # Returns
/// `None` when the file is missing, unreadable, malformed, or holds no live cookies
pub fn load(path: &Path) -> Option<CookieStore> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            debug!("No session at {}: {}", path.display(), e);
            return None;
        }
    };

    let store = match cookie_store::serde::json::load(BufReader::new(file)) {
        Ok(store) => store,
        Err(e) => {
            debug!("Ignoring unreadable session {}: {}", path.display(), e);
            return None;
        }
    };

    if store.iter_unexpired().next().is_none() {
        debug!("Session {} holds no live cookies", path.display());
        return None;
    }

    debug!("Restored session from {}", path.display());
    Some(store)
}

/// Writes a cookie jar to `path`, creating the parent directory if needed
///
/// Session cookies without an expiry are kept, since they carry the login.
pub fn save(store: &CookieStore, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            EuroshareError::Session(format!("cannot create {}: {}", parent.display(), e))
        })?;
    }

    let file = File::create(path)
        .map_err(|e| EuroshareError::Session(format!("cannot write {}: {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);
    cookie_store::serde::json::save_incl_expired_and_nonpersistent(store, &mut writer)
        .map_err(|e| EuroshareError::Session(e.to_string()))?;
    writer
        .flush()
        .map_err(|e| EuroshareError::Session(e.to_string()))?;

    debug!("Saved session to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Url;

    fn store_with_cookie(set_cookie: &str) -> CookieStore {
        let mut store = CookieStore::default();
        let url = Url::parse("http://euroshare.eu/").unwrap();
        store.parse(set_cookie, &url).unwrap();
        store
    }

    #[test]
    fn test_open_missing_file_is_not_restored() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::open(dir.path());
        assert!(!session.restored());
        assert_eq!(session.path(), dir.path().join(COOKIE_FILE));
    }

    #[test]
    fn test_open_corrupt_file_is_not_restored() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(COOKIE_FILE), "#LWP-Cookies-2.0\nnot json").unwrap();
        assert!(!Session::open(dir.path()).restored());
    }

    #[test]
    fn test_open_empty_file_is_not_restored() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(COOKIE_FILE), "").unwrap();
        assert!(!Session::open(dir.path()).restored());
    }

    #[test]
    fn test_save_then_load_keeps_session_cookie() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(COOKIE_FILE);
        let store = store_with_cookie("PHPSESSID=abc123; Path=/");

        save(&store, &path).unwrap();
        let loaded = load(&path).expect("session should load");

        let names: Vec<&str> = loaded.iter_unexpired().map(|c| c.name()).collect();
        assert_eq!(names, vec!["PHPSESSID"]);
    }

    #[test]
    fn test_session_save_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::open(dir.path());
        {
            let jar = session.jar();
            let mut store = jar.lock().unwrap();
            let url = Url::parse("http://euroshare.eu/").unwrap();
            store
                .parse("remember=1; Path=/; Max-Age=3600", &url)
                .unwrap();
        }
        session.save().unwrap();

        assert!(Session::open(dir.path()).restored());
    }

    #[test]
    fn test_open_with_only_expired_cookies_is_not_restored() {
        let dir = tempfile::tempdir().unwrap();
        let url = Url::parse("http://euroshare.eu/").unwrap();
        let expired = cookie_store::Cookie::parse(
            "PHPSESSID=old; Path=/; Expires=Thu, 01 Jan 2015 00:00:00 GMT",
            &url,
        );
        let store = CookieStore::from_cookies(vec![expired], true).unwrap();

        let path = dir.path().join(COOKIE_FILE);
        save(&store, &path).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("PHPSESSID"));

        assert!(load(&path).is_none());
        assert!(!Session::open(dir.path()).restored());
    }
}
