//! URL helper functions for euroshare.eu
//!
//! Provides the site endpoints and functions for building search paths and
//! turning scraped hrefs into absolute URLs.

/// Default site root
pub const BASE_URL: &str = "http://euroshare.eu";

/// Login form submission endpoint
pub const LOGIN_PATH: &str = "/?do=prihlaseni-submit";

/// Account information page holding the credit balance
pub const ACCOUNT_PATH: &str = "/user/informacie";

/// File search endpoint
pub const SEARCH_PATH: &str = "/files/search";

/// Query parameter carrying the page number on pages after the first
pub const PAGE_PARAM: &str = "strankovani-page";

/// Builds the search path for a query and a 1-based page number
///
/// Page 1 (and 0) omit the page parameter entirely.
///
/// # Example
/// ```
/// use euroshare_core::url::build_search_path;
/// let path = build_search_path("doctor who", 2);
/// assert_eq!(
///     path,
///     "/files/search?filter=video&sort=hodnoceni&q=doctor%20who&streamOnly=1&strankovani-page=2"
/// );
/// ```
pub fn build_search_path(query: &str, page: u32) -> String {
    let mut path = format!(
        "{}?filter=video&sort=hodnoceni&q={}&streamOnly=1",
        SEARCH_PATH,
        urlencoding::encode(query)
    );
    if page > 1 {
        path.push_str(&format!("&{}={}", PAGE_PARAM, page));
    }
    path
}

/// Resolves a scraped href or path against the site root
///
/// Absolute `http(s)` URLs are returned unchanged; anything else is joined
/// onto `base` with exactly one slash between them.
///
/// # Example
/// ```
/// use euroshare_core::url::absolutize;
/// assert_eq!(absolutize("http://euroshare.eu", "/file/1/"), "http://euroshare.eu/file/1/");
/// assert_eq!(absolutize("http://euroshare.eu", "https://cdn.example/x.jpg"), "https://cdn.example/x.jpg");
/// ```
pub fn absolutize(base: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    if let Some(rest) = href.strip_prefix("//") {
        let scheme = base.split("://").next().unwrap_or("http");
        return format!("{}://{}", scheme, rest);
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        href.trim_start_matches('/')
    )
}

/// Reads the page number out of a pagination href, if it carries one
pub fn extract_page_param(href: &str) -> Option<u32> {
    let query = href.split_once('?')?.1;
    query
        .split(['&', ';'])
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == PAGE_PARAM)
        .and_then(|(_, value)| value.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_path_first_page_omits_page_param() {
        let path = build_search_path("movie", 1);
        assert_eq!(
            path,
            "/files/search?filter=video&sort=hodnoceni&q=movie&streamOnly=1"
        );
        assert!(!path.contains(PAGE_PARAM));
    }

    #[test]
    fn test_search_path_zero_page_treated_as_first() {
        assert_eq!(build_search_path("movie", 0), build_search_path("movie", 1));
    }

    #[test]
    fn test_search_path_second_page_includes_page_param() {
        let path = build_search_path("movie", 2);
        assert!(path.ends_with("&strankovani-page=2"));
    }

    #[test]
    fn test_search_path_encodes_query() {
        let path = build_search_path("čert & kača", 1);
        assert!(path.contains("q=%C4%8Dert%20%26%20ka%C4%8Da"));
    }

    #[test]
    fn test_absolutize_relative_path() {
        assert_eq!(
            absolutize(BASE_URL, "/thumbs/a.jpg"),
            "http://euroshare.eu/thumbs/a.jpg"
        );
    }

    #[test]
    fn test_absolutize_base_with_trailing_slash() {
        assert_eq!(
            absolutize("http://127.0.0.1:8080/", "file/1/"),
            "http://127.0.0.1:8080/file/1/"
        );
    }

    #[test]
    fn test_absolutize_protocol_relative() {
        assert_eq!(
            absolutize(BASE_URL, "//img.euroshare.eu/a.jpg"),
            "http://img.euroshare.eu/a.jpg"
        );
    }

    #[test]
    fn test_absolutize_keeps_absolute() {
        assert_eq!(
            absolutize(BASE_URL, "https://s1.euroshare.eu/v.mp4"),
            "https://s1.euroshare.eu/v.mp4"
        );
    }

    #[test]
    fn test_extract_page_param() {
        assert_eq!(
            extract_page_param("/files/search?q=x&strankovani-page=3"),
            Some(3)
        );
        assert_eq!(extract_page_param("/files/search?q=x"), None);
        assert_eq!(extract_page_param("/files/search"), None);
    }
}
