//! Address and search disambiguation
//!
//! Decision order for console input:
//! 1. Empty input → default engine with an empty query
//! 2. First token names an engine → that engine with the remaining text
//! 3. Single absolute URL with a supported scheme → its serialized form, so a
//!    bare authority gains a root path (`http://localhost` → `http://localhost/`)
//! 4. Single token shaped like an address → navigate to it
//! 5. Anything else → default engine with the whole input

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::search::SearchEngines;

/// Schemes accepted as already-absolute navigation targets
pub const SUPPORTED_SCHEMES: &[&str] = &["http", "https", "ftp", "mailto", "about"];

static SCHEME_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z][A-Za-z0-9+.\-]*):").expect("valid scheme pattern"));

// Optional scheme, `localhost` or at least two dot-separated labels, optional
// numeric port, optional path/query/fragment.
static ADDRESS_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:(?:https?|ftp)://)?(?:localhost|[^\s./:?#]+(?:\.[^\s./:?#]+)+)(?::[0-9]+)?(?:[/?#]\S*)?$",
    )
    .expect("valid address pattern")
});

fn has_supported_scheme(input: &str) -> bool {
    SCHEME_PREFIX
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|scheme| {
            SUPPORTED_SCHEMES
                .iter()
                .any(|s| s.eq_ignore_ascii_case(scheme.as_str()))
        })
        .unwrap_or(false)
}

fn parse_absolute(input: &str) -> Option<Url> {
    Url::parse(input)
        .ok()
        .filter(|url| SUPPORTED_SCHEMES.contains(&url.scheme()))
}

/// Whether `input` should be navigated to directly rather than searched.
///
/// Whitespace anywhere disqualifies the input, so `localhost 8080` is never
/// an address. A `:` must be followed by digits only, so `localhost:80nan`
/// is not one either.
pub fn is_address(input: &str) -> bool {
    if input.is_empty() || input.chars().any(char::is_whitespace) {
        return false;
    }
    parse_absolute(input).is_some() || ADDRESS_SHAPE.is_match(input)
}

/// Prefix `http://` unless the input already carries a supported scheme.
///
/// Inputs with a supported scheme are returned as given (trimmed), which
/// makes the function idempotent.
pub fn normalize_url(raw: &str) -> String {
    let raw = raw.trim();
    if has_supported_scheme(raw) {
        return raw.to_string();
    }
    format!("http://{}", raw)
}

/// Resolve console input into a destination URL.
pub fn search_url(input: &str, engines: &SearchEngines) -> String {
    let input = input.trim();
    if input.is_empty() {
        return engines.resolve("");
    }

    let (first, rest) = match input.split_once(char::is_whitespace) {
        Some((first, rest)) => (first, rest.trim_start()),
        None => (input, ""),
    };

    if engines.contains(first) {
        match engines.resolve_named(first, rest) {
            Ok(url) => return url,
            Err(e) => tracing::warn!(engine = %first, error = %e, "Named engine lookup failed"),
        }
    }

    if !input.contains(char::is_whitespace) {
        if let Some(url) = parse_absolute(input) {
            tracing::debug!(input = %input, "Treating input as absolute URL");
            return url.to_string();
        }
    }

    if is_address(input) {
        tracing::debug!(input = %input, "Treating input as address");
        return normalize_url(input);
    }

    engines.resolve(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SearchEngines {
        SearchEngines::new(
            "google",
            [
                ("google", "https://google.com/search?q={}"),
                ("yahoo", "https://yahoo.com/search?q={}"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_search_url_engines() {
        let config = config();
        assert_eq!(search_url("google.com", &config), "http://google.com");
        assert_eq!(
            search_url("google apple", &config),
            "https://google.com/search?q=apple"
        );
        assert_eq!(
            search_url("yahoo apple", &config),
            "https://yahoo.com/search?q=apple"
        );
        assert_eq!(
            search_url("google apple banana", &config),
            "https://google.com/search?q=apple%20banana"
        );
        assert_eq!(
            search_url("yahoo C++CLI", &config),
            "https://yahoo.com/search?q=C%2B%2BCLI"
        );
    }

    #[test]
    fn test_search_url_default_engine() {
        let config = config();
        assert_eq!(
            search_url("apple banana", &config),
            "https://google.com/search?q=apple%20banana"
        );
        assert_eq!(search_url("", &config), "https://google.com/search?q=");
        assert_eq!(search_url("   ", &config), "https://google.com/search?q=");
    }

    #[test]
    fn test_search_url_engine_without_query() {
        let config = config();
        assert_eq!(search_url("yahoo", &config), "https://yahoo.com/search?q=");
        assert_eq!(
            search_url("  yahoo   an apple ", &config),
            "https://yahoo.com/search?q=an%20apple"
        );
    }

    #[test]
    fn test_search_url_engine_names_are_case_sensitive() {
        let config = config();
        assert_eq!(
            search_url("Yahoo apple", &config),
            "https://google.com/search?q=Yahoo%20apple"
        );
    }

    #[test]
    fn test_search_url_colons() {
        let config = config();
        assert_eq!(search_url("foo:", &config), "https://google.com/search?q=foo%3A");
        assert_eq!(
            search_url("std::vector", &config),
            "https://google.com/search?q=std%3A%3Avector"
        );
    }

    #[test]
    fn test_search_url_localhost() {
        let config = config();
        assert_eq!(search_url("localhost", &config), "http://localhost");
        assert_eq!(search_url("localhost:8080", &config), "http://localhost:8080");
        assert_eq!(
            search_url("localhost:80nan", &config),
            "https://google.com/search?q=localhost%3A80nan"
        );
        assert_eq!(
            search_url("localhost 8080", &config),
            "https://google.com/search?q=localhost%208080"
        );
        assert_eq!(
            search_url("localhost:80/build", &config),
            "http://localhost:80/build"
        );
    }

    #[test]
    fn test_search_url_absolute() {
        let config = config();
        assert_eq!(
            search_url("https://example.com/", &config),
            "https://example.com/"
        );
        assert_eq!(search_url("http://localhost", &config), "http://localhost/");
        assert_eq!(
            search_url("https://example.com", &config),
            "https://example.com/"
        );
        assert_eq!(
            search_url("http://localhost:8080?q=1", &config),
            "http://localhost:8080/?q=1"
        );
        assert_eq!(search_url("about:blank", &config), "about:blank");
        assert_eq!(
            search_url("mailto:someone@example.com", &config),
            "mailto:someone@example.com"
        );
        assert_eq!(
            search_url("127.0.0.1:12321/yahoo", &config),
            "http://127.0.0.1:12321/yahoo"
        );
    }

    #[test]
    fn test_search_url_absolute_is_fixed_point() {
        let config = config();
        for input in ["http://localhost", "HTTPS://Example.com", "ftp://files.example.com"] {
            let once = search_url(input, &config);
            assert_eq!(search_url(&once, &config), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_is_address() {
        assert!(is_address("example.com"));
        assert!(is_address("sub.example.co.uk/path?q=1"));
        assert!(is_address("https://example.com"));
        assert!(is_address("mailto:someone@example.com"));
        assert!(!is_address("apple"));
        assert!(!is_address("foo."));
        assert!(!is_address("a..b"));
        assert!(!is_address("example.com foo"));
        assert!(!is_address("chrome://settings"));
        assert!(!is_address(""));
    }

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("https://google.com/"), "https://google.com/");
        assert_eq!(normalize_url("google.com"), "http://google.com");
        assert_eq!(normalize_url("  localhost:8080 "), "http://localhost:8080");
        assert_eq!(normalize_url("HTTPS://Example.com"), "HTTPS://Example.com");
    }

    #[test]
    fn test_normalize_url_idempotent() {
        let inputs = [
            "",
            "google.com",
            "http://google.com",
            "localhost",
            "localhost:80nan",
            "std::vector",
            "foo bar",
            " mailto:x@y.z ",
            "ftp://files.example.com/pub",
            "chrome://settings",
        ];
        for input in inputs {
            let once = normalize_url(input);
            assert_eq!(normalize_url(&once), once, "input: {:?}", input);
        }
    }
}
