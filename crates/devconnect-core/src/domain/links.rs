//! Canonical form for user-supplied links.

use url::Url;

/// Normalize free-form URL text into an absolute HTTPS URL.
///
/// Empty input stays empty. Scheme-less and protocol-relative input is
/// treated as HTTPS, `http` is upgraded, a leading `www.` is dropped, query
/// parameters are sorted and a trailing slash is removed. Text that cannot be
/// parsed even after adding a scheme is returned trimmed.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let candidate = if let Some(rest) = trimmed.strip_prefix("//") {
        format!("https://{rest}")
    } else if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let Ok(mut url) = Url::parse(&candidate) else {
        return trimmed.to_string();
    };

    if url.scheme() == "http" && url.set_scheme("https").is_err() {
        return trimmed.to_string();
    }

    if let Some(host) = url.host_str().map(str::to_owned) {
        if let Some(bare) = host.strip_prefix("www.") {
            if bare.contains('.') {
                let _ = url.set_host(Some(bare));
            }
        }
    }

    if url.port() == Some(443) && url.scheme() == "https" {
        let _ = url.set_port(None);
    }

    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    if pairs.is_empty() {
        url.set_query(None);
    } else {
        pairs.sort();
        url.query_pairs_mut().clear().extend_pairs(pairs);
    }

    let path = url.path().to_string();
    if path.len() > 1 && path.ends_with('/') {
        url.set_path(path.trim_end_matches('/'));
    }

    let mut normalized = url.to_string();
    if url.path() == "/" && url.query().is_none() && url.fragment().is_none() {
        normalized.pop();
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stays_empty() {
        assert_eq!(normalize_url(""), "");
        assert_eq!(normalize_url("   "), "");
    }

    #[test]
    fn test_scheme_less_gets_https() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(normalize_url("//example.com/a"), "https://example.com/a");
    }

    #[test]
    fn test_http_is_upgraded_and_www_dropped() {
        assert_eq!(
            normalize_url("http://www.Example.com/"),
            "https://example.com"
        );
    }

    #[test]
    fn test_trailing_slash_and_query_order() {
        assert_eq!(
            normalize_url("twitter.com/someone/?b=2&a=1"),
            "https://twitter.com/someone?a=1&b=2"
        );
    }

    #[test]
    fn test_default_port_is_dropped() {
        assert_eq!(
            normalize_url("https://linkedin.com:443/in/me"),
            "https://linkedin.com/in/me"
        );
    }

    #[test]
    fn test_www_only_host_is_kept() {
        assert_eq!(normalize_url("www.com"), "https://www.com");
    }
}
