//! Source-domain extraction from article URLs

use url::{Host, Url};

/// Extract the normalized host from a URL.
///
/// Returns the lowercase host without a leading "www.", port or trailing
/// root dot. Anything that is not an absolute URL with a dotted domain name
/// (IP literals included) yields an empty string.
pub fn extract_domain(url: &str) -> String {
    let Ok(parsed) = Url::parse(url.trim()) else {
        return String::new();
    };

    let Some(Host::Domain(host)) = parsed.host() else {
        return String::new();
    };

    let host = host.to_lowercase();
    let host = host.strip_suffix('.').unwrap_or(&host);
    let host = host.strip_prefix("www.").unwrap_or(host);

    if !host.contains('.') || host.starts_with('.') || host.ends_with('.') {
        return String::new();
    }

    host.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_www_and_port() {
        assert_eq!(
            extract_domain("https://www.example.com:8080/path?q=1"),
            "example.com"
        );
    }

    #[test]
    fn test_lowercases_host() {
        assert_eq!(extract_domain("http://News.BBC.co.uk/story"), "news.bbc.co.uk");
    }

    #[test]
    fn test_keeps_other_subdomains() {
        assert_eq!(
            extract_domain("https://blog.www.example.org/"),
            "blog.www.example.org"
        );
    }

    #[test]
    fn test_missing_scheme_is_empty() {
        assert_eq!(extract_domain("example.com/article"), "");
        assert_eq!(extract_domain("www.example.com"), "");
    }

    #[test]
    fn test_missing_host_is_empty() {
        assert_eq!(extract_domain("mailto:someone@example.com"), "");
        assert_eq!(extract_domain("file:///etc/hosts"), "");
    }

    #[test]
    fn test_undotted_host_is_empty() {
        assert_eq!(extract_domain("http://localhost:3000/"), "");
        assert_eq!(extract_domain("https://www.intranet/"), "");
    }

    #[test]
    fn test_trailing_root_dot_is_dropped() {
        assert_eq!(extract_domain("https://www.nature.com./a"), "nature.com");
        assert_eq!(extract_domain("https://BMJ.com./"), "bmj.com");
    }

    #[test]
    fn test_ip_literals_are_empty() {
        assert_eq!(extract_domain("http://192.168.0.1/"), "");
        assert_eq!(extract_domain("http://10.0.0.1:8080/feed"), "");
        assert_eq!(extract_domain("http://[::1]/"), "");
    }

    #[test]
    fn test_garbage_is_empty() {
        assert_eq!(extract_domain(""), "");
        assert_eq!(extract_domain("not a url at all"), "");
        assert_eq!(extract_domain("https://"), "");
    }
}
