use url::Url;

use crate::{Error, Result};

/// Prefix `https://` when the input carries no http(s) scheme. Idempotent.
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// Like [`normalize_url`] but rejects empty input and anything that still
/// does not parse as an absolute URL with a host.
pub fn parse_target(input: &str) -> Result<Url> {
    if input.trim().is_empty() {
        return Err(Error::InvalidUrl("empty target".to_string()));
    }
    let normalized = normalize_url(input);
    let url = Url::parse(&normalized).map_err(|e| Error::InvalidUrl(format!("{}: {}", normalized, e)))?;
    if url.host_str().is_none() {
        return Err(Error::InvalidUrl(normalized));
    }
    Ok(url)
}

/// File-name safe form of a URL: every non-alphanumeric ASCII char becomes `_`.
pub fn slugify_url(url: &str) -> String {
    url.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_prefixes_once() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
        assert_eq!(normalize_url("http://example.com/a"), "http://example.com/a");
        assert_eq!(normalize_url(&normalize_url("example.com")), "https://example.com");
    }

    #[test]
    fn test_scheme_check_is_not_a_bare_prefix_match() {
        assert_eq!(normalize_url("httpbin.org"), "https://httpbin.org");
        assert_eq!(normalize_url("  example.com/path "), "https://example.com/path");
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target("example.com").unwrap().as_str(), "https://example.com/");
        assert!(parse_target("").is_err());
        assert!(parse_target("   ").is_err());
        assert!(parse_target("exa mple.com").is_err());
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify_url("https://example.com/a-b"), "https___example_com_a_b");
    }
}
