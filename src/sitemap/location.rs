//! Validated absolute URI for `<loc>` elements.

use crate::error::SitemapError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use url::Url;

/// Absolute URI of a page or sitemap.
///
/// Validated with [`Url`], but rendered exactly as given:
/// `http://example.com` stays without the trailing slash `Url` would add.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Location {
    raw: Arc<str>,
    url: Url,
}

impl Location {
    /// Parse and validate an absolute URI.
    pub fn parse(input: &str) -> Result<Self, SitemapError> {
        // `Url` silently strips surrounding whitespace and encodes inner
        // whitespace; neither is a valid URI character.
        if input.is_empty() || input.chars().any(char::is_whitespace) {
            return Err(SitemapError::malformed(input, None));
        }
        let url = Url::parse(input).map_err(|e| SitemapError::malformed(input, Some(e)))?;
        // `Url` also repairs backslashes, bad escapes and stray characters,
        // so the raw text is held to RFC 3986 as well.
        if !is_rfc3986(input) {
            return Err(SitemapError::malformed(input, None));
        }
        Ok(Self {
            raw: Arc::from(input),
            url,
        })
    }

    /// The URI as it will appear (before escaping) inside `<loc>`.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Parsed form, for callers that need host or path access.
    #[inline]
    pub fn as_url(&self) -> &Url {
        &self.url
    }
}

impl From<Url> for Location {
    fn from(url: Url) -> Self {
        Self {
            raw: Arc::from(url.as_str()),
            url,
        }
    }
}

impl FromStr for Location {
    type Err = SitemapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Location {
    type Error = SitemapError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Location {
    type Error = SitemapError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Location> for String {
    fn from(location: Location) -> Self {
        location.raw.to_string()
    }
}

impl AsRef<str> for Location {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Whether `input` uses only RFC 3986 characters, well-formed `%HH`
/// escapes and at most one `#`. Non-ASCII text (IRIs) is let through.
fn is_rfc3986(input: &str) -> bool {
    let bytes = input.as_bytes();
    let mut fragments = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hex = |b: Option<&u8>| b.is_some_and(u8::is_ascii_hexdigit);
                if !hex(bytes.get(i + 1)) || !hex(bytes.get(i + 2)) {
                    return false;
                }
                i += 2;
            }
            b'#' => {
                fragments += 1;
                if fragments > 1 {
                    return false;
                }
            }
            // unreserved
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {}
            // gen-delims (minus `#`) and sub-delims
            b':' | b'/' | b'?' | b'[' | b']' | b'@' => {}
            b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'=' => {}
            b if b.is_ascii() => return false,
            _ => {}
        }
        i += 1;
    }
    !input.chars().any(char::is_control)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_keeps_input_verbatim() {
        let location = Location::parse("http://www.supnig.com").unwrap();
        assert_eq!(location.as_str(), "http://www.supnig.com");
        assert_eq!(location.as_url().as_str(), "http://www.supnig.com/");
        assert_eq!(location.as_url().host_str(), Some("www.supnig.com"));
    }

    #[test]
    fn test_location_from_url() {
        let url = Url::parse("https://example.com/a?b=c").unwrap();
        let location = Location::from(url);
        assert_eq!(location.as_str(), "https://example.com/a?b=c");
    }

    #[test]
    fn test_location_rejects_relative() {
        let err = Location::parse("/posts/hello/").unwrap_err();
        assert!(matches!(
            err,
            SitemapError::MalformedUri {
                source: Some(url::ParseError::RelativeUrlWithoutBase),
                ..
            }
        ));
    }

    #[test]
    fn test_location_rejects_whitespace() {
        for input in ["", " http://example.com", "http://example.com/a b", "http://x.com\n"] {
            let err = Location::parse(input).unwrap_err();
            assert!(
                matches!(err, SitemapError::MalformedUri { source: None, .. }),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_location_rejects_non_rfc3986_text() {
        for input in [
            r"http:\\example.com\a",
            "http://example.com/%zz",
            "http://example.com/%4",
            "http://example.com/a{b}|c^",
            "http://example.com/a<b>",
            "http://example.com/\"quoted\"",
            "http://example.com/a#b#c",
        ] {
            let err = Location::parse(input).unwrap_err();
            assert!(
                matches!(err, SitemapError::MalformedUri { source: None, .. }),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_location_accepts_rfc3986_text() {
        for input in [
            "http://example.com/a%20b",
            "http://example.com/a#frag",
            "https://user@example.com:8080/p;x=1/q?a=1&b=(2)*3+4,5!$'",
            "http://[::1]/~home/_a-b.c",
            "https://example.com/café",
        ] {
            assert_eq!(Location::parse(input).unwrap().as_str(), input);
        }
    }

    #[test]
    fn test_location_rejects_invalid_host() {
        assert!(Location::parse("http://exa mple.com").is_err());
        assert!(Location::parse("http://[::1").is_err());
    }

    #[test]
    fn test_location_conversions() {
        let location: Location = "https://example.com/".parse().unwrap();
        assert_eq!(location.to_string(), "https://example.com/");
        assert_eq!(String::from(location.clone()), "https://example.com/");
        assert_eq!(
            Location::try_from("https://example.com/").unwrap(),
            location
        );
    }
}
