//! Sitemap error types.

use thiserror::Error;

/// Errors raised while building or rendering sitemaps.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// A location string is not an absolute URI.
    #[error("malformed URI `{input}`")]
    MalformedUri {
        input: String,
        #[source]
        source: Option<url::ParseError>,
    },

    /// A sitemap was rendered as an index member without a location.
    #[error("a sitemap rendered inside a sitemap index must have a location")]
    MissingLocation,

    /// The output sink failed.
    #[error("failed to write sitemap output")]
    Io(#[from] std::io::Error),
}

impl SitemapError {
    pub(crate) fn malformed(input: &str, source: Option<url::ParseError>) -> Self {
        Self::MalformedUri {
            input: input.to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_sitemap_error_display() {
        let err = SitemapError::malformed("not a uri", Some(url::ParseError::RelativeUrlWithoutBase));
        let display = format!("{err}");
        assert!(display.contains("malformed URI"));
        assert!(display.contains("not a uri"));
        assert!(err.source().is_some());

        let err = SitemapError::MissingLocation;
        assert!(format!("{err}").contains("must have a location"));
    }

    #[test]
    fn test_io_error_is_kept_verbatim() {
        let err: SitemapError = Error::new(ErrorKind::BrokenPipe, "pipe closed").into();
        match err {
            SitemapError::Io(inner) => {
                assert_eq!(inner.kind(), ErrorKind::BrokenPipe);
                assert_eq!(inner.to_string(), "pipe closed");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
