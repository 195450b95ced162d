//! `<sitemapindex>` documents.

use super::{Sitemap, into_string, write_document_start};
use crate::error::SitemapError;
use std::io::Write;
use std::sync::Arc;

/// An ordered group of sitemaps.
///
/// Members are shared handles, so a sitemap added here can still be rendered
/// on its own by whoever else holds it.
#[derive(Debug, Clone, Default)]
pub struct SitemapIndex {
    sitemaps: Vec<Arc<Sitemap>>,
}

impl SitemapIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, sitemap: impl Into<Arc<Sitemap>>) -> &mut Self {
        self.sitemaps.push(sitemap.into());
        self
    }

    pub fn add_all<S: Into<Arc<Sitemap>>>(&mut self, sitemaps: impl IntoIterator<Item = S>) -> &mut Self {
        self.sitemaps.extend(sitemaps.into_iter().map(Into::into));
        self
    }

    pub fn sitemaps(&self) -> &[Arc<Sitemap>] {
        &self.sitemaps
    }

    pub fn len(&self) -> usize {
        self.sitemaps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sitemaps.is_empty()
    }

    /// Write the `<sitemapindex>` document.
    ///
    /// Every member must have a location. This is checked up front, so a
    /// missing location fails with [`SitemapError::MissingLocation`] without
    /// writing anything.
    pub fn render<W: Write + ?Sized>(&self, writer: &mut W) -> Result<(), SitemapError> {
        if self.sitemaps.iter().any(|sitemap| sitemap.location().is_none()) {
            return Err(SitemapError::MissingLocation);
        }

        write_document_start(writer, "sitemapindex")?;
        for sitemap in &self.sitemaps {
            sitemap.render_for_index(writer)?;
        }
        writer.write_all(b"</sitemapindex>")?;
        Ok(())
    }

    /// Render the document into a string.
    pub fn to_xml(&self) -> Result<String, SitemapError> {
        let mut buf = Vec::with_capacity(128 + self.sitemaps.len() * 96);
        self.render(&mut buf)?;
        Ok(into_string(buf))
    }
}

impl<S: Into<Arc<Sitemap>>> Extend<S> for SitemapIndex {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<S: Into<Arc<Sitemap>>> FromIterator<S> for SitemapIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = Self::new();
        index.add_all(iter);
        index
    }
}
