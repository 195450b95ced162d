//! `<urlset>` sitemaps.

use super::{
    Entry, Location, MAX_URLS_PER_SITEMAP, into_string, write_document_start, write_element,
};
use crate::error::SitemapError;
use crate::utils::date::Date;
use std::io::{self, Write};

/// An ordered group of entries.
///
/// `location` and `lastmod` describe the sitemap itself and are only used
/// when it is rendered as a member of a [`SitemapIndex`](super::SitemapIndex).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sitemap {
    location: Option<Location>,
    lastmod: Option<Date>,
    entries: Vec<Entry>,
}

impl Sitemap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sitemap that can be referenced from an index.
    pub fn with_location(location: impl Into<Location>) -> Self {
        Self {
            location: Some(location.into()),
            ..Self::default()
        }
    }

    /// Create a sitemap from a location string.
    pub fn parse(location: &str) -> Result<Self, SitemapError> {
        Location::parse(location).map(Self::with_location)
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn set_location(&mut self, location: impl Into<Option<Location>>) -> &mut Self {
        self.location = location.into();
        self
    }

    /// Replace the location with a parsed string; unchanged on error.
    pub fn parse_location(&mut self, location: &str) -> Result<&mut Self, SitemapError> {
        self.location = Some(Location::parse(location)?);
        Ok(self)
    }

    pub fn lastmod(&self) -> Option<Date> {
        self.lastmod
    }

    pub fn set_lastmod(&mut self, lastmod: impl Into<Option<Date>>) -> &mut Self {
        self.lastmod = lastmod.into();
        self
    }

    pub fn add(&mut self, entry: Entry) -> &mut Self {
        self.entries.push(entry);
        self
    }

    pub fn add_all(&mut self, entries: impl IntoIterator<Item = Entry>) -> &mut Self {
        self.entries.extend(entries);
        self
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether this sitemap holds more URLs than the protocol allows.
    pub fn exceeds_url_limit(&self) -> bool {
        self.entries.len() > MAX_URLS_PER_SITEMAP
    }

    /// Write this sitemap as a standalone `<urlset>` document.
    pub fn render<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        write_document_start(writer, "urlset")?;
        for entry in &self.entries {
            entry.render(writer)?;
        }
        writer.write_all(b"</urlset>")
    }

    /// Write this sitemap as a `<sitemap>` member of an index.
    ///
    /// Fails with [`SitemapError::MissingLocation`] before writing anything
    /// when no location is set.
    pub fn render_for_index<W: Write + ?Sized>(&self, writer: &mut W) -> Result<(), SitemapError> {
        let location = self.location.as_ref().ok_or(SitemapError::MissingLocation)?;

        writer.write_all(b"<sitemap>")?;
        write_element(writer, "loc", location.as_str())?;
        if let Some(lastmod) = self.lastmod {
            write_element(writer, "lastmod", &lastmod.to_string())?;
        }
        writer.write_all(b"</sitemap>")?;
        Ok(())
    }

    /// Render the standalone document into a string.
    pub fn to_xml(&self) -> String {
        let mut buf = Vec::with_capacity(128 + self.entries.len() * 96);
        self.render(&mut buf)
            .expect("writing to Vec<u8> is infallible");
        into_string(buf)
    }
}

impl Extend<Entry> for Sitemap {
    fn extend<I: IntoIterator<Item = Entry>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl FromIterator<Entry> for Sitemap {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sitemap::{ChangeFrequency, test_support::element_texts};

    const EMPTY: &str = r#"<?xml version="1.0" encoding="UTF-8"?><urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"></urlset>"#;

    const SIMPLE: &str = concat!(
        r#"<?xml version="1.0" encoding="UTF-8"?>"#,
        r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#,
        "<url><loc>http://www.supnig.com</loc><lastmod>1985-10-01</lastmod><changefreq>daily</changefreq></url>",
        "<url><loc>http://www.google.com</loc><lastmod>1985-10-01</lastmod><changefreq>hourly</changefreq><priority>1.0</priority></url>",
        "<url><loc>http://www.github.com</loc></url>",
        "</urlset>",
    );

    fn birthday() -> Date {
        Date::from_ymd(1985, 10, 1).unwrap()
    }

    fn simple_sitemap() -> Sitemap {
        let mut sitemap = Sitemap::new();

        let mut supnig = Entry::parse("http://www.supnig.com").unwrap();
        supnig
            .set_lastmod(birthday())
            .set_changefreq(ChangeFrequency::Daily)
            .set_priority(0.5);
        sitemap.add(supnig);

        let mut google = Entry::parse("http://www.google.com").unwrap();
        google
            .set_lastmod(birthday())
            .set_changefreq(ChangeFrequency::Hourly)
            .set_priority(2.0);
        sitemap.add(google);

        sitemap.add(Entry::parse("http://www.github.com").unwrap());
        sitemap
    }

    #[test]
    fn test_sitemap_empty() {
        assert_eq!(Sitemap::new().to_xml(), EMPTY);
    }

    #[test]
    fn test_sitemap_simple() {
        assert_eq!(simple_sitemap().to_xml(), SIMPLE);
    }

    #[test]
    fn test_sitemap_render_into_writer() {
        let mut buf = Vec::new();
        simple_sitemap().render(&mut buf).unwrap();
        assert_eq!(buf, SIMPLE.as_bytes());
    }

    #[test]
    fn test_sitemap_render_is_idempotent() {
        let sitemap = simple_sitemap();
        assert_eq!(sitemap.to_xml(), sitemap.to_xml());
    }

    #[test]
    fn test_sitemap_is_well_formed() {
        let xml = simple_sitemap().to_xml();
        assert_eq!(
            element_texts(&xml, "loc"),
            [
                "http://www.supnig.com",
                "http://www.google.com",
                "http://www.github.com"
            ]
        );
        assert_eq!(element_texts(&xml, "priority"), ["1.0"]);
    }

    #[test]
    fn test_sitemap_keeps_insertion_order_and_duplicates() {
        let a = Entry::parse("https://example.com/a").unwrap();
        let b = Entry::parse("https://example.com/b").unwrap();

        let mut sitemap = Sitemap::new();
        sitemap.add(b.clone()).add_all([a.clone(), b.clone()]);
        sitemap.extend([a]);

        assert_eq!(sitemap.len(), 4);
        assert_eq!(
            element_texts(&sitemap.to_xml(), "loc"),
            [
                "https://example.com/b",
                "https://example.com/a",
                "https://example.com/b",
                "https://example.com/a"
            ]
        );
    }

    #[test]
    fn test_sitemap_from_iter() {
        let sitemap: Sitemap = ["https://example.com/", "https://example.com/about/"]
            .into_iter()
            .map(|loc| Entry::parse(loc).unwrap())
            .collect();

        assert_eq!(sitemap.len(), 2);
        assert_eq!(sitemap.location(), None);
        assert!(!sitemap.is_empty());
    }

    #[test]
    fn test_sitemap_standalone_ignores_own_location() {
        let mut sitemap = Sitemap::parse("http://www.testing.com/sitemap").unwrap();
        sitemap.set_lastmod(birthday());
        assert_eq!(sitemap.to_xml(), EMPTY);
    }

    #[test]
    fn test_render_for_index() {
        let mut sitemap = Sitemap::parse("http://www.testing.com/sitemap").unwrap();
        sitemap.set_lastmod(birthday());

        let mut buf = Vec::new();
        sitemap.render_for_index(&mut buf).unwrap();
        assert_eq!(
            into_string(buf),
            "<sitemap><loc>http://www.testing.com/sitemap</loc><lastmod>1985-10-01</lastmod></sitemap>"
        );
    }

    #[test]
    fn test_render_for_index_without_lastmod() {
        let mut sitemap = Sitemap::new();
        sitemap
            .parse_location("http://www.testing2.com/sitemap")
            .unwrap();

        let mut buf = Vec::new();
        sitemap.render_for_index(&mut buf).unwrap();
        assert_eq!(
            into_string(buf),
            "<sitemap><loc>http://www.testing2.com/sitemap</loc></sitemap>"
        );
    }

    #[test]
    fn test_render_for_index_missing_location_writes_nothing() {
        let mut sitemap = Sitemap::new();
        sitemap.add(Entry::parse("http://www.supnig.com").unwrap());

        let mut buf = Vec::new();
        let err = sitemap.render_for_index(&mut buf).unwrap_err();
        assert!(matches!(err, SitemapError::MissingLocation));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_parse_location_keeps_previous_on_error() {
        let mut sitemap = Sitemap::parse("https://example.com/sitemap.xml").unwrap();
        assert!(sitemap.parse_location("not a uri").is_err());
        assert_eq!(
            sitemap.location().map(Location::as_str),
            Some("https://example.com/sitemap.xml")
        );

        sitemap.set_location(None);
        assert_eq!(sitemap.location(), None);
    }

    #[test]
    fn test_exceeds_url_limit() {
        let entry = Entry::parse("https://example.com/").unwrap();
        let mut sitemap: Sitemap = std::iter::repeat_n(entry.clone(), MAX_URLS_PER_SITEMAP).collect();
        assert!(!sitemap.exceeds_url_limit());

        sitemap.add(entry);
        assert!(sitemap.exceeds_url_limit());
    }
}
