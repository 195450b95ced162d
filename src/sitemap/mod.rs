//! Sitemap documents.
//!
//! Renders the two document kinds of the sitemaps.org 0.9 protocol:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url><loc>https://example.com/</loc><lastmod>2025-01-01</lastmod></url>
//! </urlset>
//!
//! <?xml version="1.0" encoding="UTF-8"?>
//! <sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <sitemap><loc>https://example.com/sitemap.xml</loc></sitemap>
//! </sitemapindex>
//! ```
//!
//! Layout above is for reading only; rendered output has no whitespace
//! between elements.
//!
//! Rendering borrows documents immutably while mutators need `&mut`, so a
//! sitemap cannot change under an in-progress render.

mod entry;
mod index;
mod location;
mod urlset;

pub use entry::{ChangeFrequency, Entry, ParseChangeFrequencyError, Priority};
pub use index::SitemapIndex;
pub use location::Location;
pub use urlset::Sitemap;

use crate::utils::xml::escape_xml;
use std::io::{self, Write};

pub(crate) const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
pub(crate) const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Maximum number of `<url>` entries the protocol allows in one sitemap.
pub const MAX_URLS_PER_SITEMAP: usize = 50_000;

/// Write `<?xml …?><{root} xmlns="…">`.
fn write_document_start<W: Write + ?Sized>(writer: &mut W, root: &str) -> io::Result<()> {
    write!(writer, r#"{XML_DECLARATION}<{root} xmlns="{SITEMAP_NS}">"#)
}

/// Write `<{name}>{escaped text}</{name}>`.
fn write_element<W: Write + ?Sized>(writer: &mut W, name: &str, text: &str) -> io::Result<()> {
    write!(writer, "<{name}>{}</{name}>", escape_xml(text))
}

/// Lossless conversion of a rendered buffer; rendered text is always UTF-8.
fn into_string(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}
