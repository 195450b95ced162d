//! Sitemap rendering for the sitemaps.org 0.9 protocol.
//!
//! Builds `<urlset>` sitemaps and `<sitemapindex>` documents from in-memory
//! records and writes them to any [`std::io::Write`] sink.
//!
//! - **Entry**: one `<url>` record (location, lastmod, changefreq, priority)
//! - **Sitemap**: an ordered group of entries, rendered standalone or as an index member
//! - **SitemapIndex**: an ordered group of shared sitemaps
//!
//! Output is compact: no whitespace is written between elements.
//!
//! # Example
//!
//! ```
//! use sitemap_render::{ChangeFrequency, Date, Entry, Sitemap};
//!
//! let mut entry = Entry::parse("https://example.com/").unwrap();
//! entry.set_lastmod(Date::parse("2024-06-15"));
//! entry.set_changefreq(ChangeFrequency::Weekly);
//!
//! let mut sitemap = Sitemap::new();
//! sitemap.add(entry);
//!
//! assert!(sitemap.to_xml().ends_with(
//!     "<url><loc>https://example.com/</loc><lastmod>2024-06-15</lastmod>\
//!      <changefreq>weekly</changefreq></url></urlset>"
//! ));
//! ```

pub mod config;
pub mod error;
pub mod logger;
pub mod sitemap;
pub mod utils;

pub use config::{ConfigError, Manifest};
pub use error::SitemapError;
pub use sitemap::{
    ChangeFrequency, Entry, Location, MAX_URLS_PER_SITEMAP, Priority, Sitemap, SitemapIndex,
};
pub use utils::date::Date;
