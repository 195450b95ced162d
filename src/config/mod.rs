//! Sitemap manifest.
//!
//! A manifest describes sitemaps declaratively in TOML:
//!
//! ```toml
//! [[sitemap]]
//! loc = "https://example.com/sitemap-posts.xml"   # required for index builds
//! lastmod = "2024-06-15"
//!
//! [[sitemap.url]]
//! loc = "https://example.com/posts/hello/"
//! lastmod = "2024-06-15"
//! changefreq = "weekly"
//! priority = 0.8
//! ```
//!
//! Parsing only checks structure. [`Manifest::build_sitemaps`] and
//! [`Manifest::build_index`] validate locations and dates, collecting every
//! problem into a single [`ConfigError::Diagnostics`].

mod error;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};

use crate::sitemap::{
    ChangeFrequency, Entry, Location, MAX_URLS_PER_SITEMAP, Sitemap, SitemapIndex,
};
use crate::utils::date::Date;
use crate::{debug, log};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::{fs, sync::Arc};

/// Root of a manifest file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    #[serde(rename = "sitemap", skip_serializing_if = "Vec::is_empty")]
    pub sitemaps: Vec<SitemapSection>,
}

/// `[[sitemap]]` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SitemapSection {
    /// Where the sitemap will be published; required inside an index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<String>,
    #[serde(rename = "url", skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<UrlSection>,
}

/// `[[sitemap.url]]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UrlSection {
    pub loc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changefreq: Option<ChangeFrequency>,
    /// Clamped into `0.0..=1.0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<f32>,
}

impl Manifest {
    /// Parse manifest TOML.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let manifest = Self::from_toml(&content)?;
        debug!("manifest"; "loaded {} sitemaps from {}", manifest.sitemaps.len(), path.display());
        Ok(manifest)
    }

    /// Build every sitemap, in manifest order.
    pub fn build_sitemaps(&self) -> Result<Vec<Sitemap>, ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        let sitemaps = self.collect(&mut diag, false);
        diag.into_result()?;
        Ok(sitemaps)
    }

    /// Build an index over every sitemap; each one needs a `loc`.
    pub fn build_index(&self) -> Result<SitemapIndex, ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        let sitemaps = self.collect(&mut diag, true);
        diag.into_result()?;
        Ok(sitemaps.into_iter().map(Arc::new).collect())
    }

    fn collect(&self, diag: &mut ConfigDiagnostics, require_loc: bool) -> Vec<Sitemap> {
        let sitemaps: Vec<Sitemap> = self
            .sitemaps
            .iter()
            .enumerate()
            .map(|(idx, section)| section.build(&format!("sitemap[{idx}]"), diag, require_loc))
            .collect();

        for (idx, sitemap) in sitemaps.iter().enumerate() {
            if sitemap.exceeds_url_limit() {
                log!(
                    "warning";
                    "sitemap[{idx}] has {} urls, more than the {MAX_URLS_PER_SITEMAP} a sitemap may hold",
                    sitemap.len()
                );
            }
        }
        sitemaps
    }
}

impl FromStr for Manifest {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_toml(s)
    }
}

impl SitemapSection {
    fn build(&self, field: &str, diag: &mut ConfigDiagnostics, require_loc: bool) -> Sitemap {
        let mut sitemap = Sitemap::new();

        match &self.loc {
            Some(loc) => {
                sitemap.set_location(parse_location(loc, &format!("{field}.loc"), diag));
            }
            None if require_loc => diag.error_with_hint(
                format!("{field}.loc"),
                "a sitemap inside an index must have a location",
                "set `loc` to the URL this sitemap will be published at",
            ),
            None => {}
        }
        if let Some(lastmod) = &self.lastmod {
            sitemap.set_lastmod(parse_date(lastmod, &format!("{field}.lastmod"), diag));
        }

        sitemap.add_all(self.urls.iter().enumerate().filter_map(|(idx, url)| {
            url.build(&format!("{field}.url[{idx}]"), diag)
        }));
        sitemap
    }
}

impl UrlSection {
    fn build(&self, field: &str, diag: &mut ConfigDiagnostics) -> Option<Entry> {
        let location = parse_location(&self.loc, &format!("{field}.loc"), diag);
        let lastmod = self
            .lastmod
            .as_deref()
            .and_then(|date| parse_date(date, &format!("{field}.lastmod"), diag));

        let mut entry = Entry::new(location?);
        entry.set_lastmod(lastmod).set_changefreq(self.changefreq);
        if let Some(priority) = self.priority {
            entry.set_priority(priority);
        }
        Some(entry)
    }
}

fn parse_location(loc: &str, field: &str, diag: &mut ConfigDiagnostics) -> Option<Location> {
    Location::parse(loc)
        .map_err(|e| diag.error(field, e.to_string()))
        .ok()
}

fn parse_date(date: &str, field: &str, diag: &mut ConfigDiagnostics) -> Option<Date> {
    date.parse::<Date>()
        .map_err(|e| diag.error(field, e.to_string()))
        .ok()
}
