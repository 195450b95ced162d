//! `<url>` entries.

use super::{Location, write_element};
use crate::error::SitemapError;
use crate::utils::date::Date;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// ChangeFrequency
// ============================================================================

/// How often the content at a URL is expected to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    /// Changes each time it is accessed.
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    /// Archived content.
    Never,
}

impl ChangeFrequency {
    pub const ALL: [Self; 7] = [
        Self::Always,
        Self::Hourly,
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::Yearly,
        Self::Never,
    ];

    /// Lowercase protocol name, as written inside `<changefreq>`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown change frequency `{0}`, expected one of: always, hourly, daily, weekly, monthly, yearly, never")]
pub struct ParseChangeFrequencyError(String);

impl FromStr for ChangeFrequency {
    type Err = ParseChangeFrequencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|freq| freq.as_str() == s)
            .ok_or_else(|| ParseChangeFrequencyError(s.to_string()))
    }
}

// ============================================================================
// Priority
// ============================================================================

/// Relative priority of a URL within its site, always in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct Priority(f32);

impl Priority {
    pub const MIN: Self = Self(0.0);
    pub const MAX: Self = Self(1.0);
    /// Protocol default; never rendered.
    pub const DEFAULT: Self = Self(0.5);

    /// Clamp `value` into `0.0..=1.0`. NaN falls back to the default.
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            Self::DEFAULT
        } else if value <= Self::MIN.0 {
            Self::MIN
        } else if value >= Self::MAX.0 {
            Self::MAX
        } else {
            Self(value)
        }
    }

    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    #[inline]
    #[allow(clippy::float_cmp)] // Exact comparison against the stored default
    pub fn is_default(self) -> bool {
        self.0 == Self::DEFAULT.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<f32> for Priority {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<Priority> for f32 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

/// Plain decimal with at least one fractional digit (`1.0`, `0.8`, `0.00001`).
impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f32 `Display` never switches to exponent notation
        let decimal = self.0.to_string();
        if decimal.contains('.') {
            f.write_str(&decimal)
        } else {
            write!(f, "{decimal}.0")
        }
    }
}

// ============================================================================
// Entry
// ============================================================================

/// A single URL advertised by a sitemap.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    location: Location,
    lastmod: Option<Date>,
    changefreq: Option<ChangeFrequency>,
    priority: Priority,
}

impl Entry {
    pub fn new(location: impl Into<Location>) -> Self {
        Self {
            location: location.into(),
            lastmod: None,
            changefreq: None,
            priority: Priority::DEFAULT,
        }
    }

    /// Create an entry from a location string.
    pub fn parse(location: &str) -> Result<Self, SitemapError> {
        Location::parse(location).map(Self::new)
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn lastmod(&self) -> Option<Date> {
        self.lastmod
    }

    pub fn changefreq(&self) -> Option<ChangeFrequency> {
        self.changefreq
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn set_lastmod(&mut self, lastmod: impl Into<Option<Date>>) -> &mut Self {
        self.lastmod = lastmod.into();
        self
    }

    pub fn set_changefreq(&mut self, changefreq: impl Into<Option<ChangeFrequency>>) -> &mut Self {
        self.changefreq = changefreq.into();
        self
    }

    /// Set the priority; values outside `0.0..=1.0` are clamped.
    pub fn set_priority(&mut self, priority: f32) -> &mut Self {
        self.priority = Priority::new(priority);
        self
    }

    pub fn with_lastmod(mut self, lastmod: Date) -> Self {
        self.lastmod = Some(lastmod);
        self
    }

    pub fn with_changefreq(mut self, changefreq: ChangeFrequency) -> Self {
        self.changefreq = Some(changefreq);
        self
    }

    pub fn with_priority(mut self, priority: f32) -> Self {
        self.priority = Priority::new(priority);
        self
    }

    /// Write this entry as a `<url>` element.
    ///
    /// Optional children are written only when set; the default priority is
    /// never written.
    pub fn render<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b"<url>")?;
        write_element(writer, "loc", self.location.as_str())?;
        if let Some(lastmod) = self.lastmod {
            write_element(writer, "lastmod", &lastmod.to_string())?;
        }
        if let Some(changefreq) = self.changefreq {
            write_element(writer, "changefreq", changefreq.as_str())?;
        }
        if !self.priority.is_default() {
            write_element(writer, "priority", &self.priority.to_string())?;
        }
        writer.write_all(b"</url>")
    }
}
