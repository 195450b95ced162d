//! Shared helpers for sitemap rendering.

pub mod date;
pub mod xml;
