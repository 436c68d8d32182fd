//! Opt-in validation for sitemap field values
//!
//! The write path itself never validates: out-of-range priorities,
//! unknown frequency strings and malformed dates are emitted verbatim.
//! Callers that want strictly conforming output run these checks
//! before handing values to the writer.

use chrono::{DateTime, NaiveDate};

use crate::options::CHANGE_FREQUENCIES;
use crate::{Result, SitemapError};

/// Validates a `<priority>` value
///
/// Must parse as a decimal number in the range 0.0 to 1.0.
///
/// # Examples
///
/// ```
/// use sitemap_rs::validation::validate_priority;
///
/// assert!(validate_priority("0.5").is_ok());
/// assert!(validate_priority("1.0").is_ok());
/// assert!(validate_priority("1.5").is_err());
/// assert!(validate_priority("high").is_err());
/// ```
pub fn validate_priority(value: &str) -> Result<()> {
    let parsed: f64 = value
        .parse()
        .map_err(|_| SitemapError::InvalidValue(format!("priority is not a number: {value}")))?;
    if !(0.0..=1.0).contains(&parsed) {
        return Err(SitemapError::InvalidValue(format!(
            "priority out of range 0..1: {value}"
        )));
    }
    Ok(())
}

/// Validates a raw `<changefreq>` string against the seven protocol
/// literals
///
/// Useful for callers holding strings from configuration; callers
/// using [`crate::ChangeFrequency`] get this for free.
pub fn validate_change_frequency(value: &str) -> Result<()> {
    if CHANGE_FREQUENCIES.iter().any(|freq| freq.as_str() == value) {
        return Ok(());
    }
    Err(SitemapError::InvalidValue(format!(
        "unknown change frequency: {value}"
    )))
}

/// Validates a `<lastmod>` value
///
/// Accepts a `YYYY-MM-DD` calendar date or a full W3C datetime
/// (RFC 3339).
///
/// # Examples
///
/// ```
/// use sitemap_rs::validation::validate_lastmod;
///
/// assert!(validate_lastmod("2012-06-28").is_ok());
/// assert!(validate_lastmod("2012-06-28T10:30:00+00:00").is_ok());
/// assert!(validate_lastmod("28/06/2012").is_err());
/// ```
pub fn validate_lastmod(value: &str) -> Result<()> {
    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok() {
        return Ok(());
    }
    if DateTime::parse_from_rfc3339(value).is_ok() {
        return Ok(());
    }
    Err(SitemapError::InvalidValue(format!(
        "lastmod is neither a calendar date nor a W3C datetime: {value}"
    )))
}
