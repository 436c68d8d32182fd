//! Typed per-entry options for sitemap URL records
//!
//! Every field is optional and omitted from the output when unset.
//! Values are emitted verbatim: the writer does not clamp priorities,
//! reject unknown dates, or escape URLs. See [`crate::validation`] for
//! opt-in strictness.

use std::fmt;
use std::str::FromStr;

use crate::{Result, SitemapError};

/// Page change frequency, per the sitemaps.org `<changefreq>` element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

/// All valid `<changefreq>` values, in protocol order
pub const CHANGE_FREQUENCIES: [ChangeFrequency; 7] = [
    ChangeFrequency::Always,
    ChangeFrequency::Hourly,
    ChangeFrequency::Daily,
    ChangeFrequency::Weekly,
    ChangeFrequency::Monthly,
    ChangeFrequency::Yearly,
    ChangeFrequency::Never,
];

impl ChangeFrequency {
    /// The protocol literal for this frequency
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeFrequency {
    type Err = SitemapError;

    fn from_str(s: &str) -> Result<Self> {
        CHANGE_FREQUENCIES
            .into_iter()
            .find(|freq| freq.as_str() == s)
            .ok_or_else(|| SitemapError::InvalidValue(format!("unknown change frequency: {s}")))
    }
}

/// Last modification date for a URL record
///
/// Calendar dates are emitted verbatim, except that a date string made
/// up entirely of decimal digits is reinterpreted as a Unix timestamp
/// and reformatted to `YYYY-MM-DD`, matching the timestamp variant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum LastModified {
    /// Unix timestamp, formatted to `YYYY-MM-DD` on emission
    Timestamp(i64),
    /// Calendar date string, `YYYY-MM-DD`
    Date(String),
}

impl From<i64> for LastModified {
    fn from(timestamp: i64) -> Self {
        LastModified::Timestamp(timestamp)
    }
}

impl From<&str> for LastModified {
    fn from(date: &str) -> Self {
        LastModified::Date(date.to_string())
    }
}

impl From<String> for LastModified {
    fn from(date: String) -> Self {
        LastModified::Date(date)
    }
}

/// Google News extension fields for one URL record
///
/// All fields are emitted; `title` and `keywords` are CDATA-wrapped
/// with surrounding whitespace trimmed, the rest are emitted verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewsOptions {
    /// Publication name
    pub name: String,
    /// Publication language (e.g., "en")
    pub language: String,
    /// Comma-separated genre list (e.g., "PressRelease, Blog")
    pub genres: String,
    /// Article publication date
    pub publication_date: String,
    /// Article title
    pub title: String,
    /// Comma-separated keyword list
    pub keywords: String,
}

/// Image extension fields for one image of a URL record
///
/// Absent fields are omitted from the `<image:image>` block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageOptions {
    /// Image URL, CDATA-wrapped into `<image:loc>`
    pub location: Option<String>,
    /// Caption, CDATA-wrapped
    pub caption: Option<String>,
    /// Geographic location, emitted verbatim
    pub geo_location: Option<String>,
    /// Image title, CDATA-wrapped
    pub title: Option<String>,
    /// License URL, CDATA-wrapped
    pub license: Option<String>,
}

/// Alternate language/region variant of a page
///
/// Emitted as a self-closing `<xhtml:link rel="alternate" …/>`
/// annotation, with a `media` attribute when present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlternateLink {
    /// Target URL of the variant
    pub href: String,
    /// Media query the variant applies to (e.g., "only screen and (max-width: 640px)")
    pub media: Option<String>,
}

impl AlternateLink {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            media: None,
        }
    }

    /// Set the media query attribute
    #[must_use]
    pub fn media(mut self, media: impl Into<String>) -> Self {
        self.media = Some(media.into());
        self
    }
}

/// Options bag for one URL record
///
/// Unset fields fall back to the session defaults configured on the
/// writer; set fields win wholesale. The fallback is per field, not a
/// deep merge: a per-record [`NewsOptions`] fully replaces a default
/// one rather than combining field by field.
#[must_use]
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EntryOptions {
    /// Last modification date
    pub last_modified: Option<LastModified>,
    /// Page change frequency
    pub change_frequency: Option<ChangeFrequency>,
    /// Search priority in 0..1, emitted verbatim without clamping
    pub priority: Option<String>,
    /// Google News extension block
    pub news: Option<NewsOptions>,
    /// Image extension blocks, one per image, in order
    ///
    /// `Some(vec![])` counts as set and therefore suppresses any
    /// default image list while emitting nothing.
    pub images: Option<Vec<ImageOptions>>,
    /// Alternate language/region link
    pub alternate: Option<AlternateLink>,
}

impl EntryOptions {
    /// Create an empty options bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the last modification date (date string or Unix timestamp)
    pub fn last_modified(mut self, value: impl Into<LastModified>) -> Self {
        self.last_modified = Some(value.into());
        self
    }

    /// Set the page change frequency
    pub fn change_frequency(mut self, freq: ChangeFrequency) -> Self {
        self.change_frequency = Some(freq);
        self
    }

    /// Set the search priority
    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Attach a Google News block
    pub fn news(mut self, news: NewsOptions) -> Self {
        self.news = Some(news);
        self
    }

    /// Attach image blocks
    pub fn images(mut self, images: Vec<ImageOptions>) -> Self {
        self.images = Some(images);
        self
    }

    /// Attach an alternate link
    pub fn alternate(mut self, alternate: AlternateLink) -> Self {
        self.alternate = Some(alternate);
        self
    }

    /// Fill unset fields from `defaults`, keeping set fields as-is
    pub fn overlay(mut self, defaults: &EntryOptions) -> Self {
        if self.last_modified.is_none() {
            self.last_modified = defaults.last_modified.clone();
        }
        if self.change_frequency.is_none() {
            self.change_frequency = defaults.change_frequency;
        }
        if self.priority.is_none() {
            self.priority = defaults.priority.clone();
        }
        if self.news.is_none() {
            self.news = defaults.news.clone();
        }
        if self.images.is_none() {
            self.images = defaults.images.clone();
        }
        if self.alternate.is_none() {
            self.alternate = defaults.alternate.clone();
        }
        self
    }
}
