//! External file lifecycle contract
//!
//! The writer does not manage files. Opening, splitting across size or
//! entry-count limits, closing, and application route resolution all
//! live behind [`SitemapSink`], implemented by the host. [`StreamSink`]
//! covers the common case of a single already-open output stream.

use std::io::Write;

use crate::{Result, SitemapError};

/// Contract the host's file lifecycle manager provides to the writer
///
/// The host is also responsible for invoking the writer's
/// [`on_open`](crate::SitemapWriter::on_open) and
/// [`on_close`](crate::SitemapWriter::on_close) exactly once each,
/// around the record stream.
pub trait SitemapSink {
    /// Write raw bytes to the open output stream, returning the number
    /// of bytes written
    fn write(&mut self, bytes: &[u8]) -> Result<usize>;

    /// Record one more entry toward the sink's accounting
    ///
    /// Called exactly once per serialized record, before the record's
    /// URL is resolved. Sinks that split output across files use this
    /// count to decide when to rotate.
    fn count_entry(&mut self);

    /// Resolve an application route into an absolute URL
    fn resolve_route(&self, route: &Route) -> Result<String>;
}

/// Opaque application route, resolved by the sink into an absolute URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Route path (e.g., "site/contact")
    pub path: String,
    /// Query parameters, in order
    pub params: Vec<(String, String)>,
}

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
        }
    }

    /// Append a query parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }
}

/// URL input for one record: a literal absolute URL or a route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlEntry {
    /// Absolute URL, used verbatim without inspection or escaping
    Absolute(String),
    /// Application route, resolved through [`SitemapSink::resolve_route`]
    Route(Route),
}

impl From<&str> for UrlEntry {
    fn from(url: &str) -> Self {
        UrlEntry::Absolute(url.to_string())
    }
}

impl From<String> for UrlEntry {
    fn from(url: String) -> Self {
        UrlEntry::Absolute(url)
    }
}

impl From<Route> for UrlEntry {
    fn from(route: Route) -> Self {
        UrlEntry::Route(route)
    }
}

/// Sink over a single open [`std::io::Write`] stream
///
/// Counts entries and resolves routes against an optional base URL by
/// plain concatenation; no escaping is applied. Applications with
/// richer routing or file-splitting needs implement [`SitemapSink`]
/// themselves.
#[derive(Debug)]
pub struct StreamSink<W> {
    writer: W,
    base_url: Option<String>,
    entries: u64,
}

impl<W: Write> StreamSink<W> {
    /// Wrap an already-open output stream
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            base_url: None,
            entries: 0,
        }
    }

    /// Set the base URL used to resolve routes
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Number of entries counted so far
    pub fn entries(&self) -> u64 {
        self.entries
    }

    /// Consume the sink, returning the underlying stream
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SitemapSink for StreamSink<W> {
    fn write(&mut self, bytes: &[u8]) -> Result<usize> {
        self.writer.write_all(bytes)?;
        Ok(bytes.len())
    }

    fn count_entry(&mut self) {
        self.entries += 1;
    }

    fn resolve_route(&self, route: &Route) -> Result<String> {
        let base = self.base_url.as_deref().ok_or_else(|| {
            SitemapError::RouteResolution(format!(
                "no base URL configured to resolve route '{}'",
                route.path
            ))
        })?;

        let mut url = format!(
            "{}/{}",
            base.trim_end_matches('/'),
            route.path.trim_start_matches('/')
        );
        for (i, (key, value)) in route.params.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(value);
        }
        Ok(url)
    }
}
