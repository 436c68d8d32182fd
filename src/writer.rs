//! Document-level sitemap writer
//!
//! Owns the per-document feature state and glues record serialization
//! to the host-provided [`SitemapSink`]. The host invokes
//! [`SitemapWriter::on_open`] once before the first record and
//! [`SitemapWriter::on_close`] once after the last; neither method
//! checks invocation order.

use tracing::{debug, trace, warn};

use crate::fragment::{self, FragmentFeatures};
use crate::options::EntryOptions;
use crate::sink::{SitemapSink, UrlEntry};
use crate::Result;

/// sitemaps.org Sitemap 0.9 schema namespace
pub const XMLNS_SITEMAP: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
/// XHTML namespace for alternate-link annotations
pub const XMLNS_XHTML: &str = "http://www.w3.org/1999/xhtml";
/// Google News sitemap extension namespace
pub const XMLNS_NEWS: &str = "http://www.google.com/schemas/sitemap-news/0.9";
/// Google Image sitemap extension namespace
pub const XMLNS_IMAGE: &str = "http://www.google.com/schemas/sitemap-image/1.1";

/// Per-document session configuration
///
/// `expect_news` / `expect_images` pre-set the document feature flags
/// so the root element declares the extension namespaces even when the
/// first News/Image record arrives after [`SitemapWriter::on_open`].
#[must_use]
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SitemapConfig {
    /// Defaults overlaid under every record's options
    pub default_options: EntryOptions,
    /// Declare up front that the document will carry News content
    pub expect_news: bool,
    /// Declare up front that the document will carry Image content
    pub expect_images: bool,
}

impl SitemapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the session default options
    pub fn default_options(mut self, options: EntryOptions) -> Self {
        self.default_options = options;
        self
    }

    /// Declare expected News content
    pub fn expect_news(mut self, expect: bool) -> Self {
        self.expect_news = expect;
        self
    }

    /// Declare expected Image content
    pub fn expect_images(mut self, expect: bool) -> Self {
        self.expect_images = expect;
        self
    }
}

/// Incremental sitemap document writer
///
/// Serializes URL records one at a time into a host-provided sink.
/// The root element's namespace declarations reflect the extension
/// content seen *so far*: a News or Image record serialized before
/// `on_open` (e.g., through a buffering sink) yields a complete
/// header, while one serialized after it leaves the already-written
/// header without the matching namespace declaration. Callers whose
/// extension content arrives mid-stream should declare it via
/// [`SitemapConfig`] instead of relying on ordering; the writer logs a
/// warning when it detects the late case.
pub struct SitemapWriter<S> {
    sink: S,
    defaults: EntryOptions,
    has_news: bool,
    has_images: bool,
    root_open: bool,
}

impl<S: SitemapSink> SitemapWriter<S> {
    /// Create a writer with empty defaults and no declared extensions
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, SitemapConfig::default())
    }

    /// Create a writer from a session configuration
    pub fn with_config(sink: S, config: SitemapConfig) -> Self {
        Self {
            sink,
            defaults: config.default_options,
            has_news: config.expect_news,
            has_images: config.expect_images,
            root_open: false,
        }
    }

    /// Write the `<urlset>` root open tag, returning the bytes written
    ///
    /// Namespace declarations for the News/Image extensions are
    /// included if the corresponding content has been seen or declared
    /// at the moment this runs.
    pub fn on_open(&mut self) -> Result<usize> {
        let mut root = format!("<urlset xmlns=\"{XMLNS_SITEMAP}\" xmlns:xhtml=\"{XMLNS_XHTML}\"");
        if self.has_news {
            root.push_str(&format!(" xmlns:news=\"{XMLNS_NEWS}\""));
        }
        if self.has_images {
            root.push_str(&format!(" xmlns:image=\"{XMLNS_IMAGE}\""));
        }
        root.push('>');

        debug!(
            news = self.has_news,
            images = self.has_images,
            "writing urlset root element"
        );
        self.root_open = true;
        self.sink.write(root.as_bytes())
    }

    /// Write the `</urlset>` root close tag, returning the bytes written
    pub fn on_close(&mut self) -> Result<usize> {
        debug!("closing urlset root element");
        self.sink.write(b"</urlset>")
    }

    /// Serialize one URL record, returning the bytes written
    ///
    /// Counts the entry with the sink first, then resolves route
    /// inputs, overlays the record options over the session defaults,
    /// and writes the assembled `<url>` block. Sink and resolver
    /// errors propagate unchanged.
    pub fn write_url(&mut self, entry: impl Into<UrlEntry>, options: EntryOptions) -> Result<usize> {
        self.sink.count_entry();

        let url = match entry.into() {
            UrlEntry::Absolute(url) => url,
            UrlEntry::Route(route) => self.sink.resolve_route(&route)?,
        };

        let options = options.overlay(&self.defaults);
        let (xml, features) = fragment::render_entry(&url, &options);
        self.note_features(features);

        trace!(url = %url, bytes = xml.len(), "serialized url entry");
        self.sink.write(xml.as_bytes())
    }

    /// Whether a News record has been serialized (or declared) for
    /// this document; never flips back to false
    pub fn has_news_content(&self) -> bool {
        self.has_news
    }

    /// Whether an Image record has been serialized (or declared) for
    /// this document; never flips back to false
    pub fn has_image_content(&self) -> bool {
        self.has_images
    }

    /// Borrow the underlying sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutably borrow the underlying sink
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the writer, returning the sink
    pub fn into_inner(self) -> S {
        self.sink
    }

    fn note_features(&mut self, features: FragmentFeatures) {
        if features.news && !self.has_news {
            if self.root_open {
                warn!("news entry serialized after the root element was written without the news namespace");
            }
            self.has_news = true;
        }
        if features.images && !self.has_images {
            if self.root_open {
                warn!("image entry serialized after the root element was written without the image namespace");
            }
            self.has_images = true;
        }
    }
}
