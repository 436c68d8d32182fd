#![doc = include_str!("../README.md")]

mod error;
/// Per-record XML fragment assembly
mod fragment;
/// Typed per-entry options for URL records
pub mod options;
/// External file lifecycle contract and a std::io sink
pub mod sink;
/// Field-value validation helpers (opt-in; the writer never validates)
pub mod validation;
/// Document-level writer and session configuration
pub mod writer;

pub use error::{Result, SitemapError};
pub use options::{
    AlternateLink, ChangeFrequency, EntryOptions, ImageOptions, LastModified, NewsOptions,
    CHANGE_FREQUENCIES,
};
pub use sink::{Route, SitemapSink, StreamSink, UrlEntry};
pub use writer::{
    SitemapConfig, SitemapWriter, XMLNS_IMAGE, XMLNS_NEWS, XMLNS_SITEMAP, XMLNS_XHTML,
};
