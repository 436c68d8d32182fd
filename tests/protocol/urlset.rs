//! Root element tests: namespace declarations and open/close framing

use sitemap_rs::{EntryOptions, NewsOptions, SitemapConfig, XMLNS_IMAGE, XMLNS_NEWS};

use super::common::{into_xml, writer, writer_with_config};

fn news() -> NewsOptions {
    NewsOptions {
        name: "The Example Times".to_string(),
        language: "en".to_string(),
        genres: "Blog".to_string(),
        publication_date: "2012-06-28".to_string(),
        title: "Headline".to_string(),
        keywords: "example".to_string(),
    }
}

#[test]
fn test_plain_document_framing() {
    let mut writer = writer();
    writer.on_open().unwrap();
    writer
        .write_url("http://example.com/", EntryOptions::new())
        .unwrap();
    writer.on_close().unwrap();

    let xml = into_xml(writer);
    assert!(xml.starts_with(
        "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" \
         xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">"
    ));
    assert!(xml.ends_with("</urlset>"));
    // Exactly one root open and one root close.
    assert_eq!(xml.matches("<urlset").count(), 1);
    assert_eq!(xml.matches("</urlset>").count(), 1);
}

#[test]
fn test_default_header_has_no_extension_namespaces() {
    let mut writer = writer();
    writer.on_open().unwrap();

    let xml = into_xml(writer);
    assert!(!xml.contains("xmlns:news"));
    assert!(!xml.contains("xmlns:image"));
}

#[test]
fn test_declared_extensions_appear_in_header() {
    let config = SitemapConfig::new().expect_news(true).expect_images(true);
    let mut writer = writer_with_config(config);
    writer.on_open().unwrap();

    let xml = into_xml(writer);
    assert!(xml.contains(&format!(" xmlns:news=\"{XMLNS_NEWS}\"")));
    assert!(xml.contains(&format!(" xmlns:image=\"{XMLNS_IMAGE}\"")));
    // News namespace is declared before the image namespace.
    assert!(xml.find("xmlns:news").unwrap() < xml.find("xmlns:image").unwrap());
}

#[test]
fn test_header_reflects_content_seen_before_open() {
    let mut writer = writer();
    writer
        .write_url(
            "http://example.com/news/1",
            EntryOptions::new().news(news()),
        )
        .unwrap();
    writer.on_open().unwrap();

    let xml = into_xml(writer);
    assert!(xml.contains("xmlns:news="));
}

#[test]
fn test_header_written_first_misses_later_extensions() {
    // The documented ordering hazard: flags are read once, at open
    // time, so extension content arriving afterwards is not declared.
    let mut writer = writer();
    writer.on_open().unwrap();
    writer
        .write_url(
            "http://example.com/news/1",
            EntryOptions::new().news(news()),
        )
        .unwrap();
    writer.on_close().unwrap();

    assert!(writer.has_news_content());
    let xml = into_xml(writer);
    assert!(!xml.contains("xmlns:news="));
}

#[test]
fn test_open_and_close_return_byte_counts() {
    let mut writer = writer();
    let opened = writer.on_open().unwrap();
    let closed = writer.on_close().unwrap();

    let xml = into_xml(writer);
    assert_eq!(opened + closed, xml.len());
    assert_eq!(closed, "</urlset>".len());
}
