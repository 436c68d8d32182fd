//! Extension block tests: Google News, images, alternate links

use sitemap_rs::{AlternateLink, EntryOptions, ImageOptions, NewsOptions};

use super::common::{into_xml, writer};

#[test]
fn test_news_block_layout() {
    let mut writer = writer();
    writer
        .write_url(
            "http://example.com/news/launch",
            EntryOptions::new().news(NewsOptions {
                name: "The Example Times".to_string(),
                language: "en".to_string(),
                genres: "PressRelease, Blog".to_string(),
                publication_date: "2012-06-28".to_string(),
                title: " Product launched ".to_string(),
                keywords: "product, launch".to_string(),
            }),
        )
        .unwrap();

    let xml = into_xml(writer);
    let news_open = xml.find("<news:news>").unwrap();
    let publication = xml.find("<news:publication>").unwrap();
    let genres = xml.find("<news:genres>PressRelease, Blog</news:genres>").unwrap();
    let date = xml
        .find("<news:publication_date>2012-06-28</news:publication_date>")
        .unwrap();
    assert!(news_open < publication);
    assert!(publication < genres);
    assert!(genres < date);
    assert!(xml.contains("<news:name>The Example Times</news:name>"));
    assert!(xml.contains("<news:language>en</news:language>"));
    // Title/keywords are trimmed and CDATA-wrapped.
    assert!(xml.contains("<news:title><![CDATA[Product launched]]></news:title>"));
    assert!(xml.contains("<news:keywords><![CDATA[product, launch]]></news:keywords>"));
}

#[test]
fn test_cdata_text_is_not_entity_escaped() {
    let mut writer = writer();
    writer
        .write_url(
            "http://example.com/news/markup",
            EntryOptions::new().news(NewsOptions {
                name: "Wire".to_string(),
                language: "en".to_string(),
                genres: "Satire".to_string(),
                publication_date: "2012-06-28".to_string(),
                title: "<markup> & ampersands".to_string(),
                keywords: "a < b".to_string(),
            }),
        )
        .unwrap();

    let xml = into_xml(writer);
    assert!(xml.contains("<news:title><![CDATA[<markup> & ampersands]]></news:title>"));
    assert!(xml.contains("<news:keywords><![CDATA[a < b]]></news:keywords>"));
    assert!(!xml.contains("&amp;"));
    assert!(!xml.contains("&lt;"));
}

#[test]
fn test_image_scenario() {
    let mut writer = writer();
    writer
        .write_url(
            "http://example.com/a",
            EntryOptions::new().images(vec![ImageOptions {
                location: Some("http://example.com/a.jpg".to_string()),
                ..ImageOptions::default()
            }]),
        )
        .unwrap();

    assert!(writer.has_image_content());
    let xml = into_xml(writer);
    assert!(xml.contains(
        "<image:image>\n   <image:loc><![CDATA[http://example.com/a.jpg]]></image:loc>\n</image:image>"
    ));
}

#[test]
fn test_image_full_block() {
    let mut writer = writer();
    writer
        .write_url(
            "http://example.com/gallery",
            EntryOptions::new().images(vec![ImageOptions {
                location: Some("http://example.com/photo.jpg".to_string()),
                caption: Some("Sunset over the bay".to_string()),
                geo_location: Some("Limerick, Ireland".to_string()),
                title: Some("Sunset".to_string()),
                license: Some("http://example.com/license".to_string()),
            }]),
        )
        .unwrap();

    let xml = into_xml(writer);
    assert!(xml.contains("<image:loc><![CDATA[http://example.com/photo.jpg]]></image:loc>"));
    assert!(xml.contains("<image:caption><![CDATA[Sunset over the bay]]></image:caption>"));
    // geo_location is the one verbatim (non-CDATA) image field.
    assert!(xml.contains("<image:geo_location>Limerick, Ireland</image:geo_location>"));
    assert!(xml.contains("<image:title><![CDATA[Sunset]]></image:title>"));
    assert!(xml.contains("<image:license><![CDATA[http://example.com/license]]></image:license>"));
}

#[test]
fn test_multiple_images_in_order() {
    let mut writer = writer();
    let images = (1..=3)
        .map(|i| ImageOptions {
            location: Some(format!("http://example.com/{i}.jpg")),
            ..ImageOptions::default()
        })
        .collect();
    writer
        .write_url("http://example.com/", EntryOptions::new().images(images))
        .unwrap();

    let xml = into_xml(writer);
    assert_eq!(xml.matches("<image:image>").count(), 3);
    let first = xml.find("1.jpg").unwrap();
    let second = xml.find("2.jpg").unwrap();
    let third = xml.find("3.jpg").unwrap();
    assert!(first < second && second < third);
}

#[test]
fn test_empty_image_list_does_not_flag_document() {
    let mut writer = writer();
    writer
        .write_url("http://example.com/", EntryOptions::new().images(vec![]))
        .unwrap();

    assert!(!writer.has_image_content());
    let xml = into_xml(writer);
    assert!(!xml.contains("image:"));
}

#[test]
fn test_alternate_link_with_and_without_media() {
    let mut writer = writer();
    writer
        .write_url(
            "http://example.com/page",
            EntryOptions::new().alternate(AlternateLink::new("http://example.com/de/page")),
        )
        .unwrap();
    writer
        .write_url(
            "http://example.com/page",
            EntryOptions::new().alternate(
                AlternateLink::new("http://m.example.com/page")
                    .media("only screen and (max-width: 640px)"),
            ),
        )
        .unwrap();

    let xml = into_xml(writer);
    assert!(xml.contains("<xhtml:link rel=\"alternate\" href=\"http://example.com/de/page\" />"));
    assert!(xml.contains(
        "<xhtml:link rel=\"alternate\" media=\"only screen and (max-width: 640px)\" \
         href=\"http://m.example.com/page\" />"
    ));
}

#[test]
fn test_alternate_emitted_after_extension_blocks() {
    let mut writer = writer();
    writer
        .write_url(
            "http://example.com/",
            EntryOptions::new()
                .images(vec![ImageOptions {
                    location: Some("http://example.com/a.jpg".to_string()),
                    ..ImageOptions::default()
                }])
                .alternate(AlternateLink::new("http://example.com/en/")),
        )
        .unwrap();

    let xml = into_xml(writer);
    let image = xml.find("<image:image>").unwrap();
    let alternate = xml.find("<xhtml:link").unwrap();
    assert!(image < alternate);
}
