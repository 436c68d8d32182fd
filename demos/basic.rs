//! Basic sitemap writer example
//!
//! Run with: cargo run --example basic

use std::fs::File;
use std::io::{BufWriter, Write};

use sitemap_rs::{
    AlternateLink, ChangeFrequency, EntryOptions, ImageOptions, NewsOptions, Route,
    SitemapConfig, SitemapWriter, StreamSink,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "sitemap.xml".to_string());
    let file = BufWriter::new(File::create(&path)?);

    // Session defaults applied to every record unless overridden,
    // plus an up-front declaration that News/Image entries will come
    // after the header.
    let config = SitemapConfig::new()
        .default_options(
            EntryOptions::new()
                .change_frequency(ChangeFrequency::Daily)
                .priority("0.5"),
        )
        .expect_news(true)
        .expect_images(true);

    let sink = StreamSink::new(file).base_url("http://example.com");
    let mut sitemap = SitemapWriter::with_config(sink, config);

    sitemap.on_open()?;

    // Literal URLs, with and without per-record overrides.
    sitemap.write_url("http://example.com/", EntryOptions::new().priority("1.0"))?;
    sitemap.write_url(
        "http://example.com/about",
        EntryOptions::new()
            .change_frequency(ChangeFrequency::Monthly)
            .last_modified("2024-01-15"),
    )?;

    // Routes are resolved against the sink's base URL.
    sitemap.write_url(Route::new("site/contact"), EntryOptions::new())?;
    sitemap.write_url(
        Route::new("shop/item").param("id", "42"),
        EntryOptions::new().last_modified(1340841600),
    )?;

    // A news article with an attached image and a mobile alternate.
    sitemap.write_url(
        "http://example.com/news/launch",
        EntryOptions::new()
            .news(NewsOptions {
                name: "The Example Times".to_string(),
                language: "en".to_string(),
                genres: "PressRelease".to_string(),
                publication_date: "2024-01-15".to_string(),
                title: "Example launches sitemap-rs".to_string(),
                keywords: "rust, sitemaps, release".to_string(),
            })
            .images(vec![ImageOptions {
                location: Some("http://example.com/news/launch.jpg".to_string()),
                caption: Some("The launch event".to_string()),
                ..ImageOptions::default()
            }])
            .alternate(
                AlternateLink::new("http://m.example.com/news/launch")
                    .media("only screen and (max-width: 640px)"),
            ),
    )?;

    sitemap.on_close()?;

    let entries = sitemap.sink().entries();
    let mut file = sitemap.into_inner().into_inner();
    file.flush()?;
    println!("Wrote {entries} entries to {path}");

    Ok(())
}
