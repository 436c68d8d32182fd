//! Per-record XML fragment assembly
//!
//! Builds one `<url>…</url>` block per entry. Field order is fixed:
//! loc, changefreq, lastmod, priority, then the News, Image and
//! alternate-link extension blocks. Free-text extension fields are
//! CDATA-wrapped rather than entity-escaped; everything else is
//! emitted verbatim.

use chrono::DateTime;

use crate::options::{AlternateLink, EntryOptions, ImageOptions, LastModified, NewsOptions};

/// Extension content observed while rendering a fragment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct FragmentFeatures {
    pub news: bool,
    pub images: bool,
}

/// Render the `<url>` block for one resolved URL and its merged options
pub(crate) fn render_entry(url: &str, options: &EntryOptions) -> (String, FragmentFeatures) {
    let mut xml = String::new();
    let mut features = FragmentFeatures::default();

    xml.push_str("<url>\n");
    xml.push_str(&format!("<loc>{url}</loc>\n"));

    if let Some(freq) = options.change_frequency {
        xml.push_str(&format!("<changefreq>{freq}</changefreq>\n"));
    }
    if let Some(lastmod) = &options.last_modified {
        xml.push_str(&format!("<lastmod>{}</lastmod>\n", format_lastmod(lastmod)));
    }
    if let Some(priority) = &options.priority {
        xml.push_str(&format!("<priority>{priority}</priority>\n"));
    }

    if let Some(news) = &options.news {
        features.news = true;
        render_news(&mut xml, news);
    }

    if let Some(images) = &options.images
        && !images.is_empty()
    {
        features.images = true;
        for image in images {
            render_image(&mut xml, image);
        }
    }

    if let Some(alternate) = &options.alternate {
        render_alternate(&mut xml, alternate);
    }

    xml.push_str("</url>\n");

    (xml, features)
}

/// Format a lastmod value for emission
///
/// Timestamps become `YYYY-MM-DD`; date strings pass through verbatim
/// unless they consist solely of decimal digits, in which case they
/// are reinterpreted as a Unix timestamp.
fn format_lastmod(value: &LastModified) -> String {
    match value {
        LastModified::Timestamp(ts) => format_timestamp(*ts),
        LastModified::Date(date) if is_all_digits(date) => date
            .parse::<i64>()
            .map(format_timestamp)
            .unwrap_or_else(|_| date.clone()),
        LastModified::Date(date) => date.clone(),
    }
}

fn format_timestamp(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

fn is_all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

fn cdata(value: &str) -> String {
    format!("<![CDATA[{value}]]>")
}

fn render_news(xml: &mut String, news: &NewsOptions) {
    xml.push_str("<news:news>\n");
    xml.push_str("   <news:publication>\n");
    xml.push_str(&format!("       <news:name>{}</news:name>\n", news.name));
    xml.push_str(&format!(
        "       <news:language>{}</news:language>\n",
        news.language
    ));
    xml.push_str("   </news:publication>\n");
    xml.push_str(&format!("   <news:genres>{}</news:genres>\n", news.genres));
    xml.push_str(&format!(
        "   <news:publication_date>{}</news:publication_date>\n",
        news.publication_date
    ));
    xml.push_str(&format!(
        "   <news:title>{}</news:title>\n",
        cdata(news.title.trim())
    ));
    xml.push_str(&format!(
        "   <news:keywords>{}</news:keywords>\n",
        cdata(news.keywords.trim())
    ));
    xml.push_str("</news:news>\n");
}

fn render_image(xml: &mut String, image: &ImageOptions) {
    xml.push_str("<image:image>\n");
    if let Some(location) = &image.location {
        xml.push_str(&format!("   <image:loc>{}</image:loc>\n", cdata(location)));
    }
    if let Some(caption) = &image.caption {
        xml.push_str(&format!(
            "   <image:caption>{}</image:caption>\n",
            cdata(caption)
        ));
    }
    if let Some(geo_location) = &image.geo_location {
        xml.push_str(&format!(
            "   <image:geo_location>{geo_location}</image:geo_location>\n"
        ));
    }
    if let Some(title) = &image.title {
        xml.push_str(&format!("   <image:title>{}</image:title>\n", cdata(title)));
    }
    if let Some(license) = &image.license {
        xml.push_str(&format!(
            "   <image:license>{}</image:license>\n",
            cdata(license)
        ));
    }
    xml.push_str("</image:image>\n");
}

fn render_alternate(xml: &mut String, alternate: &AlternateLink) {
    match &alternate.media {
        Some(media) => xml.push_str(&format!(
            "<xhtml:link rel=\"alternate\" media=\"{media}\" href=\"{}\" />\n",
            alternate.href
        )),
        None => xml.push_str(&format!(
            "<xhtml:link rel=\"alternate\" href=\"{}\" />\n",
            alternate.href
        )),
    }
}
