//! Metadata extraction from HTML.
//!
//! ### Parsing
//! - html5ever via `scraper`, tolerant of malformed markup.
//! - Never fails: input that is not HTML yields an all-absent `MetaData`.
//!
//! ### Fields
//! - `title`: text of the first `<title>`, untrimmed.
//! - `favicon`: `href` of `<link rel="shortcut icon">`.
//! - everything else: `content` of `<meta>` tags matched through [`META_RULES`].
//!
//! When several elements match the same field the last one in document order
//! wins, and a match without the value attribute resets the field to `None`.

pub mod rules;

pub use rules::{META_RULES, MetaAttr, MetaRule};

use ogp_core::MetaData;
use scraper::{ElementRef, Html, Selector};

/// Exact `rel` value recognised as the favicon link.
pub const FAVICON_REL: &str = "shortcut icon";

/// Extract metadata from an HTML document.
pub fn extract_meta(html: &str) -> MetaData {
    let document = Html::parse_document(html);
    let mut meta = MetaData::default();

    meta.title = first_title(&document);

    let link = Selector::parse("link").expect("invalid selector");
    for element in document.select(&link) {
        if element.value().attr("rel") == Some(FAVICON_REL) {
            meta.favicon = element.value().attr("href").map(String::from);
        }
    }

    let meta_tags = Selector::parse("meta").expect("invalid selector");
    for element in document.select(&meta_tags) {
        apply_meta_rules(&mut meta, element);
    }

    meta
}

fn first_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("title").expect("invalid selector");
    document.select(&selector).next().map(|el| el.text().collect::<String>())
}

/// Apply every matching rule to a single `<meta>` element.
fn apply_meta_rules(meta: &mut MetaData, element: ElementRef<'_>) {
    let el = element.value();
    let content = el.attr("content");

    for rule in META_RULES {
        if el.attr(rule.attr.name()) == Some(rule.value) {
            *(rule.field)(meta) = content.map(String::from);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_OGP_HTML: &str = r#"
        <html>
          <head>
            <title>テスト</title>
            <meta name="description" content="テスト">
            <meta property="og:title" content="テスト">
            <meta property="og:description" content="テスト">
            <meta property="og:site_name" content="テスト">
            <meta property="og:type" content="website">
            <meta property="og:url" content="https://example.com">
            <meta property="og:image" content="https://example.com/example.png">
            <meta name="twitter:title" content="テスト">
            <meta name="twitter:description" content="テスト">
            <meta name="twitter:card" content="summary">
            <meta name="twitter:image" content="https://example.com/example.png">
            <meta name="twitter:site" content="@Twitter">
            <link rel="shortcut icon" href="/favicon.ico">
          </head>
          <body>テスト</body>
        </html>
    "#;

    #[test]
    fn test_extract_full_ogp() {
        let meta = extract_meta(FULL_OGP_HTML);

        assert_eq!(meta.title.as_deref(), Some("テスト"));
        assert_eq!(meta.description.as_deref(), Some("テスト"));
        assert_eq!(meta.favicon.as_deref(), Some("/favicon.ico"));

        assert_eq!(meta.open_graph.title.as_deref(), Some("テスト"));
        assert_eq!(meta.open_graph.description.as_deref(), Some("テスト"));
        assert_eq!(meta.open_graph.site_name.as_deref(), Some("テスト"));
        assert_eq!(meta.open_graph.kind.as_deref(), Some("website"));
        assert_eq!(meta.open_graph.url.as_deref(), Some("https://example.com"));
        assert_eq!(meta.open_graph.image.as_deref(), Some("https://example.com/example.png"));

        assert_eq!(meta.twitter.title.as_deref(), Some("テスト"));
        assert_eq!(meta.twitter.description.as_deref(), Some("テスト"));
        assert_eq!(meta.twitter.card.as_deref(), Some("summary"));
        assert_eq!(meta.twitter.image.as_deref(), Some("https://example.com/example.png"));
        assert_eq!(meta.twitter.site.as_deref(), Some("@Twitter"));
    }

    #[test]
    fn test_extract_without_ogp_tags() {
        let html = r#"
            <html>
              <head>
                <title>Plain</title>
                <meta name="description" content="Just a page">
                <meta charset="utf-8">
                <meta name="viewport" content="width=device-width">
              </head>
              <body></body>
            </html>
        "#;
        let meta = extract_meta(html);

        assert_eq!(meta.title.as_deref(), Some("Plain"));
        assert_eq!(meta.description.as_deref(), Some("Just a page"));
        assert!(meta.favicon.is_none());
        assert!(meta.open_graph.is_empty());
        assert!(meta.twitter.is_empty());
    }

    #[test]
    fn test_extract_last_match_wins() {
        let html = r#"
            <head>
              <meta property="og:title" content="first">
              <meta property="og:title" content="second">
              <link rel="shortcut icon" href="/a.ico">
              <link rel="shortcut icon" href="/b.ico">
            </head>
        "#;
        let meta = extract_meta(html);

        assert_eq!(meta.open_graph.title.as_deref(), Some("second"));
        assert_eq!(meta.favicon.as_deref(), Some("/b.ico"));
    }

    #[test]
    fn test_extract_missing_content_is_absent_not_empty() {
        let html = r#"<head><meta property="og:title"><meta name="twitter:card" content=""></head>"#;
        let meta = extract_meta(html);

        assert_eq!(meta.open_graph.title, None);
        assert_eq!(meta.twitter.card.as_deref(), Some(""));
    }

    #[test]
    fn test_extract_later_tag_without_content_resets_field() {
        let html = r#"
            <head>
              <meta name="description" content="kept?">
              <meta name="description">
            </head>
        "#;
        assert_eq!(extract_meta(html).description, None);
    }

    #[test]
    fn test_extract_favicon_rel_must_match_exactly() {
        let html = r#"
            <head>
              <link rel="icon" href="/icon.png">
              <link rel="Shortcut Icon" href="/upper.ico">
              <link rel="stylesheet" href="/style.css">
            </head>
        "#;
        assert!(extract_meta(html).favicon.is_none());
    }

    #[test]
    fn test_extract_favicon_without_href() {
        let html = r#"<head><link rel="shortcut icon" href="/a.ico"><link rel="shortcut icon"></head>"#;
        assert_eq!(extract_meta(html).favicon, None);
    }

    #[test]
    fn test_extract_name_and_property_are_not_interchangeable() {
        let html = r#"
            <head>
              <meta name="og:title" content="wrong attribute">
              <meta property="twitter:card" content="wrong attribute">
              <meta property="description" content="wrong attribute">
            </head>
        "#;
        assert!(extract_meta(html).is_empty());
    }

    #[test]
    fn test_extract_title_preserves_inner_whitespace_and_entities() {
        let html = "<html><head><title>  Tom &amp; Jerry \u{2014} 日本語  </title></head></html>";
        let meta = extract_meta(html);
        assert_eq!(meta.title.as_deref(), Some("  Tom & Jerry \u{2014} 日本語  "));
    }

    #[test]
    fn test_extract_first_title_only() {
        let html = "<html><head><title>Head</title></head><body><svg><title>Icon</title></svg></body></html>";
        assert_eq!(extract_meta(html).title.as_deref(), Some("Head"));
    }

    #[test]
    fn test_extract_malformed_markup() {
        let html = r#"
            <html><head>
              <title>Broken
              <meta property="og:type" content="article">
            <body><div><p>unclosed <custom-tag>
        "#;
        let meta = extract_meta(html);
        assert!(meta.title.is_some());
        assert!(meta.title.as_deref().unwrap_or_default().contains("Broken"));
    }

    #[test]
    fn test_extract_fragment_without_root() {
        let html = r#"<meta property="og:type" content="article"><title>Bare</title>"#;
        let meta = extract_meta(html);
        assert_eq!(meta.open_graph.kind.as_deref(), Some("article"));
        assert_eq!(meta.title.as_deref(), Some("Bare"));
    }

    #[test]
    fn test_extract_meta_in_body_is_read() {
        let html = r#"<html><body><meta name="twitter:site" content="@late"></body></html>"#;
        assert_eq!(extract_meta(html).twitter.site.as_deref(), Some("@late"));
    }

    #[test]
    fn test_extract_empty_input() {
        assert!(extract_meta("").is_empty());
    }

    #[test]
    fn test_extract_non_html_input() {
        assert!(extract_meta("not really html").is_empty());
        assert!(extract_meta("\u{0}\u{1}\u{fffd}binary").is_empty());
        assert!(extract_meta(r#"{"title": "json"}"#).is_empty());
    }
}
