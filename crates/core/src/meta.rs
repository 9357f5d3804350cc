//! The metadata record returned for a fetched page.
//!
//! Every field is `None` until matching markup is found. The source vocabulary
//! distinguishes "never set" from "looked up but missing"; both collapse to `None`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Metadata extracted from a single HTML document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MetaData {
    /// Text content of the first `<title>` element.
    pub title: Option<String>,
    /// `content` of `<meta name="description">`.
    pub description: Option<String>,
    /// `href` of `<link rel="shortcut icon">`, unresolved.
    pub favicon: Option<String>,
    /// Open Graph (`og:*`) properties.
    pub open_graph: OpenGraph,
    /// Twitter Card (`twitter:*`) names.
    pub twitter: Twitter,
}

/// Values of `<meta property="og:*">` tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OpenGraph {
    pub title: Option<String>,
    pub description: Option<String>,
    pub site_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
}

/// Values of `<meta name="twitter:*">` tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Twitter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub card: Option<String>,
    pub image: Option<String>,
    pub site: Option<String>,
}

impl MetaData {
    /// True when no field was populated.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl OpenGraph {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Twitter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Per-call options for `parsed_meta`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ParserOptions {
    /// Origins (`scheme://host[:port]`) a URL must belong to.
    ///
    /// `None` means unrestricted. `Some(vec![])` is a supplied but empty list
    /// and rejects every URL.
    #[serde(default)]
    pub allow_origins: Option<Vec<String>>,
}

impl ParserOptions {
    /// Restrict fetching to the given origins.
    pub fn with_allow_origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_origins = Some(origins.into_iter().map(Into::into).collect());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_absent() {
        let meta = MetaData::default();
        assert!(meta.is_empty());
        assert!(meta.open_graph.is_empty());
        assert!(meta.twitter.is_empty());
        assert!(meta.title.is_none());
        assert!(meta.favicon.is_none());
    }

    #[test]
    fn test_is_empty_detects_nested_field() {
        let meta = MetaData {
            twitter: Twitter { card: Some("summary".into()), ..Default::default() },
            ..Default::default()
        };
        assert!(!meta.is_empty());
        assert!(meta.open_graph.is_empty());
    }

    #[test]
    fn test_serialize_field_names() {
        let meta = MetaData {
            open_graph: OpenGraph { kind: Some("website".into()), ..Default::default() },
            ..Default::default()
        };
        let json = serde_json::to_value(&meta).unwrap();

        assert_eq!(json["open_graph"]["type"], "website");
        assert!(json["open_graph"]["site_name"].is_null());
        assert!(json["title"].is_null());
        assert!(json["twitter"]["site"].is_null());
    }

    #[test]
    fn test_deserialize_round_trip_preserves_non_ascii() {
        let json = r#"{
            "title": "テスト",
            "description": null,
            "favicon": "/favicon.ico",
            "open_graph": {"title": null, "description": null, "site_name": null, "type": null, "url": null, "image": null},
            "twitter": {"title": null, "description": null, "card": "summary", "image": null, "site": "@Twitter"}
        }"#;
        let meta: MetaData = serde_json::from_str(json).unwrap();

        assert_eq!(meta.title.as_deref(), Some("テスト"));
        assert_eq!(meta.twitter.site.as_deref(), Some("@Twitter"));
        assert!(meta.description.is_none());
    }

    #[test]
    fn test_parser_options_builder() {
        let opts = ParserOptions::default().with_allow_origins(["https://example.com"]);
        assert_eq!(opts.allow_origins, Some(vec!["https://example.com".to_string()]));
        assert!(ParserOptions::default().allow_origins.is_none());
    }
}
