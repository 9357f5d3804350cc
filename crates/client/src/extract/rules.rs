//! Lookup table from `<meta>` attributes to `MetaData` fields.

use ogp_core::MetaData;

/// Attribute of a `<meta>` element that carries the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaAttr {
    Name,
    Property,
}

impl MetaAttr {
    pub fn name(self) -> &'static str {
        match self {
            MetaAttr::Name => "name",
            MetaAttr::Property => "property",
        }
    }
}

/// One row of the table: `meta[attr=value]` sets `field` from `content`.
#[derive(Clone, Copy)]
pub struct MetaRule {
    pub attr: MetaAttr,
    pub value: &'static str,
    pub field: fn(&mut MetaData) -> &mut Option<String>,
}

impl std::fmt::Debug for MetaRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "meta[{}={}]", self.attr.name(), self.value)
    }
}

const fn rule(attr: MetaAttr, value: &'static str, field: fn(&mut MetaData) -> &mut Option<String>) -> MetaRule {
    MetaRule { attr, value, field }
}

pub static META_RULES: &[MetaRule] = &[
    rule(MetaAttr::Name, "description", |m| &mut m.description),
    rule(MetaAttr::Property, "og:title", |m| &mut m.open_graph.title),
    rule(MetaAttr::Property, "og:description", |m| &mut m.open_graph.description),
    rule(MetaAttr::Property, "og:site_name", |m| &mut m.open_graph.site_name),
    rule(MetaAttr::Property, "og:type", |m| &mut m.open_graph.kind),
    rule(MetaAttr::Property, "og:url", |m| &mut m.open_graph.url),
    rule(MetaAttr::Property, "og:image", |m| &mut m.open_graph.image),
    rule(MetaAttr::Name, "twitter:title", |m| &mut m.twitter.title),
    rule(MetaAttr::Name, "twitter:description", |m| &mut m.twitter.description),
    rule(MetaAttr::Name, "twitter:card", |m| &mut m.twitter.card),
    rule(MetaAttr::Name, "twitter:image", |m| &mut m.twitter.image),
    rule(MetaAttr::Name, "twitter:site", |m| &mut m.twitter.site),
];
