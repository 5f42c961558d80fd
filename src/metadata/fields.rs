//! Fallback chains for the four citation fields
//!
//! Earlier entries win. Selectors follow what publishers actually emit,
//! including the `property="twitter:*"` spelling some CMSes use in place of
//! the documented `name="twitter:*"`.

use crate::rules::{DefaultValue, Processor, Rule, RuleSet};

/// User selection, then Open Graph, then the plain description meta tag
pub const DESCRIPTION: RuleSet<'static> = RuleSet {
    name: "description",
    rules: &[
        Rule::selection(),
        Rule::attribute(r#"meta[property="og:description"]"#, "content"),
        Rule::attribute(r#"meta[name="description" i]"#, "content"),
    ],
    default: None,
    processors: &[],
};

pub const TITLE: RuleSet<'static> = RuleSet {
    name: "title",
    rules: &[
        Rule::attribute(r#"meta[property="og:title"]"#, "content"),
        Rule::attribute(r#"meta[name="twitter:title"]"#, "content"),
        Rule::attribute(r#"meta[property="twitter:title"]"#, "content"),
        // headline meta used by news publishers
        Rule::attribute(r#"meta[name="hdl"]"#, "content"),
        Rule::text("title"),
    ],
    default: None,
    processors: &[],
};

/// Canonical link, then `og:url`, then the page URL; always made absolute
pub const URL: RuleSet<'static> = RuleSet {
    name: "url",
    rules: &[
        Rule::attribute(r#"link[rel="canonical"]"#, "href"),
        Rule::attribute(r#"meta[property="og:url"]"#, "content"),
    ],
    default: Some(DefaultValue::ContextUrl),
    processors: &[Processor::AbsoluteUrl],
};

pub const PROVIDER: RuleSet<'static> = RuleSet {
    name: "provider",
    rules: &[
        Rule::attribute(r#"meta[property="og:site_name"]"#, "content"),
        Rule::attribute(r#"meta[property="twitter:site"]"#, "content"),
    ],
    default: Some(DefaultValue::ProviderFromHost),
    processors: &[],
};
