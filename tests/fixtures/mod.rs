//! Shared page fixtures

#![allow(dead_code)]

use page_cite::PageSnapshot;

pub const ARTICLE: &str = r#"<!doctype html>
<html>
<head>
  <title>Headline | Site</title>
  <meta property="og:title" content="Headline">
  <meta property="og:site_name" content="Site">
  <meta property="og:description" content="Summary from Open Graph">
  <link rel="canonical" href="https://site.example/x">
</head>
<body><article><p>Body text.</p></article></body>
</html>"#;

pub const BARE: &str = r#"<!doctype html>
<html><head><title>  Just a title  </title></head><body><p>Nothing else.</p></body></html>"#;

/// Build a page meta section from `(attr, key, content)` triples
pub fn page_with_meta(tags: &[(&str, &str, &str)]) -> String {
    let mut head = String::from("<title>Fallback</title>");
    for (attr, key, content) in tags {
        head.push_str(&format!(r#"<meta {attr}="{key}" content="{content}">"#));
    }
    format!("<!doctype html><html><head>{head}</head><body></body></html>")
}

pub fn snapshot(html: &str, url: &str, selection: Option<&str>) -> PageSnapshot {
    PageSnapshot {
        html: html.to_string(),
        url: url.to_string(),
        selection: selection.map(str::to_string),
    }
}
