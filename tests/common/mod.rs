//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use posthover::{HighlightConfig, NodeId, Page, Selector};

/// A small blog index: two posts with nested content and a sidebar
pub const BLOG_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
  <main>
    <article class="post" id="first"><h2>Hello</h2><p>First post</p></article>
    <article class="post featured" id="second"><h2>Again</h2><p>Second post</p></article>
  </main>
  <aside class="other">Archive</aside>
</body>
</html>
"#;

/// Parse `html` with the default config and fire the load signal
pub fn loaded_page(html: &str) -> Page {
    loaded_page_with(html, HighlightConfig::default())
}

pub fn loaded_page_with(html: &str, config: HighlightConfig) -> Page {
    let mut page = Page::from_html(html, config).expect("test markup parses");
    page.load();
    page
}

/// First element matching `selector`
pub fn find(page: &Page, selector: &str) -> NodeId {
    let selector = Selector::parse(selector).expect("valid selector");
    page.document()
        .query_selector(&selector)
        .unwrap_or_else(|| panic!("nothing matches {}", selector))
}

/// Inline background-color of an element
pub fn background(page: &Page, id: NodeId) -> Option<String> {
    page.document()
        .element(id)
        .and_then(|e| e.style().background_color())
        .map(str::to_string)
}
