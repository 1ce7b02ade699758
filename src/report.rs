//! JSON report of wired posts after a run

use serde::Serialize;

use crate::highlight::HoverState;
use crate::runtime::Page;

/// One wired element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostReport {
    /// Position in the load-time snapshot
    pub index: usize,
    /// Arena index of the element
    pub node: usize,
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub state: HoverState,
    /// Inline `background-color`, if any has been written or was authored
    pub background: Option<String>,
}

/// Summary of a page's hover wiring
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageReport {
    pub selector: String,
    pub hover_color: String,
    pub neutral_color: String,
    pub hovered: usize,
    pub posts: Vec<PostReport>,
    /// Elements matching the selector now that were not wired at load
    pub unwired_matches: usize,
}

impl PageReport {
    pub fn from_page(page: &Page) -> Self {
        let model = page.model();
        let doc = page.document();
        let highlighter = page.highlighter();

        let posts = highlighter
            .wired()
            .iter()
            .enumerate()
            .filter_map(|(index, &id)| {
                let element = doc.element(id)?;
                Some(PostReport {
                    index,
                    node: id.index(),
                    tag: element.tag().to_string(),
                    id: element.id().map(str::to_string),
                    classes: element.classes().to_vec(),
                    state: highlighter.state(id).unwrap_or_default(),
                    background: element.style().background_color().map(str::to_string),
                })
            })
            .collect();

        let unwired_matches = doc
            .query_selector_all(highlighter.selector())
            .into_iter()
            .filter(|&id| !highlighter.is_wired(id))
            .count();

        Self {
            selector: highlighter.selector().to_string(),
            hover_color: model.config.hover_color.css_text(),
            neutral_color: model.config.neutral_color.css_text(),
            hovered: model.hovered_count(),
            posts,
            unwired_matches,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HighlightConfig;

    #[test]
    fn test_report_after_hover() {
        let mut page = Page::from_html(
            r#"<div class="post" id="a">1</div><div class="post">2</div>"#,
            HighlightConfig::default(),
        )
        .unwrap();
        page.load();
        let first = page.highlighter().wired()[0];
        page.pointer_enter(first);

        let report = PageReport::from_page(&page);
        assert_eq!(report.selector, ".post");
        assert_eq!(report.hovered, 1);
        assert_eq!(report.posts.len(), 2);
        assert_eq!(report.posts[0].id.as_deref(), Some("a"));
        assert_eq!(report.posts[0].state, HoverState::Hovered);
        assert_eq!(report.posts[0].background.as_deref(), Some("#e8f5e9"));
        assert_eq!(report.posts[1].state, HoverState::Neutral);
        assert_eq!(report.posts[1].background, None);
        assert_eq!(report.unwired_matches, 0);
    }

    #[test]
    fn test_report_serializes_state_lowercase() {
        let mut page =
            Page::from_html(r#"<p class="post">x</p>"#, HighlightConfig::default()).unwrap();
        page.load();
        let json = serde_json::to_value(PageReport::from_page(&page)).unwrap();
        assert_eq!(json["posts"][0]["state"], "neutral");
        assert_eq!(json["posts"][0]["tag"], "p");
        assert!(json["posts"][0].get("id").is_none());
    }
}
