//! Hover highlighting behavior over parsed pages

mod common;

use common::{background, find, loaded_page, loaded_page_with, BLOG_PAGE};
use posthover::dom::PointerEventKind;
use posthover::{Cmd, HighlightConfig, HoverState, Page, Selector};

// ========================================================================
// Wiring
// ========================================================================

#[test]
fn test_each_post_gets_enter_and_leave() {
    let page = loaded_page(BLOG_PAGE);
    let doc = page.document();
    let posts = doc.query_selector_all(&Selector::class("post"));
    assert_eq!(posts.len(), 2);
    assert_eq!(page.highlighter().wired(), posts.as_slice());

    for &post in &posts {
        let kinds: Vec<_> = doc.listeners(post).iter().map(|l| l.kind).collect();
        assert_eq!(kinds, vec![PointerEventKind::Enter, PointerEventKind::Leave]);
    }
}

#[test]
fn test_non_matching_elements_have_no_listeners() {
    let page = loaded_page(BLOG_PAGE);
    let doc = page.document();
    let wired = page.highlighter().wired();
    for id in doc.descendants(doc.root()) {
        if !wired.contains(&id) {
            assert!(doc.listeners(id).is_empty(), "node {} has listeners", id.index());
        }
    }
}

#[test]
fn test_page_without_posts_is_noop() {
    let mut page = loaded_page(r#"<div class="other">nothing here</div>"#);
    assert!(page.highlighter().wired().is_empty());
    let other = find(&page, ".other");
    assert_eq!(page.pointer_enter(other), Cmd::None);
    assert_eq!(background(&page, other), None);
}

#[test]
fn test_wired_in_document_order() {
    let page = loaded_page(
        r#"<div class="post" id="a"><div class="post" id="b"></div></div><p class="post" id="c"></p>"#,
    );
    let ids: Vec<_> = page
        .highlighter()
        .wired()
        .iter()
        .map(|&id| page.document().element(id).unwrap().id().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

// ========================================================================
// Enter / leave
// ========================================================================

#[test]
fn test_scenario_post_and_other() {
    let mut page = loaded_page(r#"<div class="post"></div><div class="other"></div>"#);
    let post = find(&page, ".post");
    let other = find(&page, ".other");

    page.pointer_enter(post);
    assert_eq!(background(&page, post).as_deref(), Some("#e8f5e9"));
    assert_eq!(background(&page, other), None);

    page.pointer_leave(post);
    assert_eq!(background(&page, post).as_deref(), Some("white"));
    assert_eq!(background(&page, other), None);
}

#[test]
fn test_leave_from_any_state_is_white() {
    let mut page = loaded_page(r#"<div class="post" style="background-color: red">x</div>"#);
    let post = find(&page, ".post");
    assert_eq!(background(&page, post).as_deref(), Some("red"));

    page.pointer_leave(post);
    assert_eq!(background(&page, post).as_deref(), Some("white"));
    page.pointer_leave(post);
    assert_eq!(background(&page, post).as_deref(), Some("white"));
}

#[test]
fn test_repeated_enters_are_idempotent() {
    let mut page = loaded_page(BLOG_PAGE);
    let post = find(&page, "#first");

    page.pointer_enter(post);
    let once = background(&page, post);
    for _ in 0..5 {
        page.pointer_enter(post);
    }
    assert_eq!(background(&page, post), once);
    assert_eq!(page.highlighter().state(post), Some(HoverState::Hovered));

    page.pointer_leave(post);
    let after_leave = background(&page, post);
    page.pointer_enter(post);
    page.pointer_leave(post);
    assert_eq!(background(&page, post), after_leave);
}

#[test]
fn test_only_background_color_is_written() {
    let mut page =
        loaded_page(r#"<div class="post" style="color: navy; padding: 4px">x</div>"#);
    let post = find(&page, ".post");
    page.pointer_enter(post);

    let style = page.document().element(post).unwrap().style().clone();
    assert_eq!(style.get("color"), Some("navy"));
    assert_eq!(style.get("padding"), Some("4px"));
    assert_eq!(style.len(), 3);
}

#[test]
fn test_hover_does_not_spread_to_other_posts() {
    let mut page = loaded_page(BLOG_PAGE);
    let first = find(&page, "#first");
    let second = find(&page, "#second");
    page.pointer_enter(first);
    assert_eq!(page.highlighter().state(second), Some(HoverState::Neutral));
    assert_eq!(background(&page, second), None);
}

// ========================================================================
// Snapshot semantics
// ========================================================================

#[test]
fn test_posts_inserted_after_load_are_not_wired() {
    let mut page = loaded_page(BLOG_PAGE);
    let main = find(&page, "main");
    let added = page
        .insert_html(main, r#"<article class="post" id="late">Late</article>"#)
        .unwrap();
    let late = added[0];

    assert!(page.document().listeners(late).is_empty());
    assert!(!page.highlighter().is_wired(late));
    assert_eq!(page.pointer_enter(late), Cmd::None);
    assert_eq!(background(&page, late), None);

    let now_matching = page
        .document()
        .query_selector_all(&Selector::class("post"))
        .len();
    assert_eq!(now_matching, 3);
    assert_eq!(page.highlighter().wired().len(), 2);
}

#[test]
fn test_second_load_signal_is_ignored() {
    let mut page = loaded_page(BLOG_PAGE);
    let main = find(&page, "main");
    page.insert_html(main, r#"<article class="post">Late</article>"#)
        .unwrap();
    assert_eq!(page.load(), Cmd::None);
    assert_eq!(page.highlighter().wired().len(), 2);
    let first = find(&page, "#first");
    assert_eq!(page.document().listeners(first).len(), 2);
}

#[test]
fn test_nothing_wired_before_load() {
    let page = Page::from_html(BLOG_PAGE, HighlightConfig::default()).unwrap();
    assert!(!page.highlighter().is_attached());
    let first = find(&page, "#first");
    assert!(page.document().listeners(first).is_empty());
}

// ========================================================================
// Configuration
// ========================================================================

#[test]
fn test_custom_selector() {
    let config = HighlightConfig {
        selector: Selector::parse("article.featured").unwrap(),
        ..HighlightConfig::default()
    };
    let mut page = loaded_page_with(BLOG_PAGE, config);
    let first = find(&page, "#first");
    let second = find(&page, "#second");
    assert_eq!(page.highlighter().wired(), &[second]);

    page.pointer_enter(first);
    assert_eq!(background(&page, first), None);
    page.pointer_enter(second);
    assert_eq!(background(&page, second).as_deref(), Some("#e8f5e9"));
}

#[test]
fn test_apply_neutral_on_load_makes_initial_state_explicit() {
    let config = HighlightConfig {
        apply_neutral_on_load: true,
        ..HighlightConfig::default()
    };
    let page = loaded_page_with(BLOG_PAGE, config);
    for &post in page.highlighter().wired() {
        assert_eq!(background(&page, post).as_deref(), Some("white"));
    }
    assert_eq!(background(&page, find(&page, ".other")), None);
}

#[test]
fn test_default_preserves_authored_background_until_first_leave() {
    let mut page = loaded_page(r#"<div class="post" style="background-color: #fafafa">x</div>"#);
    let post = find(&page, ".post");
    assert_eq!(background(&page, post).as_deref(), Some("#fafafa"));
    page.pointer_enter(post);
    page.pointer_leave(post);
    assert_eq!(background(&page, post).as_deref(), Some("white"));
}
