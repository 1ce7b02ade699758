//! Pointer tracking with DOM enter/leave semantics
//!
//! Hosts that only report the element under the pointer get enter/leave
//! sequences from here. Moving between descendants of one element does not
//! leave that element, so a post stays hovered while the pointer crosses
//! its title, body and links.

use crate::dom::{Document, NodeId, PointerEventKind};

/// Remembers which element the pointer is over
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    current: Option<NodeId>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Element currently under the pointer
    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    /// Move the pointer to `target` (`None` = outside the page)
    ///
    /// Returns the events to dispatch, in order: leaves for elements no
    /// longer containing the pointer (innermost first), then enters for
    /// elements newly containing it (outermost first).
    pub fn move_to(
        &mut self,
        doc: &Document,
        target: Option<NodeId>,
    ) -> Vec<(NodeId, PointerEventKind)> {
        if target == self.current {
            return Vec::new();
        }

        let old_chain = self.current.map(|id| chain(doc, id)).unwrap_or_default();
        let new_chain = target.map(|id| chain(doc, id)).unwrap_or_default();

        let leaves = old_chain
            .iter()
            .filter(|id| !new_chain.contains(id))
            .map(|&id| (id, PointerEventKind::Leave));
        let enters = new_chain
            .iter()
            .rev()
            .filter(|id| !old_chain.contains(id))
            .map(|&id| (id, PointerEventKind::Enter));
        let events = leaves.chain(enters).collect();

        self.current = target;
        events
    }
}

/// The element and its element ancestors, innermost first
fn chain(doc: &Document, id: NodeId) -> Vec<NodeId> {
    std::iter::once(id)
        .chain(doc.ancestors(id))
        .filter(|&node| doc.element(node).is_some())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// <section><article class="post"><h2/><p/></article><aside/></section>
    fn tree() -> (Document, NodeId, NodeId, NodeId, NodeId, NodeId) {
        let mut doc = Document::new();
        let section = doc.create_element("section");
        let article = doc.create_element("article");
        let h2 = doc.create_element("h2");
        let p = doc.create_element("p");
        let aside = doc.create_element("aside");
        let root = doc.root();
        doc.append_child(root, section).unwrap();
        doc.append_child(section, article).unwrap();
        doc.append_child(article, h2).unwrap();
        doc.append_child(article, p).unwrap();
        doc.append_child(section, aside).unwrap();
        (doc, section, article, h2, p, aside)
    }

    #[test]
    fn test_enter_from_outside_is_outermost_first() {
        let (doc, section, article, h2, _, _) = tree();
        let mut tracker = PointerTracker::new();
        let events = tracker.move_to(&doc, Some(h2));
        assert_eq!(
            events,
            vec![
                (section, PointerEventKind::Enter),
                (article, PointerEventKind::Enter),
                (h2, PointerEventKind::Enter),
            ]
        );
        assert_eq!(tracker.current(), Some(h2));
    }

    #[test]
    fn test_move_between_descendants_keeps_ancestor() {
        let (doc, _, _, h2, p, _) = tree();
        let mut tracker = PointerTracker::new();
        tracker.move_to(&doc, Some(h2));
        let events = tracker.move_to(&doc, Some(p));
        assert_eq!(
            events,
            vec![(h2, PointerEventKind::Leave), (p, PointerEventKind::Enter)]
        );
    }

    #[test]
    fn test_move_to_sibling_subtree() {
        let (doc, _, article, _, p, aside) = tree();
        let mut tracker = PointerTracker::new();
        tracker.move_to(&doc, Some(p));
        let events = tracker.move_to(&doc, Some(aside));
        assert_eq!(
            events,
            vec![
                (p, PointerEventKind::Leave),
                (article, PointerEventKind::Leave),
                (aside, PointerEventKind::Enter),
            ]
        );
    }

    #[test]
    fn test_leave_page_is_innermost_first() {
        let (doc, section, article, _, _, _) = tree();
        let mut tracker = PointerTracker::new();
        tracker.move_to(&doc, Some(article));
        let events = tracker.move_to(&doc, None);
        assert_eq!(
            events,
            vec![
                (article, PointerEventKind::Leave),
                (section, PointerEventKind::Leave),
            ]
        );
        assert_eq!(tracker.current(), None);
    }

    #[test]
    fn test_same_target_is_silent() {
        let (doc, _, article, _, _, _) = tree();
        let mut tracker = PointerTracker::new();
        tracker.move_to(&doc, Some(article));
        assert!(tracker.move_to(&doc, Some(article)).is_empty());
    }
}
