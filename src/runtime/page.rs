//! The hosted page: delivers host signals into the update loop
//!
//! Mirrors what a browser does for the highlighter: one load signal, then
//! pointer events dispatched to whatever listeners the target carries.

use crate::commands::Cmd;
use crate::config::HighlightConfig;
use crate::dom::{html, Document, NodeId, PointerEventKind};
use crate::highlight::HoverHighlighter;
use crate::messages::{LifecycleMsg, Msg};
use crate::model::PageModel;
use crate::update::update;

use super::mouse::PointerTracker;

#[derive(Debug, Clone)]
pub struct Page {
    model: PageModel,
    pointer: PointerTracker,
}

impl Page {
    pub fn new(document: Document, config: HighlightConfig) -> Self {
        Self {
            model: PageModel::new(document, config),
            pointer: PointerTracker::new(),
        }
    }

    /// Parse markup into a page (not yet loaded)
    pub fn from_html(markup: &str, config: HighlightConfig) -> Result<Self, String> {
        Ok(Self::new(html::parse_document(markup)?, config))
    }

    pub fn model(&self) -> &PageModel {
        &self.model
    }

    pub fn document(&self) -> &Document {
        &self.model.document
    }

    pub fn highlighter(&self) -> &HoverHighlighter {
        &self.model.highlighter
    }

    /// Feed a message straight into the update loop
    pub fn send(&mut self, msg: Msg) -> Cmd {
        update(&mut self.model, msg).unwrap_or_default()
    }

    /// Fire the load-complete signal
    pub fn load(&mut self) -> Cmd {
        self.send(Msg::Lifecycle(LifecycleMsg::DocumentLoaded))
    }

    /// Deliver a host event to the target's listeners
    pub fn dispatch(&mut self, target: NodeId, kind: PointerEventKind) -> Cmd {
        let msgs = self.model.document.dispatch(target, kind);
        tracing::trace!(
            node = target.index(),
            event = kind.dom_name(),
            listeners = msgs.len(),
            "Dispatching pointer event"
        );
        let cmds = msgs
            .into_iter()
            .filter_map(|msg| update(&mut self.model, msg))
            .collect();
        Cmd::batch(cmds)
    }

    pub fn pointer_enter(&mut self, target: NodeId) -> Cmd {
        self.dispatch(target, PointerEventKind::Enter)
    }

    pub fn pointer_leave(&mut self, target: NodeId) -> Cmd {
        self.dispatch(target, PointerEventKind::Leave)
    }

    /// Move the pointer over `target` (`None` = off the page), dispatching
    /// the resulting enter/leave events
    pub fn pointer_move(&mut self, target: Option<NodeId>) -> Cmd {
        let events = self.pointer.move_to(&self.model.document, target);
        let cmds = events
            .into_iter()
            .map(|(id, kind)| self.dispatch(id, kind))
            .collect();
        Cmd::batch(cmds)
    }

    /// Insert markup under `parent`, as page scripts might after load
    pub fn insert_html(&mut self, parent: NodeId, markup: &str) -> Result<Vec<NodeId>, String> {
        html::parse_into(&mut self.model.document, parent, markup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Selector;

    #[test]
    fn test_events_before_load_do_nothing() {
        let mut page =
            Page::from_html(r#"<div class="post">x</div>"#, HighlightConfig::default()).unwrap();
        let post = page.document().query_selector(&Selector::class("post")).unwrap();
        assert_eq!(page.pointer_enter(post), Cmd::None);
        assert_eq!(
            page.document().element(post).unwrap().style().background_color(),
            None
        );
    }

    #[test]
    fn test_enter_returns_restyle() {
        let mut page =
            Page::from_html(r#"<div class="post">x</div>"#, HighlightConfig::default()).unwrap();
        assert_eq!(page.load(), Cmd::None);
        let post = page.highlighter().wired()[0];
        assert_eq!(page.pointer_enter(post), Cmd::Restyle(vec![post]));
    }

    #[test]
    fn test_load_with_neutral_restyles_all() {
        let config = HighlightConfig {
            apply_neutral_on_load: true,
            ..HighlightConfig::default()
        };
        let mut page = Page::from_html(
            r#"<div class="post">a</div><div class="post">b</div>"#,
            config,
        )
        .unwrap();
        let cmd = page.load();
        assert_eq!(cmd.restyled_nodes(), page.highlighter().wired().to_vec());
        assert_eq!(page.load(), Cmd::None);
    }
}
