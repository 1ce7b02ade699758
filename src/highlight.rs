//! Post hover highlighting
//!
//! At load time the highlighter takes a snapshot of every element matching
//! its selector and registers an enter and a leave listener on each. Hover
//! state is tracked per element and the inline `background-color` is
//! always derived from that state.
//!
//! Elements added to the document after the snapshot are never wired.

use std::collections::HashMap;

use serde::Serialize;

use crate::color::CssColor;
use crate::config::HighlightConfig;
use crate::dom::{Document, Listener, NodeId, PointerEventKind, Selector};
use crate::messages::Msg;

/// The only style property the highlighter writes
pub const BACKGROUND_COLOR: &str = "background-color";

/// Per-element hover state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverState {
    /// Pointer is outside the element
    #[default]
    Neutral,
    /// Pointer is within the element
    Hovered,
}

/// Wires hover reactions onto post elements and applies their styles
#[derive(Debug, Clone)]
pub struct HoverHighlighter {
    selector: Selector,
    hover_color: CssColor,
    neutral_color: CssColor,
    apply_neutral_on_load: bool,
    /// Snapshot taken at attach time, in document order
    wired: Vec<NodeId>,
    states: HashMap<NodeId, HoverState>,
    attached: bool,
}

impl HoverHighlighter {
    pub fn new(config: &HighlightConfig) -> Self {
        Self {
            selector: config.selector.clone(),
            hover_color: config.hover_color,
            neutral_color: config.neutral_color,
            apply_neutral_on_load: config.apply_neutral_on_load,
            wired: Vec::new(),
            states: HashMap::new(),
            attached: false,
        }
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Snapshot matching elements and register their listeners
    ///
    /// Runs once; later calls leave the document untouched and return an
    /// empty slice. Returns the newly wired elements in document order.
    pub fn attach(&mut self, doc: &mut Document) -> &[NodeId] {
        if self.attached {
            tracing::debug!("Highlighter already attached, ignoring repeated load");
            return &[];
        }
        self.attached = true;

        self.wired = doc.query_selector_all(&self.selector);
        for &id in &self.wired {
            doc.add_event_listener(id, Listener::new(PointerEventKind::Enter, Msg::pointer_enter));
            doc.add_event_listener(id, Listener::new(PointerEventKind::Leave, Msg::pointer_leave));
            self.states.insert(id, HoverState::Neutral);
            if self.apply_neutral_on_load {
                self.apply(doc, id, HoverState::Neutral);
            }
        }

        tracing::debug!(
            selector = %self.selector,
            count = self.wired.len(),
            "Wired hover listeners"
        );
        &self.wired
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Elements wired at attach time, in document order
    pub fn wired(&self) -> &[NodeId] {
        &self.wired
    }

    pub fn is_wired(&self, id: NodeId) -> bool {
        self.states.contains_key(&id)
    }

    /// Current hover state; `None` for elements that were never wired
    pub fn state(&self, id: NodeId) -> Option<HoverState> {
        self.states.get(&id).copied()
    }

    /// Background color shown in a given state
    pub fn background_for(&self, state: HoverState) -> CssColor {
        match state {
            HoverState::Neutral => self.neutral_color,
            HoverState::Hovered => self.hover_color,
        }
    }

    /// Pointer entered a wired element. Returns false for unwired elements.
    pub fn enter(&mut self, doc: &mut Document, id: NodeId) -> bool {
        self.transition(doc, id, HoverState::Hovered)
    }

    /// Pointer left a wired element. Returns false for unwired elements.
    pub fn leave(&mut self, doc: &mut Document, id: NodeId) -> bool {
        self.transition(doc, id, HoverState::Neutral)
    }

    fn transition(&mut self, doc: &mut Document, id: NodeId, next: HoverState) -> bool {
        let Some(state) = self.states.get_mut(&id) else {
            tracing::trace!(node = id.index(), "Ignoring pointer event on unwired element");
            return false;
        };
        if *state != next {
            tracing::trace!(node = id.index(), from = ?*state, to = ?next, "Hover transition");
        }
        *state = next;
        // Always rewrite: the leave contract holds regardless of prior state
        self.apply(doc, id, next);
        true
    }

    fn apply(&self, doc: &mut Document, id: NodeId, state: HoverState) {
        let color = self.background_for(state).css_text();
        if let Some(element) = doc.element_mut(id) {
            element.style_mut().set(BACKGROUND_COLOR, color);
        }
    }
}
