//! Application model - the complete state of a hosted page
//!
//! Following the Elm Architecture pattern, the model owns the host document
//! and the highlighter state; `update` is the only thing that mutates it.

use crate::config::HighlightConfig;
use crate::dom::Document;
use crate::highlight::{HoverHighlighter, HoverState};

/// A page with its hover behavior
#[derive(Debug, Clone)]
pub struct PageModel {
    pub document: Document,
    pub highlighter: HoverHighlighter,
    pub config: HighlightConfig,
}

impl PageModel {
    pub fn new(document: Document, config: HighlightConfig) -> Self {
        Self {
            highlighter: HoverHighlighter::new(&config),
            document,
            config,
        }
    }

    /// Number of wired elements currently hovered
    pub fn hovered_count(&self) -> usize {
        self.highlighter
            .wired()
            .iter()
            .filter(|&&id| self.highlighter.state(id) == Some(HoverState::Hovered))
            .count()
    }
}
