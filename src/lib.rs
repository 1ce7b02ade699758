//! posthover - hover highlighting for blog post elements
//!
//! This crate provides a typed host document, a selector-driven
//! `HoverHighlighter`, and the Elm-style update loop that connects host
//! pointer events to inline style changes.

pub mod cli;
pub mod color;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod dom;
pub mod highlight;
pub mod messages;
pub mod model;
pub mod report;
pub mod runtime;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::HighlightConfig;
pub use dom::{Document, NodeId, Selector};
pub use highlight::{HoverHighlighter, HoverState};
pub use messages::Msg;
pub use model::PageModel;
pub use runtime::Page;
