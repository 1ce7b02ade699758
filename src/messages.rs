//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::dom::NodeId;

/// Page lifecycle signals from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleMsg {
    /// Initial document structure is parsed and available (fires once)
    DocumentLoaded,
}

/// Pointer messages emitted by element listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerMsg {
    /// Pointer entered the element
    Enter(NodeId),
    /// Pointer left the element
    Leave(NodeId),
}

/// Top-level message type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    Lifecycle(LifecycleMsg),
    Pointer(PointerMsg),
}

impl Msg {
    /// Listener target for `mouseenter`
    pub fn pointer_enter(id: NodeId) -> Msg {
        Msg::Pointer(PointerMsg::Enter(id))
    }

    /// Listener target for `mouseleave`
    pub fn pointer_leave(id: NodeId) -> Msg {
        Msg::Pointer(PointerMsg::Leave(id))
    }
}
