//! Pointer events delivered by the host and the listeners that react to them

use crate::messages::Msg;

use super::NodeId;

/// Host-delivered pointer signals
///
/// Neither kind bubbles: a dispatch only reaches listeners registered on
/// the target element itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Pointer moved into the element's bounds
    Enter,
    /// Pointer moved out of the element's bounds
    Leave,
}

impl PointerEventKind {
    /// DOM event name (`mouseenter` / `mouseleave`)
    pub fn dom_name(self) -> &'static str {
        match self {
            PointerEventKind::Enter => "mouseenter",
            PointerEventKind::Leave => "mouseleave",
        }
    }
}

/// A registered reaction: when `kind` fires on the element, emit a message
///
/// Listeners carry no captured state. The message names the element, and
/// all state changes happen in `update`.
#[derive(Debug, Clone, Copy)]
pub struct Listener {
    pub kind: PointerEventKind,
    pub on_event: fn(NodeId) -> Msg,
}

impl Listener {
    pub fn new(kind: PointerEventKind, on_event: fn(NodeId) -> Msg) -> Self {
        Self { kind, on_event }
    }
}
