//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod lifecycle;
mod pointer;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::PageModel;

#[cfg(debug_assertions)]
use crate::tracing::HoverSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use lifecycle::update_lifecycle;
pub use pointer::update_pointer;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut PageModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut PageModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Lifecycle(m) => update_lifecycle(model, m),
        Msg::Pointer(m) => update_pointer(model, m),
    }
}

#[cfg(debug_assertions)]
fn update_traced(model: &mut PageModel, msg: Msg) -> Option<Cmd> {
    let msg_name = format!("{:?}", msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = HoverSnapshot::from_model(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = HoverSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "hover", %diff, "state changed");
    }

    result
}
