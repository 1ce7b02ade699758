//! Pointer enter/leave handlers

use crate::commands::Cmd;
use crate::messages::PointerMsg;
use crate::model::PageModel;

/// Handle pointer messages emitted by element listeners
pub fn update_pointer(model: &mut PageModel, msg: PointerMsg) -> Option<Cmd> {
    let (id, changed) = match msg {
        PointerMsg::Enter(id) => (id, model.highlighter.enter(&mut model.document, id)),
        PointerMsg::Leave(id) => (id, model.highlighter.leave(&mut model.document, id)),
    };
    changed.then(|| Cmd::Restyle(vec![id]))
}
