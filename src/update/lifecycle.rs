//! Page lifecycle handlers

use crate::commands::Cmd;
use crate::messages::LifecycleMsg;
use crate::model::PageModel;

/// Handle lifecycle messages
pub fn update_lifecycle(model: &mut PageModel, msg: LifecycleMsg) -> Option<Cmd> {
    match msg {
        LifecycleMsg::DocumentLoaded => {
            let wired = model.highlighter.attach(&mut model.document).to_vec();
            if model.config.apply_neutral_on_load && !wired.is_empty() {
                Some(Cmd::Restyle(wired))
            } else {
                None
            }
        }
    }
}
