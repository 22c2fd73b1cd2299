//! App message handlers

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;

/// Handle app messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Quit => {
            if model.session.document.is_modified {
                tracing::info!("Quitting with unsaved changes");
            }
            Some(Cmd::Quit)
        }
    }
}
