//! UI message handlers (panels, status expiry)

use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::{AppModel, Panel};

/// Handle UI messages
pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::Tick => {
            // Expiry shows up on the next redraw; a tick never prints by itself
            model.ui.expire_transient();
            None
        }

        UiMsg::ShowDocument => {
            model.ui.panel = Panel::Document;
            Some(Cmd::Redraw)
        }

        UiMsg::ShowEntities => {
            model.ui.panel = Panel::Entities;
            Some(Cmd::Redraw)
        }

        UiMsg::ShowHelp => {
            model.ui.panel = Panel::Help;
            Some(Cmd::Redraw)
        }

        UiMsg::ShowLogFile => {
            match crate::config_paths::log_file() {
                Some(path) => model.ui.set_status(format!("Log file: {}", path.display())),
                None => model.ui.set_status("No log directory available"),
            }
            model.ui.panel = Panel::Document;
            Some(Cmd::Redraw)
        }

        UiMsg::InputError(message) => {
            model.ui.set_status(message);
            model.ui.panel = Panel::Document;
            Some(Cmd::Redraw)
        }
    }
}
