//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod session;
mod ui;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::sync_status_bar;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::SessionSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use session::update_session;
pub use ui::update_ui;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
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
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let result = match msg {
        Msg::Session(m) => session::update_session(model, m),
        Msg::Ui(m) => ui::update_ui(model, m),
        Msg::App(m) => app::update_app(model, m),
    };

    sync_status_bar(model);
    result
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after session state and logs diffs for debugging.
/// Filters out noisy messages like Tick from logging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::UiMsg;

    let is_noisy = matches!(&msg, Msg::Ui(UiMsg::Tick));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = SessionSnapshot::from_session(&model.session);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = SessionSnapshot::from_session(&model.session);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "session", %diff, "state changed");
    }

    model.session.assert_invariants_with_context(&msg_name);

    result
}

/// Get a display name for a message type
///
/// Document text is summarized by length so logs never carry user content.
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    use crate::messages::SessionMsg;

    match msg {
        Msg::Session(SessionMsg::SetText(text)) => {
            format!("Session::SetText({} chars)", text.chars().count())
        }
        Msg::Session(SessionMsg::AppendLine(text)) => {
            format!("Session::AppendLine({} chars)", text.chars().count())
        }
        Msg::Session(SessionMsg::SelectText(text)) => {
            format!("Session::SelectText({} chars)", text.chars().count())
        }
        Msg::Session(SessionMsg::Loaded(Ok((path, content)))) => format!(
            "Session::Loaded({}, {} bytes)",
            path.display(),
            content.len()
        ),
        Msg::Session(m) => format!("Session::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
