use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const ERROR_TITLE: &str = "Error";
pub const CONFIRM_TITLE: &str = "Confirm";

/// Action bound to a confirmable dialog at request time.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmAction {
    #[default]
    NoAction,
    RemoveItem(Uuid),
    ClearCart,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub enum Dialog {
    #[default]
    Hidden,
    /// Single acknowledgement action.
    Informational { title: String, message: String },
    /// Accept runs `action`, cancel dismisses.
    Confirmable {
        title: String,
        message: String,
        action: ConfirmAction,
    },
}

impl Dialog {
    pub fn error(message: impl Into<String>) -> Self {
        Dialog::Informational {
            title: ERROR_TITLE.to_string(),
            message: message.into(),
        }
    }

    pub fn confirm(message: impl Into<String>, action: ConfirmAction) -> Self {
        Dialog::Confirmable {
            title: CONFIRM_TITLE.to_string(),
            message: message.into(),
            action,
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, Dialog::Hidden)
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Dialog::Hidden => None,
            Dialog::Informational { title, .. } | Dialog::Confirmable { title, .. } => Some(title),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Dialog::Hidden => None,
            Dialog::Informational { message, .. } | Dialog::Confirmable { message, .. } => {
                Some(message)
            }
        }
    }

    /// The bound action, `NoAction` unless the dialog is confirmable.
    pub fn pending_action(&self) -> ConfirmAction {
        match self {
            Dialog::Confirmable { action, .. } => *action,
            _ => ConfirmAction::NoAction,
        }
    }

    /// Label of the button that closes the dialog without running anything.
    pub fn dismiss_label(&self) -> &'static str {
        match self {
            Dialog::Confirmable { .. } => "Cancel",
            _ => "OK",
        }
    }
}
