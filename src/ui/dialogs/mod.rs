//! Dialog windows

pub mod confirm;
pub mod new_instance;
pub mod settings;

use crate::core::prompt::Reply;
use crate::core::{CreateInstanceRequest, Settings};

/// State for dialog windows. Replacing or dropping a state that holds a
/// reply cancels the question it was asking.
#[derive(Default)]
pub enum DialogState {
    #[default]
    None,
    NewInstance {
        form: CreateInstanceRequest,
        reply: Reply<CreateInstanceRequest>,
    },
    ConfirmDelete {
        name: String,
        reply: Reply<()>,
    },
    Settings {
        draft: Settings,
    },
}

impl DialogState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Show `next` unless a dialog is already up. Windows are not modal, so
    /// a refused `next` is dropped and the open dialog keeps its reply.
    pub fn open(&mut self, next: DialogState) -> bool {
        if self.is_open() {
            return false;
        }
        *self = next;
        true
    }
}

/// What the user did with a dialog this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Open,
    Submitted,
    Cancelled,
}
