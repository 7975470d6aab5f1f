//! Local state of one todo row.
//!
//! A row mirrors the text and completion flag of its todo and tracks whether
//! it is being edited. User actions mutate that mirror immediately and may
//! yield a [`Command`] for the caller to send to the service.
//!
//! Failed commands are not rolled back: a toggle that the service rejects
//! leaves `completed_local` flipped until the list is reloaded, and a
//! cancelled edit keeps whatever was typed into the buffer.

use crate::models::{Todo, TodoId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOrigin {
    Toggle,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Update {
        id: TodoId,
        text: String,
        is_completed: bool,
        origin: UpdateOrigin,
    },
    Delete {
        id: TodoId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The completion icon was clicked.
    ToggleCompletion,
    /// The "edit" / "submit" button was clicked.
    Primary,
    /// The "delete" / "cancel" button was clicked.
    Secondary,
    /// The edit field changed.
    Input(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemState {
    id: TodoId,
    pub edit_buffer: String,
    pub editing: bool,
    pub completed_local: bool,
}

impl ItemState {
    pub fn new(todo: &Todo) -> Self {
        Self {
            id: todo.id,
            edit_buffer: todo.text.clone(),
            editing: false,
            completed_local: todo.is_completed,
        }
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn dispatch(&mut self, action: Action) -> Option<Command> {
        match action {
            Action::ToggleCompletion => {
                let command = Command::Update {
                    id: self.id,
                    text: self.edit_buffer.clone(),
                    is_completed: !self.completed_local,
                    origin: UpdateOrigin::Toggle,
                };
                self.completed_local = !self.completed_local;
                Some(command)
            }
            Action::Primary if self.editing => Some(Command::Update {
                id: self.id,
                text: self.edit_buffer.clone(),
                is_completed: self.completed_local,
                origin: UpdateOrigin::Submit,
            }),
            Action::Primary => {
                self.editing = true;
                None
            }
            Action::Secondary if self.editing => {
                self.editing = false;
                None
            }
            Action::Secondary => Some(Command::Delete { id: self.id }),
            Action::Input(value) => {
                self.edit_buffer = value;
                None
            }
        }
    }

    /// Local transition once the service has answered `command`.
    pub fn settle(&mut self, command: &Command, succeeded: bool) {
        if let (
            Command::Update {
                origin: UpdateOrigin::Submit,
                ..
            },
            true,
        ) = (command, succeeded)
        {
            self.editing = false;
        }
    }

    pub fn primary_label(&self) -> &'static str {
        if self.editing {
            "submit"
        } else {
            "edit"
        }
    }

    pub fn secondary_label(&self) -> &'static str {
        if self.editing {
            "cancel"
        } else {
            "delete"
        }
    }
}
