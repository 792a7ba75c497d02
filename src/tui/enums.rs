//! Enumerations for window state management.

/// Which screen layer is active.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AppState {
    Main,
    Search,
    Confirm,
    Message,
}

/// Which widget on the main screen receives keys.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Focus {
    Title,
    Due,
    List,
}

impl Focus {
    pub fn next(self) -> Focus {
        match self {
            Focus::Title => Focus::Due,
            Focus::Due => Focus::List,
            Focus::List => Focus::Title,
        }
    }

    pub fn prev(self) -> Focus {
        match self {
            Focus::Title => Focus::List,
            Focus::Due => Focus::Title,
            Focus::List => Focus::Due,
        }
    }
}

/// Tone of a modal message, used for its title and color.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MessageKind {
    InputError,
    Error,
    Info,
    Found,
    NotFound,
}

impl MessageKind {
    pub fn title(self) -> &'static str {
        match self {
            MessageKind::InputError => "Input Error",
            MessageKind::Error => "Error",
            MessageKind::Info => "Info",
            MessageKind::Found => "Task Found",
            MessageKind::NotFound => "Not Found",
        }
    }
}

/// A modal message waiting to be dismissed.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}
