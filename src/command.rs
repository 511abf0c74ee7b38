//! Local command interpreter.
//!
//! DESIGN
//! ======
//! Commands are matched by exact, case-sensitive equality against the raw
//! input. There is no prefix or pattern matching: `/help ` (trailing space)
//! and `/Help` are ordinary chat messages.

#[cfg(test)]
#[path = "command_test.rs"]
mod command_test;

/// System line rendered for `/help`.
pub const HELP_TEXT: &str = "Commands: /users, /clear";

/// System line rendered after `/clear` empties the output.
pub const CLEARED_TEXT: &str = "Chat cleared.";

/// The closed set of commands handled locally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Users,
    Clear,
}

impl Command {
    /// Recognize a command from raw input. Returns `None` for anything that
    /// should be forwarded as a chat message.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "/help" => Some(Self::Help),
            "/users" => Some(Self::Users),
            "/clear" => Some(Self::Clear),
            _ => None,
        }
    }

    /// The literal text that triggers this command.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Help => "/help",
            Self::Users => "/users",
            Self::Clear => "/clear",
        }
    }
}

/// What the view has to do after the session handled a confirmed input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// Empty input; nothing happened and the field is left alone.
    Ignored,
    /// A local system line was rendered; the connection was not touched.
    Rendered,
    /// The user list must be fetched and rendered when it arrives.
    FetchUsers,
    /// Forward this text unmodified as an outbound frame.
    Send(String),
    /// A chat message was typed while the connection was not open.
    Dropped(String),
}

impl Dispatch {
    /// Whether the input field is cleared after this outcome.
    pub fn clears_input(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}
