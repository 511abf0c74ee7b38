//! Chat session state.
//!
//! One `SessionState` exists per page, created when the bootstrapper accepts
//! a name. The socket driver and the view both mutate it through the
//! handler methods below; nothing else holds chat state.
//!
//! CONNECTION LIFECYCLE
//! ====================
//! `Connecting → Open → Closed`. `Closed` is terminal: there is no
//! reconnect, and frames or input arriving afterwards are dropped.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::command::{CLEARED_TEXT, Command, Dispatch, HELP_TEXT};
use crate::state::bootstrap::DisplayName;

/// Connection lifecycle status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Connecting,
    Open,
    Closed,
}

/// Where a rendered line came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineOrigin {
    /// Pushed by the server.
    Remote,
    /// Produced locally in response to a command.
    System,
}

/// One rendered entry in the output view. Never modified after it is appended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatLine {
    pub id: String,
    pub origin: LineOrigin,
    pub text: String,
    /// Whether a separator is drawn before this line.
    pub separated: bool,
}

/// State owned by the chat view for the lifetime of the page.
#[derive(Clone, Debug)]
pub struct SessionState {
    name: DisplayName,
    pub status: ConnectionStatus,
    pub lines: Vec<ChatLine>,
    /// Lines rendered since session start. `/clear` does not reset it.
    rendered: u64,
}

impl SessionState {
    pub fn new(name: DisplayName) -> Self {
        Self {
            name,
            status: ConnectionStatus::Connecting,
            lines: Vec::new(),
            rendered: 0,
        }
    }

    pub fn name(&self) -> &DisplayName {
        &self.name
    }

    pub fn rendered(&self) -> u64 {
        self.rendered
    }

    pub fn is_open(&self) -> bool {
        self.status == ConnectionStatus::Open
    }

    /// The connection opened. Returns the opening frame (the display name)
    /// the first time only.
    pub fn handle_open(&mut self) -> Option<String> {
        if self.status != ConnectionStatus::Connecting {
            return None;
        }
        self.status = ConnectionStatus::Open;
        Some(self.name.as_str().to_owned())
    }

    /// An inbound frame arrived. Rendered verbatim while open; returns
    /// whether it was rendered.
    pub fn handle_frame(&mut self, text: String) -> bool {
        if !self.is_open() {
            return false;
        }
        self.push(LineOrigin::Remote, text);
        true
    }

    /// The connection closed or failed. Returns `false` if it was already
    /// closed.
    pub fn handle_closed(&mut self) -> bool {
        let changed = self.status != ConnectionStatus::Closed;
        self.status = ConnectionStatus::Closed;
        changed
    }

    /// Interpret a confirmed input value, exactly as typed.
    ///
    /// Local commands render their system line here; the caller performs
    /// the side effects for [`Dispatch::FetchUsers`] and [`Dispatch::Send`].
    pub fn dispatch_input(&mut self, raw: &str) -> Dispatch {
        if raw.is_empty() {
            return Dispatch::Ignored;
        }
        match Command::parse(raw) {
            Some(Command::Help) => {
                self.push_system(HELP_TEXT);
                Dispatch::Rendered
            }
            Some(Command::Clear) => {
                self.clear();
                Dispatch::Rendered
            }
            Some(Command::Users) => Dispatch::FetchUsers,
            None if self.is_open() => Dispatch::Send(raw.to_owned()),
            None => Dispatch::Dropped(raw.to_owned()),
        }
    }

    /// Append a locally generated line.
    pub fn push_system(&mut self, text: impl Into<String>) {
        self.push(LineOrigin::System, text.into());
    }

    /// Drop every rendered line and confirm with a single system line.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.push_system(CLEARED_TEXT);
    }

    fn push(&mut self, origin: LineOrigin, text: String) {
        self.lines.push(ChatLine {
            id: uuid::Uuid::new_v4().to_string(),
            origin,
            text,
            separated: self.rendered > 0,
        });
        self.rendered += 1;
    }
}
