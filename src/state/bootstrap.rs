#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

/// The name a user chats under. Non-empty and fixed for the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    /// Validate a raw name field value. The value is kept exactly as typed;
    /// only the blank check ignores whitespace, so blank input yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw.to_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DisplayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which view the page is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Login,
    Chat(DisplayName),
}

/// One-way login → chat transition for the page.
#[derive(Clone, Debug, Default)]
pub struct BootstrapState {
    pub phase: Phase,
}

impl BootstrapState {
    /// Handle a name confirmation.
    ///
    /// Returns the accepted name exactly once: blank names are ignored, and
    /// once the chat view is active further confirmations do nothing.
    pub fn confirm(&mut self, raw: &str) -> Option<DisplayName> {
        if !self.is_login() {
            return None;
        }
        let name = DisplayName::parse(raw)?;
        self.phase = Phase::Chat(name.clone());
        Some(name)
    }

    pub fn is_login(&self) -> bool {
        self.phase == Phase::Login
    }
}
