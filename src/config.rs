//! Endpoint configuration.
//!
//! The host always comes from the page address; the port and routes are
//! deployment-specific and can be overridden with a JSON meta tag:
//!
//! ```html
//! <meta name="chat-config" content='{"port": 8080, "chat_path": "/ws/chat"}'>
//! ```
//!
//! Missing fields keep their defaults. A missing tag means all defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ChatError;

/// Name of the meta tag that carries the JSON override.
pub const META_NAME: &str = "chat-config";

/// Ports and routes used to build the chat and user-list endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// WebSocket port. `None` means port 80 for `ws` and the page's own
    /// port for `wss`.
    pub port: Option<u16>,
    /// WebSocket route on the page host.
    pub chat_path: String,
    /// User-list port. `None` keeps the page's own port.
    pub users_port: Option<u16>,
    /// User-list route on the page host.
    pub users_path: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            port: None,
            chat_path: "/chat".to_owned(),
            users_port: None,
            users_path: "/users".to_owned(),
        }
    }
}

impl ChatConfig {
    /// Parse a JSON override. Unknown fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::Config`] if `json` is not a valid config object.
    pub fn from_json(json: &str) -> Result<Self, ChatError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load the config from the page's `chat-config` meta tag, falling back
    /// to defaults when the tag is absent or malformed.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let Some(raw) = read_meta_content() else {
                return Self::default();
            };
            match Self::from_json(&raw) {
                Ok(config) => config,
                Err(e) => {
                    leptos::logging::warn!("ignoring {META_NAME} meta tag: {e}");
                    Self::default()
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}

#[cfg(feature = "hydrate")]
fn read_meta_content() -> Option<String> {
    let doc = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{META_NAME}\"]");
    match doc.query_selector(&selector) {
        Ok(Some(el)) => el.get_attribute("content"),
        Ok(None) => None,
        Err(e) => {
            leptos::logging::warn!("meta lookup failed: {e:?}");
            None
        }
    }
}
