//! Endpoint derivation from the page address.
//!
//! Only the host (and, when no port is configured, the port) is taken from
//! the page. Its path, query and fragment never leak into the endpoints.
//! Plain `ws` chat without a configured port goes to port 80.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

use url::Url;

use crate::config::ChatConfig;
use crate::error::ChatError;

/// Chat port used for `ws` when none is configured.
pub const DEFAULT_WS_PORT: u16 = 80;

/// The two server addresses a session talks to. Computed once at bootstrap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    /// WebSocket chat route.
    pub chat: Url,
    /// Plain-text user list.
    pub users: Url,
}

/// Derive both endpoints from `page_href`.
///
/// Pages served over `https` get `wss`/`https` endpoints; everything else
/// gets `ws`/`http`. An unset chat port is [`DEFAULT_WS_PORT`] for `ws` and
/// the page's own port for `wss`.
///
/// # Errors
///
/// Fails if the page address does not parse, has no host, or a configured
/// route is not a bare absolute path.
pub fn derive(page_href: &str, config: &ChatConfig) -> Result<Endpoints, ChatError> {
    let page = Url::parse(page_href)?;
    let host = page
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or(ChatError::MissingHost)?;
    let secure = page.scheme() == "https";
    let (ws_scheme, http_scheme) = if secure { ("wss", "https") } else { ("ws", "http") };

    let chat_port = config
        .port
        .or(if secure { page.port() } else { Some(DEFAULT_WS_PORT) });
    let users_port = config.users_port.or(page.port());

    Ok(Endpoints {
        chat: build(ws_scheme, host, chat_port, &config.chat_path)?,
        users: build(http_scheme, host, users_port, &config.users_path)?,
    })
}

/// Read the current page address from `window.location`.
///
/// # Errors
///
/// Returns [`ChatError::Browser`] outside a window context.
#[cfg(feature = "hydrate")]
pub fn page_href() -> Result<String, ChatError> {
    let window = web_sys::window().ok_or_else(|| ChatError::Browser("no window".to_owned()))?;
    window
        .location()
        .href()
        .map_err(|e| ChatError::Browser(format!("location.href: {e:?}")))
}

fn build(scheme: &str, host: &str, port: Option<u16>, route: &str) -> Result<Url, ChatError> {
    validate_route(route)?;
    let authority = match port {
        Some(port) => format!("{host}:{port}"),
        None => host.to_owned(),
    };
    Ok(Url::parse(&format!("{scheme}://{authority}{route}"))?)
}

fn validate_route(route: &str) -> Result<(), ChatError> {
    let bare = route.starts_with('/') && !route.starts_with("//") && !route.contains(['?', '#']);
    if bare {
        Ok(())
    } else {
        Err(ChatError::InvalidRoute(route.to_owned()))
    }
}
