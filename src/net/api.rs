//! Request/response calls to the chat server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the lookup is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-2xx statuses both come back as [`ChatError`];
//! the view turns them into a system line with [`users_failure_text`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::error::ChatError;

#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), ChatError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ChatError::Status(status))
    }
}

/// System line shown when the user list cannot be fetched.
pub fn users_failure_text(err: &ChatError) -> String {
    format!("Unable to fetch users: {err}")
}

/// `GET` the user list. The body is plain display text and is returned
/// untouched, trailing newline included.
///
/// # Errors
///
/// Returns [`ChatError::Request`] if the request or body read fails, and
/// [`ChatError::Status`] for a non-2xx response.
pub async fn fetch_users(url: &str) -> Result<String, ChatError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| ChatError::Request(e.to_string()))?;
        check_status(resp.status())?;
        resp.text().await.map_err(|e| ChatError::Request(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ChatError::Request(format!("{url}: not available on server")))
    }
}
