//! WebSocket driver for the chat session.
//!
//! Opens the connection once, sends the display name as the first frame,
//! renders every inbound frame, and forwards outbound text queued on an
//! unbounded channel. There is no reconnect: when either direction fails
//! the session is marked closed and the task ends.
//!
//! All WebSocket logic is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment.

#[cfg(test)]
#[path = "socket_test.rs"]
mod socket_test;

#[cfg(feature = "hydrate")]
use crate::error::ChatError;
#[cfg(feature = "hydrate")]
use crate::state::session::SessionState;
#[cfg(feature = "hydrate")]
use leptos::prelude::{RwSignal, Update};

/// Text shown for a binary frame. Invalid UTF-8 is replaced, not rejected.
#[cfg(any(test, feature = "hydrate"))]
fn decode_binary(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Open the socket and spawn its lifecycle as a local async task.
///
/// Returns the sender used to queue outbound chat text.
///
/// # Errors
///
/// Returns [`ChatError::Connect`] if the browser refuses to construct the
/// socket (malformed URL, blocked port).
#[cfg(feature = "hydrate")]
pub fn spawn_chat_socket(
    url: &str,
    session: RwSignal<Option<SessionState>>,
) -> Result<futures::channel::mpsc::UnboundedSender<String>, ChatError> {
    use futures::channel::mpsc;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| ChatError::Connect(e.to_string()))?;
    let (tx, rx) = mpsc::unbounded::<String>();

    leptos::task::spawn_local(run_socket(ws, session, rx));

    Ok(tx)
}

/// Drive one connection until either direction stops.
#[cfg(feature = "hydrate")]
async fn run_socket(
    ws: gloo_net::websocket::futures::WebSocket,
    session: RwSignal<Option<SessionState>>,
    mut rx: futures::channel::mpsc::UnboundedReceiver<String>,
) {
    use futures::{Sink, SinkExt, StreamExt};
    use gloo_net::websocket::Message;
    use std::pin::Pin;

    let (mut ws_write, mut ws_read) = ws.split();

    // Outbound: wait for the socket to open, greet with the name, then
    // forward queued chat text in order.
    let send_task = async move {
        let ready = futures::future::poll_fn(|cx| Pin::new(&mut ws_write).poll_ready(cx)).await;
        if let Err(e) = ready {
            leptos::logging::warn!("chat socket failed to open: {e}");
            return;
        }

        let opening = session
            .try_update(|s| s.as_mut().and_then(SessionState::handle_open))
            .flatten();
        let Some(name) = opening else {
            return;
        };
        leptos::logging::log!("chat socket open, joining as {name}");
        if let Err(e) = ws_write.send(Message::Text(name)).await {
            leptos::logging::warn!("chat socket send failed: {e}");
            return;
        }

        while let Some(text) = rx.next().await {
            if let Err(e) = ws_write.send(Message::Text(text)).await {
                leptos::logging::warn!("chat socket send failed: {e}");
                break;
            }
        }
    };

    // Inbound: every frame becomes a remote line, verbatim.
    let recv_task = async move {
        while let Some(msg) = ws_read.next().await {
            let text = match msg {
                Ok(Message::Text(text)) => text,
                Ok(Message::Bytes(bytes)) => decode_binary(&bytes),
                Err(e) => {
                    leptos::logging::warn!("chat socket receive failed: {e}");
                    break;
                }
            };
            session.update(|s| {
                if let Some(s) = s.as_mut() {
                    s.handle_frame(text);
                }
            });
        }
    };

    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    session.update(|s| {
        if let Some(s) = s.as_mut() {
            if s.handle_closed() {
                leptos::logging::log!("chat socket closed");
            }
        }
    });
}
