//! Chat view: the output log above the message input.

use leptos::prelude::*;

use crate::components::{chat_log::ChatLog, message_input::MessageInput};
use crate::state::session::{ConnectionStatus, SessionState};

#[component]
pub fn ChatPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Option<SessionState>>>();

    // Styling hook only. A dropped connection is not reported to the user.
    let status = move || {
        let status = session.with(|s| s.as_ref().map(|s| s.status));
        match status {
            None | Some(ConnectionStatus::Connecting) => "connecting",
            Some(ConnectionStatus::Open) => "open",
            Some(ConnectionStatus::Closed) => "closed",
        }
    };

    view! {
        <section class="chat-page main" data-status=status>
            <ChatLog/>
            <MessageInput/>
        </section>
    }
}
