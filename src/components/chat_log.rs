//! Output view: every rendered line of the session.
//!
//! Line text is inserted as a text node, so markup in remote messages is
//! displayed literally rather than parsed.

use leptos::prelude::*;

use crate::state::session::{ChatLine, LineOrigin, SessionState};

/// Scrolling list of chat lines, keyed by line id.
#[component]
pub fn ChatLog() -> impl IntoView {
    let session = expect_context::<RwSignal<Option<SessionState>>>();
    let log_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest line in view.
    Effect::new(move || {
        session.track();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = log_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let lines = move || session.with(|s| s.as_ref().map(|s| s.lines.clone()).unwrap_or_default());

    view! {
        <div class="chat-log" id="output" node_ref=log_ref>
            <For
                each=lines
                key=|line: &ChatLine| line.id.clone()
                children=|line: ChatLine| view! { <ChatLineRow line/> }
            />
        </div>
    }
}

#[component]
fn ChatLineRow(line: ChatLine) -> impl IntoView {
    let class = match line.origin {
        LineOrigin::Remote => "chat-line chat-line--remote",
        LineOrigin::System => "chat-line chat-line--system",
    };

    view! {
        {line.separated.then(|| view! { <hr class="chat-line__separator"/> })}
        <p class=class>{line.text}</p>
    }
}
