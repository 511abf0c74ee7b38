//! Message input: confirms on Enter and runs the command interpreter.

use leptos::prelude::*;

use crate::app::ChatLink;
use crate::command::Dispatch;
use crate::error::ChatError;
use crate::net::api;
use crate::state::session::SessionState;

/// Text field for chat messages and local commands.
#[component]
pub fn MessageInput() -> impl IntoView {
    let session = expect_context::<RwSignal<Option<SessionState>>>();
    let link = expect_context::<RwSignal<ChatLink>>();

    let input = RwSignal::new(String::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = input_ref.get() {
                if let Err(e) = el.focus() {
                    leptos::logging::debug_warn!("message input focus failed: {e:?}");
                }
            }
        }
    });

    let do_send = move || {
        let raw = input.get_untracked();
        let outcome = session
            .try_update(|s| s.as_mut().map(|s| s.dispatch_input(&raw)))
            .flatten()
            .unwrap_or(Dispatch::Ignored);

        match &outcome {
            Dispatch::Send(text) => {
                if !link.with_untracked(|l| l.send(text.clone())) {
                    #[cfg(feature = "hydrate")]
                    leptos::logging::warn!("chat message not queued: no live socket");
                }
            }
            Dispatch::FetchUsers => request_users(session, link),
            Dispatch::Ignored | Dispatch::Rendered | Dispatch::Dropped(_) => {}
        }

        if outcome.clears_input() {
            input.set(String::new());
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="message-input">
            <input
                id="input"
                class="message-input__field"
                type="text"
                autocomplete="off"
                placeholder="Type a message or /help"
                node_ref=input_ref
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
        </div>
    }
}

/// Issue the user-list lookup and render its result as a system line when
/// it completes. Inbound frames may be rendered while it is in flight.
fn request_users(session: RwSignal<Option<SessionState>>, link: RwSignal<ChatLink>) {
    let Some(url) = link.with_untracked(|l| l.users_url().map(ToOwned::to_owned)) else {
        push_system(session, api::users_failure_text(&ChatError::NoEndpoint));
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let text = match api::fetch_users(&url).await {
            Ok(body) => body,
            Err(e) => {
                leptos::logging::warn!("user list lookup failed: {e}");
                api::users_failure_text(&e)
            }
        };
        push_system(session, text);
    });

    #[cfg(not(feature = "hydrate"))]
    drop(url);
}

fn push_system(session: RwSignal<Option<SessionState>>, text: String) {
    session.update(|s| {
        if let Some(s) = s.as_mut() {
            s.push_system(text);
        }
    });
}
