//! Login view: pick a display name and start the chat session.

use leptos::prelude::*;

use crate::app::{ChatLink, start_session};
use crate::state::bootstrap::BootstrapState;
use crate::state::session::SessionState;

/// Name prompt. Blank submissions are ignored without feedback; the first
/// accepted name replaces this view with the chat view for good.
#[component]
pub fn LoginPage() -> impl IntoView {
    let bootstrap = expect_context::<RwSignal<BootstrapState>>();
    let session = expect_context::<RwSignal<Option<SessionState>>>();
    let link = expect_context::<RwSignal<ChatLink>>();

    let name = RwSignal::new(String::new());
    let name_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = name_ref.get() {
                if let Err(e) = el.focus() {
                    leptos::logging::debug_warn!("name field focus failed: {e:?}");
                }
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let raw = name.get_untracked();
        let accepted = bootstrap.try_update(|b| b.confirm(&raw)).flatten();
        if let Some(display_name) = accepted {
            start_session(display_name, session, link);
        }
    };

    view! {
        <div class="login-page" id="login">
            <form class="login-form" on:submit=on_submit>
                <label class="login-form__label" for="nameInput">"Choose a name"</label>
                <input
                    id="nameInput"
                    class="login-input"
                    type="text"
                    autocomplete="off"
                    node_ref=name_ref
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </form>
        </div>
    }
}
