//! Root application component and session start-up.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::pages::{chat::ChatPage, login::LoginPage};
use crate::state::bootstrap::{BootstrapState, DisplayName};
use crate::state::session::SessionState;

/// Outbound half of the session: the socket sender and the user-list URL.
///
/// Empty until the bootstrapper starts a session, and on the server.
#[derive(Clone, Debug, Default)]
pub struct ChatLink {
    #[cfg(feature = "hydrate")]
    tx: Option<futures::channel::mpsc::UnboundedSender<String>>,
    users_url: Option<String>,
}

impl ChatLink {
    /// Queue `text` as an outbound frame. Returns `false` if there is no
    /// live socket to carry it.
    pub fn send(&self, text: String) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.tx
                .as_ref()
                .is_some_and(|tx| tx.unbounded_send(text).is_ok())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            drop(text);
            false
        }
    }

    pub fn users_url(&self) -> Option<&str> {
        self.users_url.as_deref()
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the bootstrap, session and link contexts and swaps the login
/// view for the chat view once a name is accepted.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let bootstrap = RwSignal::new(BootstrapState::default());
    let session = RwSignal::new(None::<SessionState>);
    let link = RwSignal::new(ChatLink::default());

    provide_context(bootstrap);
    provide_context(session);
    provide_context(link);

    view! {
        <Stylesheet id="leptos" href="/pkg/chat-client.css"/>
        <Title text="Chat"/>

        <main class="chat-app">
            {move || {
                if bootstrap.with(BootstrapState::is_login) {
                    view! { <LoginPage/> }.into_any()
                } else {
                    view! { <ChatPage/> }.into_any()
                }
            }}
        </main>
    }
}

/// Open the chat session for an accepted name.
///
/// Endpoints are derived from the page address here, once. If that or the
/// socket construction fails the session is created already closed: local
/// commands still work, chat text goes nowhere.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn start_session(
    name: DisplayName,
    session: RwSignal<Option<SessionState>>,
    link: RwSignal<ChatLink>,
) {
    session.set(Some(SessionState::new(name)));

    #[cfg(feature = "hydrate")]
    {
        let new_link = match connect(session) {
            Ok(new_link) => new_link,
            Err(e) => {
                leptos::logging::warn!("chat session not connected: {e}");
                ChatLink::default()
            }
        };
        if new_link.tx.is_none() {
            session.update(|s| {
                if let Some(s) = s.as_mut() {
                    s.handle_closed();
                }
            });
        }
        link.set(new_link);
    }
}

#[cfg(feature = "hydrate")]
fn connect(session: RwSignal<Option<SessionState>>) -> Result<ChatLink, crate::error::ChatError> {
    use crate::config::ChatConfig;
    use crate::net::{endpoint, socket};

    let config = ChatConfig::from_document();
    let endpoints = endpoint::derive(&endpoint::page_href()?, &config)?;
    let users_url = Some(endpoints.users.to_string());

    leptos::logging::log!("connecting to {}", endpoints.chat);
    let tx = match socket::spawn_chat_socket(endpoints.chat.as_str(), session) {
        Ok(tx) => Some(tx),
        Err(e) => {
            leptos::logging::warn!("{e}");
            None
        }
    };

    Ok(ChatLink { tx, users_url })
}
