//! Authentication context and hooks for the UI.

use api::{ApiClient, Session, SessionStore};
use dioxus::prelude::*;

use crate::icons::FaRightFromBracket;
use crate::{make_session_store, Icon};

/// Get the current session.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Get the store that performs session transitions.
pub fn use_session_store() -> SessionStore {
    use_context::<SessionStore>()
}

/// Shorthand for the API client behind the session store.
pub fn use_api() -> ApiClient {
    use_session_store().client().clone()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
///
/// On mount the persisted session is restored synchronously, then confirmed
/// with the backend in the background.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let sessions = use_context_provider(make_session_store);
    let mut session = use_context_provider({
        let sessions = sessions.clone();
        move || Signal::new(sessions.restore())
    });

    // Validate the restored token once
    let _validator = use_resource(move || {
        let sessions = sessions.clone();
        async move {
            let restored = session.peek().clone();
            let Some(token) = restored.token().map(str::to_string) else {
                return;
            };
            if restored.is_validated() {
                return;
            }
            let outcome = sessions.validate(&restored).await;
            if !session.write().apply_validation(&token, &outcome) {
                return;
            }
            if outcome.is_authenticated() {
                tracing::info!("Session confirmed");
            }
        }
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
///
/// Always ends up logged out locally, even when the backend is unreachable.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session = use_auth();
    let sessions = use_session_store();
    let nav = use_navigator();
    let mut busy = use_signal(|| false);

    let onclick = move |_: MouseEvent| {
        let sessions = sessions.clone();
        async move {
            busy.set(true);
            session.set(sessions.end_session().await);
            busy.set(false);
            nav.replace(api::auth::LOGIN_PATH);
        }
    };

    rsx! {
        button {
            class: "{class}",
            disabled: busy(),
            onclick: onclick,
            Icon { icon: FaRightFromBracket, width: 16, height: 16 }
            span { "{label}" }
        }
    }
}
