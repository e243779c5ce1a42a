//! Landing route that forwards signed-in users into the console.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders nothing. While the session is `Loading` or `Unauthenticated` the
//! page stays blank; the session collaborator is responsible for resolving
//! it or sending the user to `/login`.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::auth::{AUTHENTICATED_HOME, install_authenticated_redirect};

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    view! { <Landing session=session navigate=use_navigate()/> }
}

/// Blank body that only installs the authenticated redirect.
#[component]
pub fn Landing<F>(session: RwSignal<SessionState>, navigate: F) -> impl IntoView
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    install_authenticated_redirect(session, AUTHENTICATED_HOME, navigate);
}
