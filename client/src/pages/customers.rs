//! Customer list screen. The list itself is not wired to the backend yet.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::sidebar::Sidebar;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

/// Customer list placeholder inside the console chrome.
/// Redirects to `/login` if the session resolves unauthenticated.
#[component]
pub fn CustomersPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    view! {
        <div class="console-layout">
            <Sidebar/>
            <main class="console-main">
                <h1>"Customers"</h1>
                <p class="console-placeholder">"No customers to show yet."</p>
            </main>
        </div>
    }
}
