//! Settings screen showing the identity-provider configuration read-only.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::sidebar::Sidebar;
use crate::config::RuntimeConfig;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

const NOT_CONFIGURED: &str = "(not configured)";

/// Display value for an optional config entry.
#[must_use]
pub fn display_value(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_CONFIGURED)
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<RwSignal<RuntimeConfig>>();
    install_unauth_redirect(session, use_navigate());

    let issuer = move || config.with(|c| display_value(c.issuer.as_deref()).to_owned());
    let client_id = move || config.with(|c| display_value(c.client_id.as_deref()).to_owned());

    view! {
        <div class="console-layout">
            <Sidebar/>
            <main class="console-main">
                <h1>"Settings"</h1>
                <dl class="settings-list">
                    <dt>"Identity issuer"</dt>
                    <dd>{issuer}</dd>
                    <dt>"Client ID"</dt>
                    <dd>{client_id}</dd>
                </dl>
            </main>
        </div>
    }
}
