//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::RuntimeConfig;
use crate::pages::{customers::CustomersPage, home::HomePage, login::LoginPage, settings::SettingsPage};
use crate::state::nav::NavStore;
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ko">
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
/// Provides the session, navigation and runtime-config contexts, starts the
/// session lookup, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // SSR receives the server's config through context; the browser starts
    // from it (or the default) and refreshes below.
    let config = RwSignal::new(use_context::<RuntimeConfig>().unwrap_or_default());
    let session = RwSignal::new(SessionState::default());
    let nav = NavStore::new();

    provide_context(config);
    provide_context(session);
    provide_context(nav);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let resolved = crate::net::api::fetch_session().await;
            log::debug!("session resolved: authenticated={}", resolved.is_some());
            session.set(SessionState::resolved(resolved));
        });
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_runtime_config().await {
                Some(fetched) => config.set(fetched),
                None => log::warn!("runtime config unavailable; using defaults"),
            }
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/console.css"/>
        <Title text="Admin Console"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("customers") view=CustomersPage/>
                <Route path=StaticSegment("settings") view=SettingsPage/>
            </Routes>
        </Router>
    }
}
