//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical session-driven redirects: protected
//! pages bounce to `/login`, and the landing page forwards authenticated
//! users to the console.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{SessionState, SessionStatus};

/// Route the landing page forwards to once the session is authenticated.
pub const AUTHENTICATED_HOME: &str = "/customers";

/// Route protected pages redirect to when no session exists.
pub const LOGIN_ROUTE: &str = "/login";

/// True once the session has resolved and no user is signed in.
#[must_use]
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    state.status == SessionStatus::Unauthenticated
}

/// Redirect to `/login` whenever the session resolves unauthenticated.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.with(should_redirect_unauth) {
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });
}

/// Change detector for the authenticated redirect.
///
/// Remembers the last observed status so navigation fires once per change
/// into `Authenticated`, not once per evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RedirectGate {
    last_seen: Option<SessionStatus>,
}

impl RedirectGate {
    /// Record `status`; returns the updated gate and whether to navigate.
    #[must_use]
    pub fn observe(self, status: SessionStatus) -> (Self, bool) {
        let fire = status == SessionStatus::Authenticated && self.last_seen != Some(SessionStatus::Authenticated);
        (Self { last_seen: Some(status) }, fire)
    }

    #[must_use]
    pub fn last_seen(&self) -> Option<SessionStatus> {
        self.last_seen
    }
}

/// Navigate to `destination` on mount and on each transition into
/// `Authenticated`.
///
/// The effect hands its previous gate back to itself, so re-runs with an
/// unchanged status are no-ops. `Loading` never times out.
pub fn install_authenticated_redirect<F>(session: RwSignal<SessionState>, destination: &'static str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move |gate: Option<RedirectGate>| {
        let status = session.with(|s| s.status);
        let (gate, fire) = gate.unwrap_or_default().observe(status);
        if fire {
            #[cfg(feature = "hydrate")]
            log::debug!("session authenticated; navigating to {destination}");
            navigate(destination, NavigateOptions::default());
        }
        gate
    });
}
