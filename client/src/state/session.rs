//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written once by the session bootstrap in `app.rs` (and by the login page
//! after a successful sign-in). Route components only read it to decide
//! whether to redirect.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::net::types::Session;

/// Resolution status of the browser session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Unauthenticated,
    #[default]
    Loading,
    Authenticated,
}

/// Session status plus the opaque payload returned by the server.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub status: SessionStatus,
    pub session: Option<Session>,
}

impl SessionState {
    /// State after the session lookup completes.
    #[must_use]
    pub fn resolved(session: Option<Session>) -> Self {
        let status = if session.is_some() { SessionStatus::Authenticated } else { SessionStatus::Unauthenticated };
        Self { status, session }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }
}
