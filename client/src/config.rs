//! Runtime configuration shared by SSR and the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server builds this from its environment and serves it at
//! `/api/runtime-config`; SSR receives the same value through context. Only
//! public values belong here. Missing or empty variables stay `None`, and
//! nothing is validated.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

/// Identity-provider issuer URL.
pub const ISSUER_VAR: &str = "AUTH_ISSUER";
/// Public client identifier registered with the issuer.
pub const CLIENT_ID_VAR: &str = "AUTH_CLIENT_ID";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub issuer: Option<String>,
    pub client_id: Option<String>,
}

impl RuntimeConfig {
    /// Build from a flat `name -> value` mapping; unknown names are ignored.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut config = Self::default();
        for (name, value) in vars {
            let slot = match name.as_ref() {
                ISSUER_VAR => &mut config.issuer,
                CLIENT_ID_VAR => &mut config.client_id,
                _ => continue,
            };
            *slot = non_empty(value.into());
        }
        config
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}
