use std::env;

use dioxus_logger::tracing::warn;
use serde::Deserialize;
use serde::Serialize;

use super::gateway_preference::GatewayPreference;
use super::PrefsError;
use crate::navigation::DEFAULT_REDIRECT;

/// Represents all form prefs. Read once at startup.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct FormPrefs {
    gateway: GatewayPreference,
    unauthorized_redirect: String,
}

impl FormPrefs {
    pub fn new(gateway: GatewayPreference, unauthorized_redirect: impl Into<String>) -> Self {
        Self {
            gateway,
            unauthorized_redirect: unauthorized_redirect.into(),
        }
    }

    pub fn gateway(&self) -> &GatewayPreference {
        &self.gateway
    }

    /// Where an unauthorized submission sends the user.
    pub fn unauthorized_redirect(&self) -> &str {
        &self.unauthorized_redirect
    }

    /// Reads the gateway settings plus `UNAUTHORIZED_REDIRECT` (default `/`).
    pub fn from_env() -> Result<Self, PrefsError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, PrefsError> {
        let gateway = GatewayPreference::from_lookup(&lookup)?;
        let unauthorized_redirect = match lookup("UNAUTHORIZED_REDIRECT") {
            Some(path) if path.starts_with('/') => path,
            Some(path) => return Err(PrefsError::InvalidRedirect(path)),
            None => DEFAULT_REDIRECT.to_string(),
        };
        Ok(Self {
            gateway,
            unauthorized_redirect,
        })
    }
}

impl Default for FormPrefs {
    /// Prefs from the environment. A bad value is logged and replaced by
    /// the built-in defaults so the form still comes up.
    fn default() -> Self {
        Self::from_env().unwrap_or_else(|e| {
            warn!("ignoring payment form settings: {e}");
            Self::new(GatewayPreference::default(), DEFAULT_REDIRECT)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_redirect_to_root() {
        let prefs = FormPrefs::from_lookup(|_| None).unwrap();
        assert_eq!(prefs.unauthorized_redirect(), "/");
        assert!(prefs.gateway().is_simulated());
    }

    #[test]
    fn reads_a_custom_redirect() {
        let prefs = FormPrefs::from_lookup(|key| {
            (key == "UNAUTHORIZED_REDIRECT").then(|| "/login".to_string())
        })
        .unwrap();
        assert_eq!(prefs.unauthorized_redirect(), "/login");
    }

    #[test]
    fn rejects_relative_redirects() {
        let err = FormPrefs::from_lookup(|key| {
            (key == "UNAUTHORIZED_REDIRECT").then(|| "login".to_string())
        })
        .unwrap_err();
        assert_eq!(err, PrefsError::InvalidRedirect("login".to_string()));
    }

    #[test]
    fn gateway_errors_propagate() {
        let err = FormPrefs::from_lookup(|key| {
            (key == "PAYMENT_GATEWAY").then(|| "carrier-pigeon".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, PrefsError::InvalidGatewayMode(_)));
    }
}
