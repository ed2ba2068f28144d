//! Admin authentication
//!
//! Admin mode is a client-side gate: it unlocks the management views but is
//! not enforced by the backend. Credentials are checked by an [`Authenticator`];
//! the shipped implementation compares against the configured pair.

use tracing::{debug, warn};

use crate::config::AdminConfig;
use crate::utils::errors::{DirectoryError, Result};

/// Credentials entered at the login prompt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Decides whether a credential pair unlocks admin mode
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, credentials: &Credentials) -> Result<()>;
}

/// Compares credentials against a fixed, configured pair
#[derive(Debug, Clone)]
pub struct CredentialAuthenticator {
    expected: Credentials,
}

impl CredentialAuthenticator {
    pub fn new(config: &AdminConfig) -> Self {
        Self {
            expected: Credentials::new(config.username.clone(), config.password.clone()),
        }
    }
}

impl Authenticator for CredentialAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<()> {
        if credentials.username == self.expected.username
            && credentials.password == self.expected.password
        {
            debug!(username = %credentials.username, "Admin authentication successful");
            Ok(())
        } else {
            warn!(username = %credentials.username, "Rejected admin login attempt");
            Err(DirectoryError::Authentication("Invalid credentials".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn authenticator() -> CredentialAuthenticator {
        CredentialAuthenticator::new(&AdminConfig::default())
    }

    #[test]
    fn test_default_pair_is_accepted() {
        assert!(authenticator().authenticate(&Credentials::new("admin", "admin123")).is_ok());
    }

    #[test]
    fn test_wrong_password_is_rejected() {
        assert_matches!(
            authenticator().authenticate(&Credentials::new("admin", "admin")),
            Err(DirectoryError::Authentication(_))
        );
    }

    #[test]
    fn test_comparison_is_exact() {
        let auth = authenticator();
        assert!(auth.authenticate(&Credentials::new("Admin", "admin123")).is_err());
        assert!(auth.authenticate(&Credentials::new("admin ", "admin123")).is_err());
        assert!(auth.authenticate(&Credentials::default()).is_err());
    }

    #[test]
    fn test_configured_pair_replaces_default() {
        let auth = CredentialAuthenticator::new(&AdminConfig {
            username: "registrar".to_string(),
            password: "s3cret".to_string(),
        });
        assert!(auth.authenticate(&Credentials::new("registrar", "s3cret")).is_ok());
        assert!(auth.authenticate(&Credentials::new("admin", "admin123")).is_err());
    }
}
