//! Services module
//!
//! This module contains the collaborators the controller talks to

pub mod api;
pub mod auth;

// Re-export commonly used services
pub use api::{DirectoryApi, HttpDirectoryApi};
pub use auth::{Authenticator, CredentialAuthenticator, Credentials};

use crate::config::settings::Settings;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone, Debug)]
pub struct ServiceFactory {
    pub api: HttpDirectoryApi,
    pub authenticator: CredentialAuthenticator,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: &Settings) -> Result<Self> {
        let api = HttpDirectoryApi::new(&settings.api)?;
        let authenticator = CredentialAuthenticator::new(&settings.admin);

        Ok(Self { api, authenticator })
    }
}
