//! Admin session and navigation

use tracing::{info, warn};

use crate::services::{Authenticator, Credentials, DirectoryApi};
use crate::state::Tab;
use crate::utils::errors::ErrorSeverity;
use super::{messages, Controller};

impl<A: DirectoryApi, Au: Authenticator> Controller<A, Au> {
    pub fn open_login_prompt(&mut self) {
        if !self.state.is_admin {
            self.state.open_login_prompt();
        }
    }

    pub fn cancel_login(&mut self) {
        self.state.cancel_login();
    }

    /// Submit whatever was typed into the login prompt
    pub async fn submit_login(&mut self) -> bool {
        match self.state.take_login() {
            Some(form) => self.login(&form.to_credentials()).await,
            None => false,
        }
    }

    /// Enter admin mode if the credentials match, then load enquiries
    pub async fn login(&mut self, credentials: &Credentials) -> bool {
        match self.auth.authenticate(credentials) {
            Ok(()) => {
                info!(username = %credentials.username, "Entered admin mode");
                self.state.enter_admin();
                self.state.alert(ErrorSeverity::Info, messages::LOGIN_SUCCEEDED);
                self.fetch_enquiries().await;
                true
            }
            Err(e) => {
                warn!(error = %e, "Admin login failed");
                self.state.alert(ErrorSeverity::Warning, messages::INVALID_CREDENTIALS);
                false
            }
        }
    }

    /// Leave admin mode; enquiries are discarded, not refetched
    pub fn logout(&mut self) {
        if self.state.is_admin {
            info!("Left admin mode");
        }
        self.state.logout();
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if let Err(e) = self.state.select_tab(tab) {
            warn!(error = %e, "Ignored tab change");
        }
    }
}
