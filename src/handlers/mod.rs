//! Controller module
//!
//! The [`Controller`] mediates between user input and the directory API. Each
//! operation performs at most one remote call (plus the refetch that follows a
//! successful write), then applies a pure transition to [`ViewState`]. Every
//! failure is caught here, logged, and turned into a notice; nothing is
//! retried or queued.

pub mod colleges;
pub mod enquiries;
pub mod messages;
pub mod session;

use crate::services::{Authenticator, DirectoryApi};
use crate::state::ViewState;
use crate::utils::errors::{DirectoryError, ErrorSeverity};
use crate::utils::logging;

/// Owns the view state and the services it is synchronized with
pub struct Controller<A, Au> {
    api: A,
    auth: Au,
    state: ViewState,
}

impl<A: DirectoryApi, Au: Authenticator> Controller<A, Au> {
    pub fn new(api: A, auth: Au) -> Self {
        Self {
            api,
            auth,
            state: ViewState::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Initial load
    pub async fn start(&mut self) {
        self.fetch_colleges().await;
    }

    /// Acknowledge the oldest notice
    pub fn dismiss_notice(&mut self) {
        self.state.notices.dismiss();
    }

    /// Log a failed remote call and raise a generic blocking alert
    fn report_failure(&mut self, api: &str, error: DirectoryError, message: &str) {
        logging::log_api_error(api, &error, Some(message));
        let severity = error.severity().max(ErrorSeverity::Error);
        self.state.alert(severity, message);
    }

    /// Surface a local rejection (validation, permissions) without touching the network
    fn report_rejection(&mut self, error: DirectoryError) {
        tracing::debug!(error = %error, "Action rejected locally");
        let message = match &error {
            DirectoryError::InvalidInput(msg)
            | DirectoryError::PermissionDenied(msg)
            | DirectoryError::Authentication(msg) => msg.clone(),
            other => other.to_string(),
        };
        self.state.alert(error.severity(), message);
    }
}
