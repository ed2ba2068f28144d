//! College operations

use tracing::{debug, info};

use crate::models::College;
use crate::services::{Authenticator, DirectoryApi};
use crate::utils::errors::{DirectoryError, ErrorSeverity};
use crate::utils::logging;
use super::{messages, Controller};

impl<A: DirectoryApi, Au: Authenticator> Controller<A, Au> {
    /// Replace the cached college list with the server's
    ///
    /// Failure leaves the previous list in place and raises a passive warning.
    pub async fn fetch_colleges(&mut self) -> bool {
        match self.api.list_colleges().await {
            Ok(colleges) => {
                debug!(count = colleges.len(), "Fetched colleges");
                self.state.set_colleges(colleges);
                true
            }
            Err(e) => {
                logging::log_api_error("list_colleges", &e, None);
                self.state.warn_passive(messages::COLLEGES_UNAVAILABLE);
                false
            }
        }
    }

    /// Open the college modal empty
    pub fn add_college(&mut self) {
        if let Err(e) = self.state.begin_add_college() {
            self.report_rejection(e);
        }
    }

    /// Open the college modal pre-filled with `college`
    pub fn edit_college(&mut self, college: &College) {
        if let Err(e) = self.state.begin_edit_college(college) {
            self.report_rejection(e);
        }
    }

    /// Edit whichever college is highlighted
    pub fn edit_highlighted(&mut self) {
        if let Some(college) = self.state.highlighted_college().cloned() {
            self.edit_college(&college);
        }
    }

    pub fn cancel_college_form(&mut self) {
        self.state.cancel_college_form();
    }

    /// Ask for confirmation before deleting
    pub fn request_delete(&mut self, college_id: i64) {
        if let Err(e) = self.state.request_delete(college_id) {
            self.report_rejection(e);
        }
    }

    pub fn request_delete_highlighted(&mut self) {
        if let Some(college_id) = self.state.highlighted_college().map(|c| c.id) {
            self.request_delete(college_id);
        }
    }

    pub fn cancel_delete(&mut self) {
        self.state.cancel_delete();
    }

    /// Carry out the delete the user just confirmed
    pub async fn confirm_delete(&mut self) -> bool {
        match self.state.take_pending_delete() {
            Some(college_id) => self.delete_college(college_id).await,
            None => false,
        }
    }

    /// DELETE the college, then refetch the full list
    pub async fn delete_college(&mut self, college_id: i64) -> bool {
        if !self.state.is_admin {
            self.report_rejection(DirectoryError::PermissionDenied(
                "Deleting a college requires admin mode".to_string(),
            ));
            return false;
        }

        match self.api.delete_college(college_id).await {
            Ok(()) => {
                logging::log_admin_action("delete_college", Some(college_id), None);
                self.state.alert(ErrorSeverity::Info, messages::COLLEGE_DELETED);
                self.fetch_colleges().await;
                true
            }
            Err(e) => {
                self.report_failure("delete_college", e, messages::DELETE_FAILED);
                false
            }
        }
    }

    /// PUT when editing, POST otherwise; on success refetch and close the modal
    ///
    /// On failure the modal stays open with its values intact.
    pub async fn submit_college(&mut self) -> bool {
        if !self.state.is_admin {
            self.report_rejection(DirectoryError::PermissionDenied(
                "Saving a college requires admin mode".to_string(),
            ));
            return false;
        }

        if let Err(e) = self.state.college_form.form.validate() {
            self.report_rejection(e);
            return false;
        }

        let payload = self.state.college_form.form.to_payload();
        let editing = self.state.editing_college.as_ref().map(|c| c.id);

        let outcome = match editing {
            Some(college_id) => self
                .api
                .update_college(college_id, &payload)
                .await
                .map(|saved| (saved, "update_college", messages::COLLEGE_UPDATED)),
            None => self
                .api
                .create_college(&payload)
                .await
                .map(|saved| (saved, "create_college", messages::COLLEGE_ADDED)),
        };

        match outcome {
            Ok((saved, action, message)) => {
                info!(college_id = saved.id, action = action, "College saved");
                logging::log_admin_action(action, Some(saved.id), Some(&saved.name));
                self.state.alert(ErrorSeverity::Info, message);
                self.state.college_saved();
                self.fetch_colleges().await;
                true
            }
            Err(e) => {
                let (api, message) = match editing {
                    Some(_) => ("update_college", messages::UPDATE_FAILED),
                    None => ("create_college", messages::ADD_FAILED),
                };
                self.report_failure(api, e, message);
                false
            }
        }
    }
}
