//! Enquiry operations

use tracing::{debug, info};

use crate::models::College;
use crate::services::{Authenticator, DirectoryApi};
use crate::state::CollegeFilter;
use crate::utils::errors::{DirectoryError, ErrorSeverity};
use crate::utils::logging;
use super::{messages, Controller};

impl<A: DirectoryApi, Au: Authenticator> Controller<A, Au> {
    /// Replace the cached enquiry list
    ///
    /// The backend only lists enquiries for authenticated sessions, so any
    /// failure is reported as a login problem.
    pub async fn fetch_enquiries(&mut self) -> bool {
        match self.api.list_enquiries().await {
            Ok(enquiries) => {
                debug!(count = enquiries.len(), "Fetched enquiries");
                self.state.set_enquiries(enquiries);
                true
            }
            Err(e) => {
                let unauthorized = matches!(&e, DirectoryError::Api(api) if api.is_unauthorized());
                debug!(unauthorized = unauthorized, "Enquiry listing refused");
                self.report_failure("list_enquiries", e, messages::LOGIN_REQUIRED);
                false
            }
        }
    }

    /// Open the enquiry modal for `college`
    pub fn open_enquiry(&mut self, college: College) {
        logging::log_user_action("open_enquiry", Some(college.id));
        self.state.open_enquiry_form(college);
    }

    /// Open the enquiry modal for the highlighted college
    pub fn enquire_highlighted(&mut self) {
        if let Some(college) = self.state.highlighted_college().cloned() {
            self.open_enquiry(college);
        }
    }

    pub fn cancel_enquiry(&mut self) {
        self.state.close_enquiry_form();
    }

    /// Validate and POST the enquiry form for the selected college
    ///
    /// On success the modal closes, the form resets to its defaults and, in
    /// admin mode only, the enquiry list is refreshed.
    pub async fn submit_enquiry(&mut self) -> bool {
        let Some(college_id) = self.state.selected_college.as_ref().map(|c| c.id) else {
            self.report_rejection(DirectoryError::InvalidInput(
                messages::NO_COLLEGE_SELECTED.to_string(),
            ));
            return false;
        };

        if let Err(e) = self.state.enquiry_form.form.validate() {
            self.report_rejection(e);
            return false;
        }

        let request = self.state.enquiry_form.form.to_request(college_id);
        match self.api.create_enquiry(&request).await {
            Ok(enquiry) => {
                info!(enquiry_id = enquiry.id, course = %enquiry.course, "Enquiry submitted");
                logging::log_user_action("submit_enquiry", Some(college_id));
                self.state.alert(ErrorSeverity::Info, messages::ENQUIRY_SUBMITTED);
                self.state.enquiry_submitted();
                if self.state.is_admin {
                    self.fetch_enquiries().await;
                }
                true
            }
            Err(e) => {
                self.report_failure("create_enquiry", e, messages::ENQUIRY_FAILED);
                false
            }
        }
    }

    pub fn set_filter(&mut self, filter: CollegeFilter) {
        self.state.set_filter(filter);
    }

    pub fn next_filter(&mut self) {
        let next = self.state.college_filter.next(&self.state.colleges);
        self.state.set_filter(next);
    }

    pub fn previous_filter(&mut self) {
        let previous = self.state.college_filter.previous(&self.state.colleges);
        self.state.set_filter(previous);
    }
}
