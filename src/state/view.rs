//! View state
//!
//! All client state lives in [`ViewState`]. Every method here is a pure,
//! synchronous transition: no I/O, no rendering. The controller performs the
//! remote call and then applies one of these transitions with the result.

use std::fmt;

use crate::models::{College, Enquiry};
use crate::utils::errors::{DirectoryError, ErrorSeverity, Result};
use super::filter::{filter_enquiries, CollegeFilter};
use super::forms::{CollegeForm, EnquiryForm, FormEditor, LoginForm};
use super::notice::{Notice, Notices};

/// Top-level panels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Colleges,
    Manage,
    Enquiries,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Colleges, Tab::Manage, Tab::Enquiries];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Colleges => "View Colleges",
            Tab::Manage => "Manage Colleges",
            Tab::Enquiries => "View Enquiries",
        }
    }

    /// Only the colleges panel is reachable outside admin mode
    pub fn requires_admin(&self) -> bool {
        !matches!(self, Tab::Colleges)
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tab::Colleges => "colleges",
            Tab::Manage => "manage",
            Tab::Enquiries => "enquiries",
        };
        f.write_str(name)
    }
}

/// Complete client state
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub active_tab: Tab,
    pub is_admin: bool,

    pub colleges: Vec<College>,
    pub enquiries: Vec<Enquiry>,
    pub college_filter: CollegeFilter,

    /// Row highlighted in the college list and manage table
    pub cursor: usize,
    /// First row shown in the enquiries table
    pub enquiry_scroll: usize,

    pub show_enquiry_form: bool,
    pub selected_college: Option<College>,
    pub enquiry_form: FormEditor<EnquiryForm>,

    pub show_college_form: bool,
    pub editing_college: Option<College>,
    pub college_form: FormEditor<CollegeForm>,

    pub login_prompt: Option<FormEditor<LoginForm>>,
    pub pending_delete: Option<i64>,

    pub notices: Notices,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    // ----- collections -----

    /// Replace the cached college list
    pub fn set_colleges(&mut self, colleges: Vec<College>) {
        self.colleges = colleges;
        self.clamp_cursor();
    }

    /// Replace the cached enquiry list
    pub fn set_enquiries(&mut self, enquiries: Vec<Enquiry>) {
        self.enquiries = enquiries;
        self.enquiry_scroll = 0;
    }

    pub fn set_filter(&mut self, filter: CollegeFilter) {
        self.college_filter = filter;
        self.enquiry_scroll = 0;
    }

    pub fn filtered_enquiries(&self) -> Vec<&Enquiry> {
        filter_enquiries(&self.enquiries, self.college_filter)
    }

    // ----- navigation -----

    /// Panel actually on screen: outside admin mode it is always the colleges panel
    pub fn visible_tab(&self) -> Tab {
        if self.is_admin {
            self.active_tab
        } else {
            Tab::Colleges
        }
    }

    pub fn select_tab(&mut self, tab: Tab) -> Result<()> {
        if tab.requires_admin() && !self.is_admin {
            return Err(DirectoryError::InvalidStateTransition {
                from: self.visible_tab().to_string(),
                to: tab.to_string(),
            });
        }
        self.active_tab = tab;
        self.cursor = 0;
        self.enquiry_scroll = 0;
        Ok(())
    }

    pub fn cursor_down(&mut self) {
        match self.visible_tab() {
            Tab::Enquiries => {
                let rows = self.filtered_enquiries().len();
                if self.enquiry_scroll + 1 < rows {
                    self.enquiry_scroll += 1;
                }
            }
            _ => {
                if self.cursor + 1 < self.colleges.len() {
                    self.cursor += 1;
                }
            }
        }
    }

    pub fn cursor_up(&mut self) {
        match self.visible_tab() {
            Tab::Enquiries => self.enquiry_scroll = self.enquiry_scroll.saturating_sub(1),
            _ => self.cursor = self.cursor.saturating_sub(1),
        }
    }

    /// College under the cursor in the list panels
    pub fn highlighted_college(&self) -> Option<&College> {
        self.colleges.get(self.cursor)
    }

    fn clamp_cursor(&mut self) {
        if self.cursor >= self.colleges.len() {
            self.cursor = self.colleges.len().saturating_sub(1);
        }
    }

    // ----- session -----

    pub fn open_login_prompt(&mut self) {
        self.login_prompt = Some(FormEditor::new(LoginForm::default()));
    }

    pub fn cancel_login(&mut self) {
        self.login_prompt = None;
    }

    /// Close the prompt and hand back what was typed
    pub fn take_login(&mut self) -> Option<LoginForm> {
        self.login_prompt.take().map(|editor| editor.form)
    }

    pub fn enter_admin(&mut self) {
        self.is_admin = true;
    }

    /// Leave admin mode: back to the colleges panel with the enquiry cache emptied
    pub fn logout(&mut self) {
        self.is_admin = false;
        self.active_tab = Tab::Colleges;
        self.enquiries.clear();
        self.enquiry_scroll = 0;
        self.pending_delete = None;
        self.show_college_form = false;
        self.editing_college = None;
    }

    fn require_admin(&self, action: &str) -> Result<()> {
        if self.is_admin {
            Ok(())
        } else {
            Err(DirectoryError::PermissionDenied(format!("{} requires admin mode", action)))
        }
    }

    // ----- enquiry modal -----

    pub fn open_enquiry_form(&mut self, college: College) {
        self.selected_college = Some(college);
        self.show_enquiry_form = true;
    }

    /// Close without submitting; typed values are kept for next time
    pub fn close_enquiry_form(&mut self) {
        self.show_enquiry_form = false;
    }

    /// Successful submission: close the modal and reset the form to its defaults
    pub fn enquiry_submitted(&mut self) {
        self.show_enquiry_form = false;
        self.enquiry_form.reset(EnquiryForm::default());
    }

    // ----- college modal -----

    pub fn begin_add_college(&mut self) -> Result<()> {
        self.require_admin("Adding a college")?;
        self.editing_college = None;
        self.college_form.reset(CollegeForm::default());
        self.show_college_form = true;
        Ok(())
    }

    pub fn begin_edit_college(&mut self, college: &College) -> Result<()> {
        self.require_admin("Editing a college")?;
        self.editing_college = Some(college.clone());
        self.college_form.reset(CollegeForm::from(college));
        self.show_college_form = true;
        Ok(())
    }

    /// Discard the modal without any remote call
    pub fn cancel_college_form(&mut self) {
        self.show_college_form = false;
        self.editing_college = None;
    }

    /// Successful create or update
    pub fn college_saved(&mut self) {
        self.show_college_form = false;
        self.college_form.reset(CollegeForm::default());
        self.editing_college = None;
    }

    // ----- delete confirmation -----

    pub fn request_delete(&mut self, college_id: i64) -> Result<()> {
        self.require_admin("Deleting a college")?;
        self.pending_delete = Some(college_id);
        Ok(())
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn take_pending_delete(&mut self) -> Option<i64> {
        self.pending_delete.take()
    }

    // ----- notices -----

    pub fn alert(&mut self, severity: ErrorSeverity, message: impl Into<String>) {
        self.notices.push(Notice::alert(severity, message));
    }

    pub fn warn_passive(&mut self, message: impl Into<String>) {
        self.notices.push(Notice::passive(ErrorSeverity::Warning, message));
    }

    /// Whether some modal currently captures input
    pub fn has_modal(&self) -> bool {
        self.notices.blocking().is_some()
            || self.login_prompt.is_some()
            || self.pending_delete.is_some()
            || self.show_college_form
            || self.show_enquiry_form
    }
}
