//! Form state and validation
//!
//! Each modal edits one form. Forms are plain data; [`FormEditor`] adds the
//! focused-field cursor the terminal UI needs. Validation mirrors the
//! constraints the backend enforces so bad input never leaves the client.

use crate::models::{College, CollegePayload, Course, CreateEnquiryRequest};
use crate::services::Credentials;
use crate::utils::errors::{DirectoryError, Result};
use crate::utils::helpers::{char_len, is_valid_email};

pub const COLLEGE_NAME_MAX: usize = 200;
pub const COLLEGE_LOCATION_MAX: usize = 100;
pub const ENQUIRY_NAME_MAX: usize = 100;
pub const ENQUIRY_MOBILE_MAX: usize = 15;

/// A form whose fields can be edited one at a time
pub trait EditableForm {
    /// Labels of the fields in focus order
    const FIELDS: &'static [&'static str];

    /// Text buffer behind a field, or `None` for non-text fields
    fn text_mut(&mut self, index: usize) -> Option<&mut String>;

    /// Step a choice field; text fields ignore this
    fn cycle(&mut self, _index: usize, _forward: bool) {}
}

/// A form plus the index of the focused field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormEditor<F> {
    pub form: F,
    pub focus: usize,
}

impl<F: EditableForm> FormEditor<F> {
    pub fn new(form: F) -> Self {
        Self { form, focus: 0 }
    }

    pub fn focused_label(&self) -> &'static str {
        F::FIELDS[self.focus]
    }

    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % F::FIELDS.len();
    }

    pub fn previous_field(&mut self) {
        self.focus = (self.focus + F::FIELDS.len() - 1) % F::FIELDS.len();
    }

    pub fn insert_char(&mut self, ch: char) {
        if let Some(text) = self.form.text_mut(self.focus) {
            text.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.form.text_mut(self.focus) {
            text.pop();
        }
    }

    pub fn cycle(&mut self, forward: bool) {
        self.form.cycle(self.focus, forward);
    }

    /// Replace the form with a fresh value and move focus back to the first field
    pub fn reset(&mut self, form: F) {
        self.form = form;
        self.focus = 0;
    }
}

fn require(value: &str, label: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DirectoryError::InvalidInput(format!("{} is required", label)));
    }
    Ok(())
}

fn limit(value: &str, label: &str, max: usize) -> Result<()> {
    if char_len(value.trim()) > max {
        return Err(DirectoryError::InvalidInput(format!(
            "{} must be at most {} characters",
            label, max
        )));
    }
    Ok(())
}

/// Enquiry modal form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnquiryForm {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub course: Course,
}

impl EnquiryForm {
    pub fn validate(&self) -> Result<()> {
        require(&self.name, "Name")?;
        limit(&self.name, "Name", ENQUIRY_NAME_MAX)?;
        require(&self.email, "Email")?;
        if !is_valid_email(self.email.trim()) {
            return Err(DirectoryError::InvalidInput(
                "Email must be a valid email address".to_string(),
            ));
        }
        require(&self.mobile, "Mobile Number")?;
        limit(&self.mobile, "Mobile Number", ENQUIRY_MOBILE_MAX)?;
        Ok(())
    }

    /// Request body for an enquiry about `college_id`
    pub fn to_request(&self, college_id: i64) -> CreateEnquiryRequest {
        CreateEnquiryRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            mobile: self.mobile.trim().to_string(),
            course: self.course,
            college: college_id,
        }
    }
}

impl EditableForm for EnquiryForm {
    const FIELDS: &'static [&'static str] = &["Your Name", "Your Email", "Mobile Number", "Course"];

    fn text_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.mobile),
            _ => None,
        }
    }

    fn cycle(&mut self, index: usize, forward: bool) {
        if index == 3 {
            self.course = if forward { self.course.next() } else { self.course.previous() };
        }
    }
}

/// College modal form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollegeForm {
    pub name: String,
    pub location: String,
    pub description: String,
}

impl CollegeForm {
    pub fn validate(&self) -> Result<()> {
        require(&self.name, "College Name")?;
        limit(&self.name, "College Name", COLLEGE_NAME_MAX)?;
        require(&self.location, "Location")?;
        limit(&self.location, "Location", COLLEGE_LOCATION_MAX)?;
        require(&self.description, "Description")?;
        Ok(())
    }

    pub fn to_payload(&self) -> CollegePayload {
        CollegePayload {
            name: self.name.trim().to_string(),
            location: self.location.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }
}

impl From<&College> for CollegeForm {
    fn from(college: &College) -> Self {
        Self {
            name: college.name.clone(),
            location: college.location.clone(),
            description: college.description.clone(),
        }
    }
}

impl EditableForm for CollegeForm {
    const FIELDS: &'static [&'static str] = &["College Name", "Location (e.g., City, State)", "Description"];

    fn text_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.location),
            2 => Some(&mut self.description),
            _ => None,
        }
    }
}

/// Admin login prompt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn to_credentials(&self) -> Credentials {
        Credentials::new(self.username.clone(), self.password.clone())
    }
}

impl EditableForm for LoginForm {
    const FIELDS: &'static [&'static str] = &["Enter username", "Enter password"];

    fn text_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.username),
            1 => Some(&mut self.password),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn filled_enquiry() -> EnquiryForm {
        EnquiryForm {
            name: "Ravi".to_string(),
            email: "ravi@example.org".to_string(),
            mobile: "9876543210".to_string(),
            course: Course::Medicine,
        }
    }

    #[test]
    fn test_enquiry_defaults() {
        let form = EnquiryForm::default();
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.mobile.is_empty());
        assert_eq!(form.course, Course::Engineering);
    }

    #[test]
    fn test_enquiry_requires_every_text_field() {
        let mut form = filled_enquiry();
        form.mobile = "   ".to_string();
        assert_matches!(form.validate(), Err(DirectoryError::InvalidInput(msg)) if msg.contains("Mobile"));

        let mut form = filled_enquiry();
        form.name.clear();
        assert_matches!(form.validate(), Err(DirectoryError::InvalidInput(msg)) if msg.contains("Name"));
    }

    #[test]
    fn test_enquiry_rejects_malformed_email() {
        let mut form = filled_enquiry();
        form.email = "ravi-at-example".to_string();
        assert_matches!(form.validate(), Err(DirectoryError::InvalidInput(_)));
    }

    #[test]
    fn test_enquiry_mobile_length_limit() {
        let mut form = filled_enquiry();
        form.mobile = "1".repeat(ENQUIRY_MOBILE_MAX + 1);
        assert!(form.validate().is_err());
        form.mobile = "1".repeat(ENQUIRY_MOBILE_MAX);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_enquiry_request_carries_college_id() {
        let request = filled_enquiry().to_request(42);
        assert_eq!(request.college, 42);
        assert_eq!(request.course, Course::Medicine);
    }

    #[test]
    fn test_college_form_prefills_from_record() {
        let college = College {
            id: 5,
            name: "Northfield Institute".to_string(),
            location: "Pune, MH".to_string(),
            description: "Engineering and design".to_string(),
            created_at: None,
        };
        let form = CollegeForm::from(&college);
        assert_eq!(form.to_payload(), college.payload());
    }

    #[test]
    fn test_college_form_limits() {
        let form = CollegeForm {
            name: "x".repeat(COLLEGE_NAME_MAX + 1),
            location: "Delhi".to_string(),
            description: "d".to_string(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_editor_types_into_focused_field() {
        let mut editor = FormEditor::new(LoginForm::default());
        editor.insert_char('a');
        editor.next_field();
        editor.insert_char('b');
        editor.insert_char('c');
        editor.backspace();
        assert_eq!(editor.form.username, "a");
        assert_eq!(editor.form.password, "b");
        assert_eq!(editor.focused_label(), "Enter password");
    }

    #[test]
    fn test_editor_cycles_course_on_choice_field() {
        let mut editor = FormEditor::new(EnquiryForm::default());
        editor.previous_field();
        assert_eq!(editor.focused_label(), "Course");
        editor.insert_char('x');
        editor.cycle(true);
        assert_eq!(editor.form.course, Course::BusinessAdministration);
        assert!(editor.form.name.is_empty());
    }
}
