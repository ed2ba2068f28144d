//! User-facing message texts

pub const ENQUIRY_SUBMITTED: &str = "Enquiry submitted successfully!";
pub const ENQUIRY_FAILED: &str = "Error submitting enquiry";
pub const NO_COLLEGE_SELECTED: &str = "Select a college before submitting an enquiry";

pub const LOGIN_SUCCEEDED: &str = "Admin login successful!";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const LOGIN_REQUIRED: &str = "Login required to view enquiries";

pub const COLLEGES_UNAVAILABLE: &str = "Could not load colleges";
pub const COLLEGE_ADDED: &str = "College added successfully!";
pub const COLLEGE_UPDATED: &str = "College updated successfully!";
pub const COLLEGE_DELETED: &str = "College deleted successfully!";
pub const ADD_FAILED: &str = "Error adding college";
pub const UPDATE_FAILED: &str = "Error updating college";
pub const DELETE_FAILED: &str = "Error deleting college";
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this college?";

pub const NO_ENQUIRIES: &str = "No enquiries submitted yet.";
