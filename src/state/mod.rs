//! State management module
//!
//! This module holds the client's view state and the pure transitions over it

pub mod filter;
pub mod forms;
pub mod notice;
pub mod view;

// Re-export commonly used state components
pub use filter::{college_name, filter_enquiries, CollegeFilter};
pub use forms::{CollegeForm, EditableForm, EnquiryForm, FormEditor, LoginForm};
pub use notice::{Notice, Notices};
pub use view::{Tab, ViewState};
