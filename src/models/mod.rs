//! Data models module
//!
//! This module contains the resources exchanged with the directory API

pub mod college;
pub mod enquiry;

// Re-export commonly used models
pub use college::{College, CollegePayload, find_college};
pub use enquiry::{Enquiry, CreateEnquiryRequest, Course};
