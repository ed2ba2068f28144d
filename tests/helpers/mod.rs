//! Test helpers module
//!
//! Mock HTTP server, in-memory backend and data builders shared by the
//! integration tests.

#![allow(dead_code, unused_imports)]

pub mod directory_mock;
pub mod fake_directory;
pub mod test_data;

pub use directory_mock::*;
pub use fake_directory::*;
pub use test_data::*;
