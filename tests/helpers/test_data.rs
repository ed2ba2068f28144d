//! Test data builders

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use college_directory::config::AdminConfig;
use college_directory::models::{College, Course, Enquiry};
use college_directory::services::{CredentialAuthenticator, Credentials};
use college_directory::Controller;

use super::FakeDirectory;

pub type TestController = Controller<FakeDirectory, CredentialAuthenticator>;

pub fn sample_college(id: i64, name: &str) -> College {
    College {
        id,
        name: name.to_string(),
        location: "Bengaluru, KA".to_string(),
        description: format!("{} offers undergraduate and postgraduate programmes.", name),
        created_at: None,
    }
}

pub fn sample_colleges() -> Vec<College> {
    vec![
        sample_college(1, "Riverside Institute of Technology"),
        sample_college(2, "Greenfield Medical College"),
        sample_college(3, "Harbour School of Arts"),
    ]
}

pub fn sample_enquiry(id: i64, college: i64, course: Course) -> Enquiry {
    Enquiry {
        id,
        name: format!("Applicant {}", id),
        email: format!("applicant{}@example.org", id),
        mobile: "9000000000".to_string(),
        course,
        college,
        created_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
    }
}

pub fn college_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "location": "Mumbai, MH",
        "description": "Coastal campus",
        "created_at": "2024-01-15T10:30:00Z"
    })
}

pub fn enquiry_json(id: i64, college: i64, course: &str) -> Value {
    json!({
        "id": id,
        "name": "Asha",
        "email": "asha@example.org",
        "mobile": "9123456789",
        "course": course,
        "college": college,
        "created_at": "2024-03-02T08:00:00Z"
    })
}

pub fn admin_credentials() -> Credentials {
    let admin = AdminConfig::default();
    Credentials::new(admin.username, admin.password)
}

/// Controller over the given in-memory backend, not yet started
pub fn controller_with(directory: FakeDirectory) -> TestController {
    Controller::new(directory, CredentialAuthenticator::new(&AdminConfig::default()))
}

/// Controller already started and logged in as admin
pub async fn admin_controller(directory: FakeDirectory) -> TestController {
    let mut controller = controller_with(directory);
    controller.start().await;
    assert!(controller.login(&admin_credentials()).await);
    controller.dismiss_notice();
    controller
}
