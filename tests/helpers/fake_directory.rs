//! In-memory directory backend
//!
//! Behaves like the REST service for controller tests: it stores colleges
//! and enquiries, assigns ids, records every call, and can be told to fail
//! individual operations.

use std::collections::HashSet;
use std::sync::Mutex;

use chrono::Utc;

use college_directory::models::{College, CollegePayload, CreateEnquiryRequest, Enquiry};
use college_directory::services::DirectoryApi;
use college_directory::utils::errors::{ApiError, DirectoryError, Result};

#[derive(Default)]
struct FakeState {
    colleges: Vec<College>,
    enquiries: Vec<Enquiry>,
    next_id: i64,
    calls: Vec<String>,
    failing: HashSet<String>,
}

#[derive(Default)]
pub struct FakeDirectory {
    inner: Mutex<FakeState>,
}

impl FakeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_colleges(colleges: Vec<College>) -> Self {
        let next_id = colleges.iter().map(|c| c.id).max().unwrap_or(0);
        Self {
            inner: Mutex::new(FakeState {
                colleges,
                next_id,
                ..FakeState::default()
            }),
        }
    }

    pub fn with_enquiries(self, enquiries: Vec<Enquiry>) -> Self {
        self.inner.lock().unwrap().enquiries = enquiries;
        self
    }

    /// Make `operation` (e.g. `"list_colleges"`) fail until `recover` is called
    pub fn fail(&self, operation: &str) {
        self.inner.lock().unwrap().failing.insert(operation.to_string());
    }

    pub fn recover(&self, operation: &str) {
        self.inner.lock().unwrap().failing.remove(operation);
    }

    /// Every call so far, as `operation` or `operation:id`
    pub fn calls(&self) -> Vec<String> {
        self.inner.lock().unwrap().calls.clone()
    }

    /// How many times `operation` was called, whatever its arguments
    pub fn count(&self, operation: &str) -> usize {
        self.calls()
            .iter()
            .filter(|call| call.split(':').next() == Some(operation))
            .count()
    }

    pub fn colleges(&self) -> Vec<College> {
        self.inner.lock().unwrap().colleges.clone()
    }

    pub fn enquiries(&self) -> Vec<Enquiry> {
        self.inner.lock().unwrap().enquiries.clone()
    }

    fn begin(&self, operation: &str, id: Option<i64>) -> Result<std::sync::MutexGuard<'_, FakeState>> {
        let mut state = self.inner.lock().unwrap();
        state.calls.push(match id {
            Some(id) => format!("{}:{}", operation, id),
            None => operation.to_string(),
        });
        if state.failing.contains(operation) {
            let status = if operation == "list_enquiries" { 403 } else { 500 };
            return Err(DirectoryError::Api(ApiError::Status {
                status,
                body: "{\"detail\":\"failure\"}".to_string(),
            }));
        }
        Ok(state)
    }
}

impl DirectoryApi for FakeDirectory {
    async fn list_colleges(&self) -> Result<Vec<College>> {
        Ok(self.begin("list_colleges", None)?.colleges.clone())
    }

    async fn create_college(&self, payload: &CollegePayload) -> Result<College> {
        let mut state = self.begin("create_college", None)?;
        state.next_id += 1;
        let college = College {
            id: state.next_id,
            name: payload.name.clone(),
            location: payload.location.clone(),
            description: payload.description.clone(),
            created_at: Some(Utc::now()),
        };
        state.colleges.push(college.clone());
        Ok(college)
    }

    async fn update_college(&self, college_id: i64, payload: &CollegePayload) -> Result<College> {
        let mut state = self.begin("update_college", Some(college_id))?;
        let college = state
            .colleges
            .iter_mut()
            .find(|c| c.id == college_id)
            .ok_or(DirectoryError::CollegeNotFound { college_id })?;
        college.name = payload.name.clone();
        college.location = payload.location.clone();
        college.description = payload.description.clone();
        Ok(college.clone())
    }

    async fn delete_college(&self, college_id: i64) -> Result<()> {
        let mut state = self.begin("delete_college", Some(college_id))?;
        let before = state.colleges.len();
        state.colleges.retain(|c| c.id != college_id);
        if state.colleges.len() == before {
            return Err(DirectoryError::CollegeNotFound { college_id });
        }
        Ok(())
    }

    async fn list_enquiries(&self) -> Result<Vec<Enquiry>> {
        Ok(self.begin("list_enquiries", None)?.enquiries.clone())
    }

    async fn create_enquiry(&self, request: &CreateEnquiryRequest) -> Result<Enquiry> {
        let mut state = self.begin("create_enquiry", Some(request.college))?;
        state.next_id += 1;
        let enquiry = Enquiry {
            id: state.next_id,
            name: request.name.clone(),
            email: request.email.clone(),
            mobile: request.mobile.clone(),
            course: request.course,
            college: request.college,
            created_at: Utc::now(),
        };
        state.enquiries.push(enquiry.clone());
        Ok(enquiry)
    }
}
