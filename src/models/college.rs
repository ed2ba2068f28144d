//! College model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct College {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of both the create (POST) and update (PUT) college requests
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollegePayload {
    pub name: String,
    pub location: String,
    pub description: String,
}

impl College {
    /// The editable fields of this record
    pub fn payload(&self) -> CollegePayload {
        CollegePayload {
            name: self.name.clone(),
            location: self.location.clone(),
            description: self.description.clone(),
        }
    }
}

/// Find a college by id in a fetched list
pub fn find_college(colleges: &[College], college_id: i64) -> Option<&College> {
    colleges.iter().find(|c| c.id == college_id)
}
