//! Enquiry model

use std::fmt;

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enquiry {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub course: Course,
    pub college: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEnquiryRequest {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub course: Course,
    pub college: i64,
}

/// Courses a prospective student can enquire about
///
/// Serialized by display label; labels the client does not know decode as `Other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Course {
    #[default]
    Engineering,
    #[serde(rename = "Business Administration")]
    BusinessAdministration,
    Medicine,
    Arts,
    #[serde(other)]
    Other,
}

impl Course {
    pub const ALL: [Course; 5] = [
        Course::Engineering,
        Course::BusinessAdministration,
        Course::Medicine,
        Course::Arts,
        Course::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Course::Engineering => "Engineering",
            Course::BusinessAdministration => "Business Administration",
            Course::Medicine => "Medicine",
            Course::Arts => "Arts",
            Course::Other => "Other",
        }
    }

    /// Next course in selector order, wrapping around
    pub fn next(self) -> Course {
        let index = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Previous course in selector order, wrapping around
    pub fn previous(self) -> Course {
        let index = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
