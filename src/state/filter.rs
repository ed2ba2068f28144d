//! Client-side enquiry filtering
//!
//! Filtering never talks to the server; it is a predicate over the enquiries
//! already fetched.

use crate::models::{find_college, College, Enquiry};
use crate::utils::helpers::UNKNOWN_COLLEGE;

/// Which enquiries the enquiries view shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollegeFilter {
    #[default]
    All,
    College(i64),
}

impl CollegeFilter {
    pub fn matches(&self, enquiry: &Enquiry) -> bool {
        match self {
            CollegeFilter::All => true,
            CollegeFilter::College(college_id) => enquiry.college == *college_id,
        }
    }

    /// Selector label: "All Colleges" or the college's name
    pub fn label(&self, colleges: &[College]) -> String {
        match self {
            CollegeFilter::All => "All Colleges".to_string(),
            CollegeFilter::College(college_id) => college_name(colleges, *college_id).to_string(),
        }
    }

    /// Next selector option: All, then each fetched college in list order
    pub fn next(self, colleges: &[College]) -> Self {
        let options = options(colleges);
        let index = options.iter().position(|o| *o == self).unwrap_or(0);
        options[(index + 1) % options.len()]
    }

    /// Previous selector option, wrapping around
    pub fn previous(self, colleges: &[College]) -> Self {
        let options = options(colleges);
        let index = options.iter().position(|o| *o == self).unwrap_or(0);
        options[(index + options.len() - 1) % options.len()]
    }
}

fn options(colleges: &[College]) -> Vec<CollegeFilter> {
    std::iter::once(CollegeFilter::All)
        .chain(colleges.iter().map(|c| CollegeFilter::College(c.id)))
        .collect()
}

/// Enquiries selected by `filter`, in their fetched order
pub fn filter_enquiries(enquiries: &[Enquiry], filter: CollegeFilter) -> Vec<&Enquiry> {
    enquiries.iter().filter(|e| filter.matches(e)).collect()
}

/// Display name for a college id, or "Unknown" when it is not among the fetched colleges
pub fn college_name(colleges: &[College], college_id: i64) -> &str {
    find_college(colleges, college_id)
        .map(|c| c.name.as_str())
        .unwrap_or(UNKNOWN_COLLEGE)
}
