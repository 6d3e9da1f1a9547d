//! Data models for `course-tracker`

pub mod catalog;
pub mod course;
pub mod eligibility;

pub use catalog::Catalog;
pub use course::Course;
pub use eligibility::{Availability, EligibilityResult, EligibleCourse};
