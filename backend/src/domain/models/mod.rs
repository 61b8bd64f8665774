//! Domain models for the learning portal.
//!
//! These carry typed timestamps and the closed intelligence enum; the REST
//! layer maps them to the string-based DTOs in the `shared` crate.

pub mod activity;
pub mod child;
pub mod exposure;
pub mod feedback;

pub use activity::Activity;
pub use child::Child;
pub use exposure::{ExposureInsights, ExposureProfile, ExposureReport};
pub use feedback::Feedback;
