//! # Domain Module
//!
//! Business logic of the learning portal: child profiles, recorded
//! activities, parent feedback and the exposure report computed from them.
//!
//! ## Module Organization
//!
//! - **child_service**: child profiles and account ownership checks
//! - **activity_service**: validation and recording of generated activities
//! - **feedback_service**: parent ratings and narratives per activity
//! - **exposure_aggregator**: pure fold of a child's history into counts
//! - **recommendation_deriver**: strengths and recommendations from counts
//! - **report_service**: assembles the exposure report for a child
//!
//! ## Business Rules
//!
//! - Only the owning account may read or change a child, or its report
//! - Activities are never edited after recording
//! - Ratings are integers from 1 to 5
//! - Reports are recomputed on every request and never stored

pub mod activity_service;
pub mod child_service;
pub mod commands;
pub mod exposure_aggregator;
pub mod feedback_service;
pub mod models;
pub mod recommendation_deriver;
pub mod report_service;

pub use activity_service::ActivityService;
pub use child_service::ChildService;
pub use exposure_aggregator::ExposureAggregator;
pub use feedback_service::FeedbackService;
pub use recommendation_deriver::{
    BalancedExposurePolicy, RecommendationDeriver, RecommendationPolicy,
};
pub use report_service::ReportService;
