//! Conversions between the `shared` DTOs and domain types

pub mod activity_mapper;
pub mod child_mapper;
pub mod feedback_mapper;
pub mod report_mapper;

pub use activity_mapper::ActivityMapper;
pub use child_mapper::ChildMapper;
pub use feedback_mapper::FeedbackMapper;
pub use report_mapper::ReportMapper;
