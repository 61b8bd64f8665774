//! Derived exposure types. None of these are persisted.

use shared::{Intelligence, IntelligenceExposure};
use std::collections::BTreeMap;

/// Counts and averages computed from a child's activities and feedback
#[derive(Debug, Clone, PartialEq)]
pub struct ExposureProfile {
    pub total_activities: u32,
    /// Always covers the whole taxonomy
    pub intelligence_exposure: IntelligenceExposure,
    /// Only subjects that were actually observed
    pub subject_exposure: BTreeMap<String, u32>,
    /// Mean rating rounded to one decimal, None without feedback
    pub average_rating: Option<f64>,
    /// Deduplicated, sorted ascending
    pub skills_developed: Vec<String>,
}

impl ExposureProfile {
    pub fn empty() -> Self {
        Self {
            total_activities: 0,
            intelligence_exposure: IntelligenceExposure::default(),
            subject_exposure: BTreeMap::new(),
            average_rating: None,
            skills_developed: Vec::new(),
        }
    }
}

/// Strengths and recommendations derived from a profile
#[derive(Debug, Clone, PartialEq)]
pub struct ExposureInsights {
    pub strengths: Vec<Intelligence>,
    pub recommendations: Vec<String>,
}

/// Fully assembled report for one child
#[derive(Debug, Clone, PartialEq)]
pub struct ExposureReport {
    pub child_id: String,
    pub child_name: String,
    pub profile: ExposureProfile,
    pub insights: ExposureInsights,
}
