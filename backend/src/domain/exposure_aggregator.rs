//! Exposure aggregation over a child's activity history.
//!
//! The aggregator is a pure function of the activities and feedback it is
//! handed: no storage access, no clock, no randomness. Calling it twice with
//! the same inputs yields the same profile.

use std::collections::{BTreeSet, HashSet};

use tracing::error;

use crate::domain::models::feedback::{MAX_RATING, MIN_RATING};
use crate::domain::models::{Activity, ExposureProfile, Feedback};
use crate::error::{DomainError, DomainResult};

/// Folds activities and feedback into an [`ExposureProfile`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ExposureAggregator;

impl ExposureAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Compute the exposure profile for one child.
    ///
    /// `feedback` must only reference activities in `activities`; a row that
    /// points elsewhere, or carries a rating outside 1..=5, means the stores
    /// disagree with each other and is reported as
    /// [`DomainError::ComputationInvariantViolation`].
    pub fn aggregate(
        &self,
        activities: &[Activity],
        feedback: &[Feedback],
    ) -> DomainResult<ExposureProfile> {
        let mut profile = ExposureProfile::empty();
        let mut skills = BTreeSet::new();
        let activity_ids: HashSet<&str> = activities.iter().map(|a| a.id.as_str()).collect();

        for activity in activities {
            profile.total_activities += 1;

            // Duplicate tags on one activity count once
            let mut seen_intelligences = [false; shared::Intelligence::COUNT];
            for intelligence in &activity.intelligences {
                let slot = &mut seen_intelligences[intelligence.index()];
                if !*slot {
                    *slot = true;
                    profile.intelligence_exposure.record(*intelligence);
                }
            }

            let distinct_subjects: BTreeSet<&str> = activity
                .subjects
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .collect();
            for subject in distinct_subjects {
                *profile.subject_exposure.entry(subject.to_string()).or_insert(0) += 1;
            }

            skills.extend(
                activity
                    .skills
                    .iter()
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .map(str::to_string),
            );
        }

        let mut rating_sum: u32 = 0;
        for row in feedback {
            if !activity_ids.contains(row.activity_id.as_str()) {
                error!(
                    "Feedback {} references activity {} outside the aggregated set",
                    row.id, row.activity_id
                );
                return Err(DomainError::ComputationInvariantViolation(format!(
                    "feedback {} references activity {} which is not part of this history",
                    row.id, row.activity_id
                )));
            }
            if !(MIN_RATING..=MAX_RATING).contains(&row.rating) {
                error!("Feedback {} carries out-of-range rating {}", row.id, row.rating);
                return Err(DomainError::ComputationInvariantViolation(format!(
                    "feedback {} has rating {} outside {}..={}",
                    row.id, row.rating, MIN_RATING, MAX_RATING
                )));
            }
            rating_sum += u32::from(row.rating);
        }

        profile.average_rating = average_rating(rating_sum, feedback.len());
        profile.skills_developed = skills.into_iter().collect();

        Ok(profile)
    }
}

/// Mean rating rounded to one decimal place
fn average_rating(sum: u32, count: usize) -> Option<f64> {
    if count == 0 {
        return None;
    }
    let mean = f64::from(sum) / count as f64;
    Some((mean * 10.0).round() / 10.0)
}
