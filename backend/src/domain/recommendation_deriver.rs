//! Strengths and recommendations derived from an exposure profile.
//!
//! The rules live behind [`RecommendationPolicy`] so that a different
//! policy can be swapped in without touching report assembly. The default
//! [`BalancedExposurePolicy`] compares every intelligence against the mean
//! exposure:
//!
//! - a **strength** is an intelligence with a non-zero count at or above the
//!   mean, ordered by count descending and then canonical order
//! - a **gap** is an intelligence strictly below the mean; the three weakest
//!   gaps each get a recommendation
//! - one catalogue subject that has never been explored is suggested,
//!   preferring a subject matching the child's interests
//! - an average rating below 3.0 adds a suggestion to lean on interests

use std::sync::Arc;

use shared::Intelligence;

use crate::domain::models::{ExposureInsights, ExposureProfile};

/// Subjects the activity generator offers
pub const SUBJECT_CATALOGUE: [&str; 10] = [
    "Mathematics",
    "Science",
    "Literature",
    "Arts",
    "Music",
    "History",
    "Geography",
    "Physical Education",
    "Technology",
    "Languages",
];

/// Most intelligence gaps reported at once
pub const MAX_GAP_RECOMMENDATIONS: usize = 3;

/// Average rating under which interest-led activities are suggested
pub const LOW_RATING_THRESHOLD: f64 = 3.0;

/// Rules turning a profile into strengths and recommendations.
/// Implementations must be pure.
pub trait RecommendationPolicy: Send + Sync {
    fn strengths(&self, profile: &ExposureProfile) -> Vec<Intelligence>;

    fn recommendations(&self, profile: &ExposureProfile, interests: &[String]) -> Vec<String>;
}

/// Default policy favouring an even spread across all intelligences
#[derive(Debug, Clone, Copy, Default)]
pub struct BalancedExposurePolicy;

impl BalancedExposurePolicy {
    fn example_activities(intelligence: Intelligence) -> &'static str {
        match intelligence {
            Intelligence::Linguistic => "writing stories, debating or explaining concepts aloud",
            Intelligence::LogicalMathematical => {
                "solving puzzles, running simple experiments or working with numbers"
            }
            Intelligence::Spatial => "drawing, building with blocks or reading maps",
            Intelligence::BodilyKinesthetic => "dancing, sports or hands-on crafting",
            Intelligence::Musical => "singing, playing instruments or finding patterns in music",
            Intelligence::Interpersonal => "group games, role play or resolving conflicts together",
            Intelligence::Intrapersonal => "journaling, setting personal goals or self-reflection",
            Intelligence::Naturalistic => {
                "caring for plants or animals, nature walks or sorting natural objects"
            }
        }
    }

    fn gap_recommendation(intelligence: Intelligence, count: u32) -> String {
        if count == 0 {
            format!(
                "{} intelligence hasn't been explored yet. Try activities like {}.",
                intelligence,
                Self::example_activities(intelligence)
            )
        } else {
            format!(
                "Build more {} intelligence with activities like {}.",
                intelligence,
                Self::example_activities(intelligence)
            )
        }
    }

    fn getting_started(interests: &[String]) -> Vec<String> {
        let mut recommendations = vec![
            "Generate a first activity to start building this exposure report.".to_string(),
            "Mix different intelligences and subjects early on to discover what sparks curiosity."
                .to_string(),
        ];
        if let Some(interest) = interests.first() {
            recommendations.push(format!(
                "Start with an activity built around {} to make the first session fun.",
                interest
            ));
        }
        recommendations
    }

    fn unexplored_subject(profile: &ExposureProfile, interests: &[String]) -> Option<&'static str> {
        let explored = |subject: &str| {
            profile
                .subject_exposure
                .keys()
                .any(|seen| seen.eq_ignore_ascii_case(subject))
        };
        let unexplored: Vec<&'static str> = SUBJECT_CATALOGUE
            .iter()
            .copied()
            .filter(|subject| !explored(subject))
            .collect();

        unexplored
            .iter()
            .copied()
            .find(|subject| interests.iter().any(|interest| matches_interest(subject, interest)))
            .or_else(|| unexplored.first().copied())
    }
}

/// Case-insensitive containment in either direction
fn matches_interest(subject: &str, interest: &str) -> bool {
    let subject = subject.to_lowercase();
    let interest = interest.trim().to_lowercase();
    !interest.is_empty() && (subject.contains(&interest) || interest.contains(&subject))
}

impl RecommendationPolicy for BalancedExposurePolicy {
    fn strengths(&self, profile: &ExposureProfile) -> Vec<Intelligence> {
        let mean = profile.intelligence_exposure.mean();
        let mut strengths: Vec<(Intelligence, u32)> = profile
            .intelligence_exposure
            .iter()
            .filter(|(_, count)| *count > 0 && f64::from(*count) >= mean)
            .collect();
        // Stable sort keeps canonical order among equal counts
        strengths.sort_by(|a, b| b.1.cmp(&a.1));
        strengths.into_iter().map(|(intelligence, _)| intelligence).collect()
    }

    fn recommendations(&self, profile: &ExposureProfile, interests: &[String]) -> Vec<String> {
        if profile.total_activities == 0 {
            return Self::getting_started(interests);
        }

        let mean = profile.intelligence_exposure.mean();
        let mut gaps: Vec<(Intelligence, u32)> = profile
            .intelligence_exposure
            .iter()
            .filter(|(_, count)| f64::from(*count) < mean)
            .collect();
        gaps.sort_by(|a, b| a.1.cmp(&b.1));

        let mut recommendations: Vec<String> = gaps
            .into_iter()
            .take(MAX_GAP_RECOMMENDATIONS)
            .map(|(intelligence, count)| Self::gap_recommendation(intelligence, count))
            .collect();

        if recommendations.is_empty() {
            recommendations.push(
                "Exposure is well balanced across all intelligences. Keep mixing activity types."
                    .to_string(),
            );
        }

        if let Some(subject) = Self::unexplored_subject(profile, interests) {
            recommendations.push(format!(
                "No {} activities yet. Try one to broaden subject coverage.",
                subject
            ));
        }

        if let Some(rating) = profile.average_rating {
            if rating < LOW_RATING_THRESHOLD {
                let message = if interests.is_empty() {
                    "Ratings have been low. Try shorter activities on a subject your child picks."
                        .to_string()
                } else {
                    format!(
                        "Ratings have been low. Try activities built around {}.",
                        interests.join(", ")
                    )
                };
                recommendations.push(message);
            }
        }

        recommendations
    }
}

/// Applies a [`RecommendationPolicy`] to a profile
#[derive(Clone)]
pub struct RecommendationDeriver {
    policy: Arc<dyn RecommendationPolicy>,
}

impl RecommendationDeriver {
    pub fn new(policy: Arc<dyn RecommendationPolicy>) -> Self {
        Self { policy }
    }

    pub fn derive(&self, profile: &ExposureProfile, interests: &[String]) -> ExposureInsights {
        ExposureInsights {
            strengths: self.policy.strengths(profile),
            recommendations: self.policy.recommendations(profile, interests),
        }
    }
}

impl Default for RecommendationDeriver {
    fn default() -> Self {
        Self::new(Arc::new(BalancedExposurePolicy))
    }
}
