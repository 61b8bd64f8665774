use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// One of the eight Multiple Intelligences used to tag activities.
///
/// Declaration order is the canonical taxonomy order; `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Intelligence {
    Linguistic,
    #[serde(rename = "Logical-Mathematical")]
    LogicalMathematical,
    Spatial,
    #[serde(rename = "Bodily-Kinesthetic")]
    BodilyKinesthetic,
    Musical,
    Interpersonal,
    Intrapersonal,
    Naturalistic,
}

impl Intelligence {
    /// Number of intelligences in the taxonomy
    pub const COUNT: usize = 8;

    /// Every intelligence in canonical order
    pub const ALL: [Intelligence; Intelligence::COUNT] = [
        Intelligence::Linguistic,
        Intelligence::LogicalMathematical,
        Intelligence::Spatial,
        Intelligence::BodilyKinesthetic,
        Intelligence::Musical,
        Intelligence::Interpersonal,
        Intelligence::Intrapersonal,
        Intelligence::Naturalistic,
    ];

    /// Wire name, e.g. "Logical-Mathematical"
    pub fn name(&self) -> &'static str {
        match self {
            Intelligence::Linguistic => "Linguistic",
            Intelligence::LogicalMathematical => "Logical-Mathematical",
            Intelligence::Spatial => "Spatial",
            Intelligence::BodilyKinesthetic => "Bodily-Kinesthetic",
            Intelligence::Musical => "Musical",
            Intelligence::Interpersonal => "Interpersonal",
            Intelligence::Intrapersonal => "Intrapersonal",
            Intelligence::Naturalistic => "Naturalistic",
        }
    }

    /// Position in the canonical order
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Intelligence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Intelligence {
    type Err = IntelligenceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Intelligence::ALL
            .iter()
            .copied()
            .find(|intelligence| intelligence.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| IntelligenceParseError(trimmed.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntelligenceParseError(pub String);

impl fmt::Display for IntelligenceParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown intelligence: {}", self.0)
    }
}

impl std::error::Error for IntelligenceParseError {}

/// Activity count per intelligence.
///
/// Backed by a fixed array indexed by [`Intelligence`], so every intelligence
/// always has an entry. Serializes as a JSON object in canonical order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntelligenceExposure {
    counts: [u32; Intelligence::COUNT],
}

impl IntelligenceExposure {
    pub fn get(&self, intelligence: Intelligence) -> u32 {
        self.counts[intelligence.index()]
    }

    /// Count one more activity tagging `intelligence`
    pub fn record(&mut self, intelligence: Intelligence) {
        self.counts[intelligence.index()] += 1;
    }

    /// Sum of all counts, i.e. the number of (activity, intelligence) pairs
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Mean count across the whole taxonomy, zeros included
    pub fn mean(&self) -> f64 {
        f64::from(self.total()) / Intelligence::COUNT as f64
    }

    /// `(intelligence, count)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Intelligence, u32)> + '_ {
        Intelligence::ALL
            .iter()
            .map(move |intelligence| (*intelligence, self.get(*intelligence)))
    }
}

impl Serialize for IntelligenceExposure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Intelligence::COUNT))?;
        for (intelligence, count) in self.iter() {
            map.serialize_entry(intelligence.name(), &count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for IntelligenceExposure {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, u32>::deserialize(deserializer)?;
        let mut exposure = IntelligenceExposure::default();
        for (name, count) in raw {
            let intelligence = name.parse::<Intelligence>().map_err(de::Error::custom)?;
            exposure.counts[intelligence.index()] = count;
        }
        Ok(exposure)
    }
}

/// A generated learning activity as exposed over the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    /// Owning child, absent for activities generated by guests
    pub child_id: Option<String>,
    pub age: u8,
    pub title: String,
    pub description: String,
    pub subjects: Vec<String>,
    pub intelligences: Vec<Intelligence>,
    pub tools: Vec<String>,
    pub instructions: Vec<String>,
    pub materials_required: Vec<String>,
    pub skills: Vec<String>,
    pub learning_outcomes: Vec<String>,
    pub created_at: String, // RFC 3339 timestamp
}

/// Request for recording an activity produced by the content generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordActivityRequest {
    #[serde(default)]
    pub child_id: Option<String>,
    pub age: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub subjects: Vec<String>,
    /// Intelligence names; unknown names are rejected by validation
    pub intelligences: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub materials_required: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub learning_outcomes: Vec<String>,
}

/// Parent feedback on a completed activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: String,
    pub activity_id: String,
    pub child_id: Option<String>,
    pub rating: u8,
    pub experience: String,
    pub outcomes: String,
    pub suggestions: Option<String>,
    pub created_at: String, // RFC 3339 timestamp
}

/// Request for submitting feedback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitFeedbackRequest {
    pub activity_id: String,
    /// Accepted for client compatibility; the stored value comes from the activity
    #[serde(default)]
    pub child_id: Option<String>,
    /// 1-5; 0 is the client's "unset" value and is rejected
    pub rating: i32,
    pub experience: String,
    pub outcomes: String,
    #[serde(default)]
    pub suggestions: Option<String>,
}

/// Response after submitting feedback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitFeedbackResponse {
    pub message: String,
    pub id: String,
}

/// Represents a child profile owned by a parent account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Child {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub grade: Option<String>,
    pub interests: Vec<String>,
    pub created_at: String, // RFC 3339 timestamp
    pub updated_at: String, // RFC 3339 timestamp
}

/// Request for creating a new child
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateChildRequest {
    pub name: String,
    pub age: u32,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

/// Request for updating an existing child
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateChildRequest {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub grade: Option<String>,
    pub interests: Option<Vec<String>>,
}

/// Response after creating or updating a child
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChildResponse {
    pub child: Child,
    pub success_message: String,
}

/// Aggregate exposure report for one child
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposureReport {
    pub child_id: String,
    pub child_name: String,
    pub total_activities: u32,
    /// Mean feedback rating rounded to one decimal, null without feedback
    pub average_rating: Option<f64>,
    pub intelligence_exposure: IntelligenceExposure,
    pub subject_exposure: BTreeMap<String, u32>,
    pub strengths: Vec<String>,
    pub recommendations: Vec<String>,
    pub skills_developed: Vec<String>,
}

/// Plain message body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intelligence_names_round_trip_through_from_str() {
        for intelligence in Intelligence::ALL {
            let parsed: Intelligence = intelligence.name().parse().unwrap();
            assert_eq!(parsed, intelligence);
        }

        // Case and surrounding whitespace are tolerated
        assert_eq!(
            " logical-mathematical ".parse::<Intelligence>().unwrap(),
            Intelligence::LogicalMathematical
        );
        assert!("Emotional".parse::<Intelligence>().is_err());
    }

    #[test]
    fn test_intelligence_index_matches_canonical_order() {
        for (position, intelligence) in Intelligence::ALL.iter().enumerate() {
            assert_eq!(intelligence.index(), position);
        }
        assert!(Intelligence::Linguistic < Intelligence::Naturalistic);
    }

    #[test]
    fn test_intelligence_serde_uses_wire_names() {
        let json = serde_json::to_string(&Intelligence::BodilyKinesthetic).unwrap();
        assert_eq!(json, "\"Bodily-Kinesthetic\"");

        let parsed: Intelligence = serde_json::from_str("\"Logical-Mathematical\"").unwrap();
        assert_eq!(parsed, Intelligence::LogicalMathematical);
    }

    #[test]
    fn test_empty_exposure_serializes_all_keys_in_canonical_order() {
        let exposure = IntelligenceExposure::default();
        let json = serde_json::to_string(&exposure).unwrap();

        assert_eq!(
            json,
            "{\"Linguistic\":0,\"Logical-Mathematical\":0,\"Spatial\":0,\
             \"Bodily-Kinesthetic\":0,\"Musical\":0,\"Interpersonal\":0,\
             \"Intrapersonal\":0,\"Naturalistic\":0}"
        );
    }

    #[test]
    fn test_exposure_record_and_total() {
        let mut exposure = IntelligenceExposure::default();
        exposure.record(Intelligence::Musical);
        exposure.record(Intelligence::Musical);
        exposure.record(Intelligence::Spatial);

        assert_eq!(exposure.get(Intelligence::Musical), 2);
        assert_eq!(exposure.get(Intelligence::Spatial), 1);
        assert_eq!(exposure.get(Intelligence::Linguistic), 0);
        assert_eq!(exposure.total(), 3);
        assert!((exposure.mean() - 0.375).abs() < f64::EPSILON);
    }

    #[test]
    fn test_exposure_deserialize_fills_missing_keys() {
        let exposure: IntelligenceExposure =
            serde_json::from_str("{\"Musical\": 4, \"Naturalistic\": 1}").unwrap();

        assert_eq!(exposure.get(Intelligence::Musical), 4);
        assert_eq!(exposure.get(Intelligence::Naturalistic), 1);
        assert_eq!(exposure.iter().count(), Intelligence::COUNT);
        assert_eq!(exposure.total(), 5);
    }

    #[test]
    fn test_exposure_deserialize_rejects_unknown_intelligence() {
        let result = serde_json::from_str::<IntelligenceExposure>("{\"Emotional\": 1}");
        assert!(result.is_err());
    }

    #[test]
    fn test_report_serializes_missing_rating_as_null() {
        let report = ExposureReport {
            child_id: "c1".to_string(),
            child_name: "Ada".to_string(),
            total_activities: 0,
            average_rating: None,
            intelligence_exposure: IntelligenceExposure::default(),
            subject_exposure: BTreeMap::new(),
            strengths: vec![],
            recommendations: vec!["Start exploring".to_string()],
            skills_developed: vec![],
        };

        let value = serde_json::to_value(&report).unwrap();
        assert!(value["average_rating"].is_null());
        assert_eq!(value["intelligence_exposure"].as_object().unwrap().len(), 8);
        assert_eq!(value["subject_exposure"], serde_json::json!({}));
    }
}
