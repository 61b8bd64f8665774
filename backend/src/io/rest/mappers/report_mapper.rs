use crate::domain::models::ExposureReport as DomainReport;
use shared::ExposureReport as SharedReport;

/// Flattens the domain report into the served shape
pub struct ReportMapper;

impl ReportMapper {
    pub fn to_dto(domain: DomainReport) -> SharedReport {
        let DomainReport {
            child_id,
            child_name,
            profile,
            insights,
        } = domain;

        SharedReport {
            child_id,
            child_name,
            total_activities: profile.total_activities,
            average_rating: profile.average_rating,
            intelligence_exposure: profile.intelligence_exposure,
            subject_exposure: profile.subject_exposure,
            strengths: insights
                .strengths
                .iter()
                .map(|intelligence| intelligence.name().to_string())
                .collect(),
            recommendations: insights.recommendations,
            skills_developed: profile.skills_developed,
        }
    }
}
