use career_compass_server::db::types::Statistics;
use serde::{Deserialize, Serialize};
use shared::ProgressSummary;
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ProgressResponse {
    pub points: u32,
    pub level: u32,
    pub next_level_points: u32,
    pub best_resume_score: u32,
    pub mock_interviews_completed: u32,
    pub badges: Vec<String>,
}

impl From<ProgressSummary> for ProgressResponse {
    fn from(summary: ProgressSummary) -> Self {
        Self {
            points: summary.points,
            level: summary.level,
            next_level_points: summary.next_level_points,
            best_resume_score: summary.best_resume_score,
            mock_interviews_completed: summary.mock_interviews_completed,
            badges: summary.badges,
        }
    }
}

/// Body of the resume-scored event. The score is clamped to [0, 100] by the
/// engine, so upstream services can post raw values.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ResumeScoreRequest {
    pub score: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct StatisticsResponse {
    pub users: u64,
    pub total_points: u64,
    pub badges_awarded: u64,
}

impl From<Statistics> for StatisticsResponse {
    fn from(statistics: Statistics) -> Self {
        Self {
            users: statistics.users.max(0) as u64,
            total_points: statistics.total_points.max(0) as u64,
            badges_awarded: statistics.badges_awarded.max(0) as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use shared::ProgressStats;

    use super::*;

    #[test]
    fn progress_response_shape() {
        let summary = ProgressSummary::new(ProgressStats::default(), vec![]);
        let response: ProgressResponse = summary.into();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "points": 0,
                "level": 1,
                "next_level_points": 50,
                "best_resume_score": 0,
                "mock_interviews_completed": 0,
                "badges": [],
            })
        );
    }
}
