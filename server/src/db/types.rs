use serde::{Deserialize, Serialize};
use shared::ProgressStats;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct ProgressRow {
    pub user_id: i32,
    pub points: i32,
    pub best_resume_score: i32,
    pub mock_interviews_completed: i32,
    pub updated_at: chrono::NaiveDateTime,
}

impl From<ProgressRow> for ProgressStats {
    fn from(row: ProgressRow) -> Self {
        Self {
            points: row.points.max(0) as u32,
            best_resume_score: row.best_resume_score.max(0) as u32,
            mock_interviews_completed: row.mock_interviews_completed.max(0) as u32,
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Statistics {
    pub users: i64,
    pub total_points: i64,
    pub badges_awarded: i64,
}
