use serde::{Deserialize, Serialize};

mod badge;
mod points;

pub use badge::*;
pub use points::*;

pub type UserId = i32;

/// The per-user counters the award rules and badge predicates evaluate over.
/// All three values are monotonically non-decreasing; `best_resume_score` is
/// a high-water mark in [0, 100].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressStats {
    pub points: u32,
    pub best_resume_score: u32,
    pub mock_interviews_completed: u32,
}

/// One atomic mutation against a user's progress record. The storage layer
/// applies the whole delta in a single statement; `best_resume_score` is only
/// ever raised, never overwritten downwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressDelta {
    pub points: u32,
    pub best_resume_score: Option<u32>,
    pub completed_interview: bool,
}

/// Read-only projection returned to the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub points: u32,
    pub level: u32,
    pub next_level_points: u32,
    pub best_resume_score: u32,
    pub mock_interviews_completed: u32,
    pub badges: Vec<String>,
}

impl ProgressSummary {
    pub fn new(stats: ProgressStats, badges: Vec<String>) -> Self {
        let level = level_for_points(stats.points);
        Self {
            points: stats.points,
            level,
            // Threshold of the level after the current one's start, not
            // "points remaining". Kept as-is for frontend compatibility.
            next_level_points: points_for_next_level(level),
            best_resume_score: stats.best_resume_score,
            mock_interviews_completed: stats.mock_interviews_completed,
            badges,
        }
    }
}
