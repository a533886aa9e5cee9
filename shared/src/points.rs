/// Flat reward for every successfully submitted mock interview.
pub const MOCK_INTERVIEW_POINTS: u32 = 20;

/// Every 50 points moves the user up one level; level 1 starts at 0 points.
pub const POINTS_PER_LEVEL: u32 = 50;

const SCORE_BUCKET: u32 = 5;
const POINTS_PER_BUCKET: u32 = 10;

/// Resume scores arrive from an external scoring service and are clamped
/// rather than rejected.
pub fn clamp_score(raw: i64) -> u32 {
    raw.clamp(0, 100) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResumeAward {
    pub new_best: u32,
    pub points: u32,
}

/// Decides whether a freshly computed resume score earns anything.
///
/// Only genuine improvement over the recorded high-water mark is rewarded:
/// 10 points per full 5-point improvement bucket, with the remainder below a
/// bucket earning nothing. Returns `None` when the (clamped) score does not
/// beat `best`, in which case the caller must not mutate anything.
pub fn resume_award(best: u32, raw_score: i64) -> Option<ResumeAward> {
    let new_score = clamp_score(raw_score);
    if new_score <= best {
        return None;
    }

    let improvement = new_score - best;
    Some(ResumeAward {
        new_best: new_score,
        points: improvement / SCORE_BUCKET * POINTS_PER_BUCKET,
    })
}

pub const fn level_for_points(points: u32) -> u32 {
    points / POINTS_PER_LEVEL + 1
}

pub const fn points_for_next_level(level: u32) -> u32 {
    level * POINTS_PER_LEVEL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_are_clamped_to_percent_range() {
        assert_eq!(clamp_score(-5), 0);
        assert_eq!(clamp_score(0), 0);
        assert_eq!(clamp_score(42), 42);
        assert_eq!(clamp_score(100), 100);
        assert_eq!(clamp_score(250), 100);
    }

    #[test]
    fn improvement_buckets() {
        assert_eq!(
            resume_award(0, 37),
            Some(ResumeAward {
                new_best: 37,
                points: 70
            })
        );
        // Two points of improvement is below a full bucket.
        assert_eq!(
            resume_award(37, 39),
            Some(ResumeAward {
                new_best: 39,
                points: 0
            })
        );
        assert_eq!(
            resume_award(39, 44),
            Some(ResumeAward {
                new_best: 44,
                points: 10
            })
        );
        assert_eq!(
            resume_award(0, 100),
            Some(ResumeAward {
                new_best: 100,
                points: 200
            })
        );
    }

    #[test]
    fn no_award_without_improvement() {
        assert_eq!(resume_award(50, 50), None);
        assert_eq!(resume_award(50, 30), None);
        assert_eq!(resume_award(0, 0), None);
        assert_eq!(resume_award(0, -20), None);
        // Clamped score can tie the current best.
        assert_eq!(resume_award(100, 250), None);
    }

    #[test]
    fn level_boundaries() {
        assert_eq!(level_for_points(0), 1);
        assert_eq!(level_for_points(49), 1);
        assert_eq!(level_for_points(50), 2);
        assert_eq!(level_for_points(100), 3);

        assert_eq!(points_for_next_level(level_for_points(0)), 50);
        assert_eq!(points_for_next_level(level_for_points(100)), 150);
    }
}
