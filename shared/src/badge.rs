use crate::ProgressStats;

/// A named eligibility predicate over the current progress counters.
///
/// Rules are pure and independent of each other, so evaluation order never
/// changes the outcome; the table order is only the display/audit order in
/// which badges tend to be earned. New badges are appended to the table
/// without touching existing entries.
pub struct BadgeRule {
    pub key: &'static str,
    pub earned: fn(&ProgressStats) -> bool,
}

pub static BADGES: [BadgeRule; 5] = [
    BadgeRule {
        key: "first_steps",
        earned: |p| p.points > 0,
    },
    BadgeRule {
        key: "resume_starter",
        earned: |p| p.best_resume_score > 0,
    },
    BadgeRule {
        key: "interview_rookie",
        earned: |p| p.mock_interviews_completed >= 1,
    },
    BadgeRule {
        key: "interview_regular",
        earned: |p| p.mock_interviews_completed >= 5,
    },
    BadgeRule {
        key: "consistency_100",
        earned: |p| p.points >= 100,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn earned_keys(stats: &ProgressStats) -> Vec<&'static str> {
        BADGES
            .iter()
            .filter(|rule| (rule.earned)(stats))
            .map(|rule| rule.key)
            .collect()
    }

    #[test]
    fn badge_keys_are_unique() {
        let mut keys: Vec<_> = BADGES.iter().map(|rule| rule.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), BADGES.len());
    }

    #[test]
    fn nothing_is_earned_at_zero_state() {
        assert!(earned_keys(&ProgressStats::default()).is_empty());
    }

    #[test]
    fn thresholds_are_inclusive() {
        let four = ProgressStats {
            points: 99,
            best_resume_score: 0,
            mock_interviews_completed: 4,
        };
        assert_eq!(earned_keys(&four), vec!["first_steps", "interview_rookie"]);

        let five = ProgressStats {
            points: 100,
            best_resume_score: 0,
            mock_interviews_completed: 5,
        };
        assert_eq!(
            earned_keys(&five),
            vec![
                "first_steps",
                "interview_rookie",
                "interview_regular",
                "consistency_100"
            ]
        );
    }

    #[test]
    fn resume_starter_tracks_best_score_not_points() {
        // A sub-bucket first improvement sets the high-water mark without
        // awarding any points.
        let stats = ProgressStats {
            points: 0,
            best_resume_score: 3,
            mock_interviews_completed: 0,
        };
        assert_eq!(earned_keys(&stats), vec!["resume_starter"]);
    }
}
