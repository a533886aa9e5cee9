use async_trait::async_trait;
use shared::{
    resume_award, ProgressDelta, ProgressStats, ProgressSummary, UserId, BADGES,
    MOCK_INTERVIEW_POINTS,
};

/// Durable storage for progress records and badge grants.
///
/// The engine is the only caller; implementations hold no business logic.
/// Every method must be safe to call repeatedly and concurrently for the
/// same user: `ensure_record` and `award_badge_if_missing` are
/// insert-if-absent, `apply_delta` is a single atomic read-modify-write.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Creates a zero-valued record for the user if none exists.
    async fn ensure_record(&self, user_id: UserId) -> anyhow::Result<()>;

    /// Returns the current record, initializing it first so the result is
    /// always well-defined.
    async fn get_record(&self, user_id: UserId) -> anyhow::Result<ProgressStats>;

    async fn apply_delta(&self, user_id: UserId, delta: ProgressDelta) -> anyhow::Result<()>;

    /// Badge keys in ascending award-time order.
    async fn list_badges(&self, user_id: UserId) -> anyhow::Result<Vec<String>>;

    async fn award_badge_if_missing(&self, user_id: UserId, badge_key: &str)
        -> anyhow::Result<()>;
}

/// The award rules and badge-eligibility policy on top of a [`ProgressStore`].
///
/// Collaborators call in after their own work succeeds: the interview handler
/// once per submitted mock interview, the resume scorer once per freshly
/// computed score. Badge evaluation runs after every mutation and reads the
/// committed record back, so a crash between the two steps at worst delays a
/// badge until the next award call re-triggers evaluation.
pub struct ProgressEngine<S> {
    store: S,
}

impl<S: ProgressStore> ProgressEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Awards a completed mock interview. Deliberately not idempotent: every
    /// call models one more completed interview and earns the full reward.
    pub async fn award_mock_interview_completed(&self, user_id: UserId) -> anyhow::Result<()> {
        self.store.ensure_record(user_id).await?;
        self.store
            .apply_delta(
                user_id,
                ProgressDelta {
                    points: MOCK_INTERVIEW_POINTS,
                    completed_interview: true,
                    ..Default::default()
                },
            )
            .await?;

        self.check_and_award_badges(user_id).await
    }

    /// Awards points for a resume score if it improves on the recorded
    /// high-water mark; anything else is a complete no-op, which keeps
    /// re-submitting the same resume from farming points.
    pub async fn award_resume_score(&self, user_id: UserId, raw_score: i64) -> anyhow::Result<()> {
        let record = self.store.get_record(user_id).await?;

        let Some(award) = resume_award(record.best_resume_score, raw_score) else {
            return Ok(());
        };

        self.store
            .apply_delta(
                user_id,
                ProgressDelta {
                    points: award.points,
                    best_resume_score: Some(award.new_best),
                    ..Default::default()
                },
            )
            .await?;

        self.check_and_award_badges(user_id).await
    }

    /// Re-evaluates the whole rule table against the freshly committed
    /// record. Idempotent: a badge is inserted at most once per user.
    pub async fn check_and_award_badges(&self, user_id: UserId) -> anyhow::Result<()> {
        let record = self.store.get_record(user_id).await?;
        for rule in BADGES.iter() {
            if (rule.earned)(&record) {
                self.store.award_badge_if_missing(user_id, rule.key).await?;
            }
        }

        Ok(())
    }

    /// Read-only summary for the frontend; never fails with "not found".
    pub async fn get_progress(&self, user_id: UserId) -> anyhow::Result<ProgressSummary> {
        let record = self.store.get_record(user_id).await?;
        let badges = self.store.list_badges(user_id).await?;

        Ok(ProgressSummary::new(record, badges))
    }
}
