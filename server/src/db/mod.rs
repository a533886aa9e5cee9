use rocket::{
    fairing::{self, AdHoc},
    Build, Rocket,
};
use rocket_db_pools::Database;
use shared::{ProgressDelta, ProgressStats, UserId};
use sqlx::PgPool;

pub mod types;

use types::{ProgressRow, Statistics};

use crate::engine::ProgressStore;

#[derive(Database, Clone, Debug)]
#[database("career-compass")]
pub struct DB(PgPool);

#[async_trait::async_trait]
impl ProgressStore for DB {
    async fn ensure_record(&self, user_id: UserId) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO user_progress (user_id, points, best_resume_score, mock_interviews_completed)
            VALUES ($1, 0, 0, 0)
            ON CONFLICT (user_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .execute(&self.0)
        .await?;

        Ok(())
    }

    async fn get_record(&self, user_id: UserId) -> anyhow::Result<ProgressStats> {
        self.ensure_record(user_id).await?;

        let row: ProgressRow = sqlx::query_as(
            r#"
            SELECT user_id, points, best_resume_score, mock_interviews_completed, updated_at
            FROM user_progress
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.0)
        .await?;

        Ok(row.into())
    }

    async fn apply_delta(&self, user_id: UserId, delta: ProgressDelta) -> anyhow::Result<()> {
        // One statement per award call; Postgres serializes concurrent
        // updates on the row, so increments are never lost.
        sqlx::query(
            r#"
            UPDATE user_progress
            SET points = points + $2,
                best_resume_score = GREATEST(best_resume_score, COALESCE($3, best_resume_score)),
                mock_interviews_completed = mock_interviews_completed + $4,
                updated_at = now()
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .bind(delta.points as i32)
        .bind(delta.best_resume_score.map(|score| score as i32))
        .bind(i32::from(delta.completed_interview))
        .execute(&self.0)
        .await?;

        Ok(())
    }

    async fn list_badges(&self, user_id: UserId) -> anyhow::Result<Vec<String>> {
        // `id` breaks ties between badges earned in the same evaluation pass.
        Ok(sqlx::query_scalar(
            r#"
            SELECT badge_key
            FROM user_badges
            WHERE user_id = $1
            ORDER BY earned_at ASC, id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.0)
        .await?)
    }

    async fn award_badge_if_missing(&self, user_id: UserId, badge_key: &str) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO user_badges (user_id, badge_key)
            VALUES ($1, $2)
            ON CONFLICT (user_id, badge_key) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(badge_key)
        .execute(&self.0)
        .await?;

        Ok(())
    }
}

impl DB {
    pub async fn statistics(&self) -> anyhow::Result<Statistics> {
        let rec: Statistics = sqlx::query_as(
            r#"
            SELECT
                (SELECT COUNT(*) FROM user_progress) AS users,
                (SELECT COALESCE(SUM(points), 0) FROM user_progress) AS total_points,
                (SELECT COUNT(*) FROM user_badges) AS badges_awarded
            "#,
        )
        .fetch_one(&self.0)
        .await?;

        Ok(rec)
    }
}

async fn run_migrations(rocket: Rocket<Build>) -> fairing::Result {
    match DB::fetch(&rocket) {
        Some(db) => match sqlx::migrate!("./migrations").run(&**db).await {
            Ok(_) => Ok(rocket),
            Err(e) => {
                rocket::error!("Failed to initialize SQLx database: {}", e);
                Err(rocket)
            }
        },
        None => Err(rocket),
    }
}

pub fn stage() -> AdHoc {
    AdHoc::on_ignite("SQLx Stage", |rocket| async {
        rocket
            .attach(DB::init())
            .attach(AdHoc::try_on_ignite("SQLx Migrations", run_migrations))
    })
}
