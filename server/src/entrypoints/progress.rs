use career_compass_server::{db::DB, engine::ProgressEngine};
use rocket::{serde::json::Json, State};
use tracing::instrument;

use super::types::{ProgressResponse, ResumeScoreRequest};

#[utoipa::path(context_path = "/api/progress", responses(
    (status = 200, description = "Current progress for the user", body = ProgressResponse)
))]
#[get("/<user_id>")]
async fn get_progress(user_id: i32, db: &State<DB>) -> Option<Json<ProgressResponse>> {
    let engine = ProgressEngine::new(db.inner().clone());
    match engine.get_progress(user_id).await {
        Ok(summary) => Some(Json(summary.into())),
        Err(e) => {
            rocket::error!("Failed to load progress for user {user_id}: {e}");
            None
        }
    }
}

/// Called by the interview collaborator once per successfully submitted mock
/// interview; failed or aborted submissions must not hit this route.
#[utoipa::path(context_path = "/api/progress", responses(
    (status = 200, description = "Updated progress after the interview award", body = ProgressResponse)
))]
#[post("/<user_id>/interview")]
#[instrument(skip(db))]
async fn interview_completed(user_id: i32, db: &State<DB>) -> Option<Json<ProgressResponse>> {
    let engine = ProgressEngine::new(db.inner().clone());
    if let Err(e) = engine.award_mock_interview_completed(user_id).await {
        rocket::error!("Failed to award completed interview for user {user_id}: {e}");
        return None;
    }

    match engine.get_progress(user_id).await {
        Ok(summary) => Some(Json(summary.into())),
        Err(e) => {
            rocket::error!("Failed to load progress for user {user_id}: {e}");
            None
        }
    }
}

/// Called by the resume-scoring collaborator whenever a fresh score is
/// available. Non-improving scores are accepted and silently ignored.
#[utoipa::path(context_path = "/api/progress", responses(
    (status = 200, description = "Updated progress after the resume-score award", body = ProgressResponse)
))]
#[post("/<user_id>/resume-score", data = "<request>")]
#[instrument(skip(db, request))]
async fn resume_scored(
    user_id: i32,
    request: Json<ResumeScoreRequest>,
    db: &State<DB>,
) -> Option<Json<ProgressResponse>> {
    let engine = ProgressEngine::new(db.inner().clone());
    if let Err(e) = engine.award_resume_score(user_id, request.score).await {
        rocket::error!("Failed to award resume score for user {user_id}: {e}");
        return None;
    }

    match engine.get_progress(user_id).await {
        Ok(summary) => Some(Json(summary.into())),
        Err(e) => {
            rocket::error!("Failed to load progress for user {user_id}: {e}");
            None
        }
    }
}

pub fn stage() -> rocket::fairing::AdHoc {
    rocket::fairing::AdHoc::on_ignite("Installing entrypoints", |rocket| async {
        rocket.mount(
            "/api/progress",
            rocket::routes![get_progress, interview_completed, resume_scored],
        )
    })
}
