use career_compass_server::db::DB;
use rocket::{serde::json::Json, State};

use super::types::StatisticsResponse;

#[utoipa::path(context_path = "/info", responses(
    (status = 200, description = "Aggregate progress statistics", body = StatisticsResponse)
))]
#[get("/")]
async fn get_statistics(db: &State<DB>) -> Option<Json<StatisticsResponse>> {
    match db.statistics().await {
        Ok(statistics) => Some(Json(statistics.into())),
        Err(e) => {
            rocket::error!("Failed to fetch statistics: {e}");
            None
        }
    }
}

pub fn stage() -> rocket::fairing::AdHoc {
    rocket::fairing::AdHoc::on_ignite("Installing entrypoints", |rocket| async {
        rocket.mount("/info", rocket::routes![get_statistics])
    })
}
