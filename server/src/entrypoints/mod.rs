use rocket::fairing::AdHoc;

pub mod progress;
pub mod statistics;
pub mod types;

pub fn stage() -> AdHoc {
    AdHoc::on_ignite("Installing entrypoints", |rocket| async {
        rocket.attach(progress::stage()).attach(statistics::stage())
    })
}
