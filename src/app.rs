use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/habits", get(handlers::list_habits).post(handlers::create_habit))
        .route(
            "/api/habits/:id",
            put(handlers::update_habit).delete(handlers::delete_habit),
        )
        .route("/api/habits/:id/completions", post(handlers::toggle_completion))
        .route("/api/journal", get(handlers::list_entries).post(handlers::create_entry))
        .route(
            "/api/journal/:id",
            put(handlers::update_entry).delete(handlers::delete_entry),
        )
        .route("/api/focus/sessions", post(handlers::record_session))
        .route("/api/focus/stats", get(handlers::focus_stats))
        .route("/api/notifications", get(handlers::list_notifications))
        .route("/api/notifications/read", post(handlers::read_notifications))
        .route("/api/notifications/clear", post(handlers::clear_all_notifications))
        .route("/api/backup", get(handlers::export_backup))
        .route("/api/restore", post(handlers::restore))
        .with_state(state)
}
