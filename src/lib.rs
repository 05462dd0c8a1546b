pub mod app;
pub mod backup;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod reminders;
pub mod state;
pub mod stats;
pub mod storage;
pub mod streak;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_data, resolve_data_path};
