use habit_app::reminders::{run_scheduler, LogSink};
use habit_app::streak::refresh_all_derived;
use habit_app::{load_data, resolve_data_path, router, AppState};
use std::{env, net::SocketAddr, sync::Arc};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_path = resolve_data_path()?;
    if let Some(parent) = data_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let mut data = load_data(&data_path).await;
    refresh_all_derived(&mut data.habits);
    let state = AppState::new(data_path, data);

    tokio::spawn(run_scheduler(state.clone(), Arc::new(LogSink)));

    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
