use chrono::{Datelike, Local};
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HabitResponse {
    id: String,
    activity: String,
    all_completions: Vec<String>,
    completed_days: Vec<u8>,
    streak: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JournalEntryResponse {
    id: String,
    context: String,
    content: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FocusStatsResponse {
    cycles: u64,
    duration_seconds: u64,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("habit_app_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/habits")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_habit_app"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn create_habit(client: &Client, base_url: &str, activity: &str) -> HabitResponse {
    client
        .post(format!("{base_url}/api/habits"))
        .json(&serde_json::json!({
            "activity": activity,
            "color": "#a8e6cf",
            "frequency": { "times": 1, "days": 1 },
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_completion_toggle_drives_the_streak() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let habit = create_habit(&client, &server.base_url, "Meditate").await;
    assert_eq!(habit.streak, 0);
    assert!(habit.all_completions.is_empty());

    let toggled: HabitResponse = client
        .post(format!("{}/api/habits/{}/completions", server.base_url, habit.id))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(toggled.streak, 1);
    assert_eq!(toggled.all_completions.len(), 1);

    let today_index = Local::now().weekday().num_days_from_sunday() as u8;
    assert_eq!(toggled.completed_days, vec![today_index]);

    // Toggling the same day off resets the streak.
    let untoggled: HabitResponse = client
        .post(format!("{}/api/habits/{}/completions", server.base_url, habit.id))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(untoggled.streak, 0);
    assert!(untoggled.all_completions.is_empty());
}

#[tokio::test]
async fn http_habit_validation_rejects_bad_input() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let too_long = client
        .post(format!("{}/api/habits", server.base_url))
        .json(&serde_json::json!({
            "activity": "a habit name over limit",
            "color": "#fff",
            "frequency": { "times": 1, "days": 1 },
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(too_long.status(), 400);

    let too_many_times = client
        .post(format!("{}/api/habits", server.base_url))
        .json(&serde_json::json!({
            "activity": "Stretch",
            "color": "#fff",
            "frequency": { "times": 1, "days": 1 },
            "reminders": {
                "days": [1],
                "times": ["09:00 AM", "10:00 AM", "11:00 AM", "12:00 PM"],
            },
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(too_many_times.status(), 400);

    let bad_label = client
        .post(format!("{}/api/habits", server.base_url))
        .json(&serde_json::json!({
            "activity": "Stretch",
            "color": "#fff",
            "frequency": { "times": 1, "days": 1 },
            "reminders": { "days": [1], "times": ["25:00"] },
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(bad_label.status(), 400);
}

#[tokio::test]
async fn http_journal_entries_follow_habit_renames() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let habit = create_habit(&client, &server.base_url, "Read").await;
    let entry: JournalEntryResponse = client
        .post(format!("{}/api/journal", server.base_url))
        .json(&serde_json::json!({ "content": "ten pages", "habitId": habit.id }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(entry.context, "Read");

    let renamed = client
        .put(format!("{}/api/habits/{}", server.base_url, habit.id))
        .json(&serde_json::json!({ "activity": "Read more" }))
        .send()
        .await
        .unwrap();
    assert!(renamed.status().is_success());

    let entries: Vec<JournalEntryResponse> = client
        .get(format!(
            "{}/api/journal?habitId={}",
            server.base_url, habit.id
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, entry.id);
    assert_eq!(entries[0].content, "ten pages");
    // The label tracks the habit's current name instead of going stale.
    assert_eq!(entries[0].context, "Read more");
}

#[tokio::test]
async fn http_focus_sessions_feed_today_stats() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before: FocusStatsResponse = client
        .get(format!(
            "{}/api/focus/stats?timeframe=today&mode=focus",
            server.base_url
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let recorded = client
        .post(format!("{}/api/focus/sessions", server.base_url))
        .json(&serde_json::json!({ "mode": "focus", "durationSeconds": 1500 }))
        .send()
        .await
        .unwrap();
    assert!(recorded.status().is_success());

    let after: FocusStatsResponse = client
        .get(format!(
            "{}/api/focus/stats?timeframe=today&mode=focus",
            server.base_url
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(after.cycles, before.cycles + 1);
    assert_eq!(after.duration_seconds, before.duration_seconds + 1500);
}

#[tokio::test]
async fn http_backup_round_trips_and_rejects_garbage() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    create_habit(&client, &server.base_url, "Hydrate").await;

    let backup: serde_json::Value = client
        .get(format!("{}/api/backup", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(backup["version"], "1.0.0");
    assert!(backup["habits"].is_array());

    let habits_before: Vec<HabitResponse> = client
        .get(format!("{}/api/habits", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let restored = client
        .post(format!("{}/api/restore", server.base_url))
        .json(&backup)
        .send()
        .await
        .unwrap();
    assert!(restored.status().is_success());

    let habits_after: Vec<HabitResponse> = client
        .get(format!("{}/api/habits", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(habits_before.len(), habits_after.len());
    assert!(habits_after.iter().any(|h| h.activity == "Hydrate"));

    let rejected = client
        .post(format!("{}/api/restore", server.base_url))
        .json(&serde_json::json!({ "nope": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(rejected.status(), 400);

    let habits_final: Vec<HabitResponse> = client
        .get(format!("{}/api/habits", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(habits_final.len(), habits_after.len());
}
