use crate::backup::{collect_backup, restore_backup, BackupData};
use crate::errors::AppError;
use crate::models::{
    AppData, EditJournalEntryRequest, FocusMode, FocusSession, Habit, InAppNotification,
    JournalEntry, NewFocusSessionRequest, NewHabitRequest, NewJournalEntryRequest,
    ReminderConfig, ToggleCompletionRequest, UpdateHabitRequest, MAX_ACTIVITY_LEN,
    MAX_REMINDER_TIMES,
};
use crate::reminders::{clear_notifications, mark_all_read, valid_time_label};
use crate::state::AppState;
use crate::stats::{build_focus_stats, FocusStats, Timeframe};
use crate::storage::persist_data;
use crate::streak::refresh_derived_at;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use uuid::Uuid;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    let date = today_string();
    let unread = data.in_app_notifications.iter().filter(|n| !n.read).count();
    Html(render_index(&date, data.habits.len(), unread))
}

// Habits

pub async fn list_habits(State(state): State<AppState>) -> Result<Json<Vec<Habit>>, AppError> {
    let mut data = state.data.lock().await;
    refresh_habits(&mut data);
    Ok(Json(data.habits.clone()))
}

pub async fn create_habit(
    State(state): State<AppState>,
    Json(payload): Json<NewHabitRequest>,
) -> Result<Json<Habit>, AppError> {
    let activity = validate_activity(&payload.activity)?;
    validate_frequency(payload.frequency.times, payload.frequency.days)?;
    validate_reminders(&payload.reminders)?;

    let habit = Habit {
        id: Uuid::new_v4().to_string(),
        activity,
        color: payload.color,
        frequency: payload.frequency,
        measurement: payload.measurement,
        all_completions: Vec::new(),
        completed_days: Vec::new(),
        streak: 0,
        display_mode: payload.display_mode,
        reminders: payload.reminders,
    };

    let mut data = state.data.lock().await;
    data.habits.push(habit.clone());
    persist_data(&state.data_path, &data).await?;
    Ok(Json(habit))
}

pub async fn update_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateHabitRequest>,
) -> Result<Json<Habit>, AppError> {
    if let Some(activity) = &payload.activity {
        validate_activity(activity)?;
    }
    if let Some(frequency) = &payload.frequency {
        validate_frequency(frequency.times, frequency.days)?;
    }
    if let Some(reminders) = &payload.reminders {
        validate_reminders(reminders)?;
    }

    let mut data = state.data.lock().await;
    let habit = data
        .habits
        .iter_mut()
        .find(|h| h.id == id)
        .ok_or_else(|| AppError::not_found("no such habit"))?;

    if let Some(activity) = payload.activity {
        habit.activity = activity.trim().to_string();
    }
    if let Some(color) = payload.color {
        habit.color = color;
    }
    if let Some(frequency) = payload.frequency {
        habit.frequency = frequency;
    }
    if let Some(measurement) = payload.measurement {
        habit.measurement = Some(measurement);
    }
    if let Some(display_mode) = payload.display_mode {
        habit.display_mode = display_mode;
    }
    if let Some(reminders) = payload.reminders {
        habit.reminders = reminders;
    }
    refresh_derived_at(Local::now().date_naive(), habit);
    let updated = habit.clone();

    persist_data(&state.data_path, &data).await?;
    Ok(Json(updated))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    let before = data.habits.len();
    data.habits.retain(|h| h.id != id);
    if data.habits.len() == before {
        return Err(AppError::not_found("no such habit"));
    }
    persist_data(&state.data_path, &data).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Toggles one day's completion. The derived streak and week projection are
/// recomputed before the updated habit is returned.
pub async fn toggle_completion(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Option<Json<ToggleCompletionRequest>>,
) -> Result<Json<Habit>, AppError> {
    let date = match payload.and_then(|Json(body)| body.date) {
        Some(raw) => {
            NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                .map_err(|_| AppError::bad_request("date must be yyyy-MM-dd"))?;
            raw
        }
        None => today_string(),
    };

    let mut data = state.data.lock().await;
    let habit = data
        .habits
        .iter_mut()
        .find(|h| h.id == id)
        .ok_or_else(|| AppError::not_found("no such habit"))?;

    if habit.all_completions.iter().any(|d| d == &date) {
        habit.all_completions.retain(|d| d != &date);
    } else {
        habit.all_completions.push(date);
    }
    refresh_derived_at(Local::now().date_naive(), habit);
    let updated = habit.clone();

    persist_data(&state.data_path, &data).await?;
    Ok(Json(updated))
}

// Journal

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalQuery {
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub habit_id: Option<String>,
}

pub async fn list_entries(
    State(state): State<AppState>,
    Query(query): Query<JournalQuery>,
) -> Result<Json<Vec<JournalEntry>>, AppError> {
    let data = state.data.lock().await;
    let entries: Vec<JournalEntry> = data
        .journal_entries
        .iter()
        .rev() // append-only store, so reversed is newest-first
        .map(|entry| with_live_context(entry, &data.habits))
        .filter(|entry| match (&query.habit_id, &query.context) {
            (Some(habit_id), _) => entry.habit_id.as_deref() == Some(habit_id.as_str()),
            (None, Some(context)) => &entry.context == context,
            (None, None) => true,
        })
        .collect();
    Ok(Json(entries))
}

pub async fn create_entry(
    State(state): State<AppState>,
    Json(payload): Json<NewJournalEntryRequest>,
) -> Result<Json<JournalEntry>, AppError> {
    let content = payload.content.trim().to_string();
    if content.is_empty() {
        return Err(AppError::bad_request("entry content must not be empty"));
    }

    let mut data = state.data.lock().await;
    let context = match &payload.habit_id {
        Some(habit_id) => data
            .habits
            .iter()
            .find(|h| &h.id == habit_id)
            .map(|h| h.activity.clone())
            .ok_or_else(|| AppError::not_found("no such habit"))?,
        None => "Journal".to_string(),
    };

    let entry = JournalEntry {
        id: Uuid::new_v4().to_string(),
        habit_id: payload.habit_id,
        context,
        date: Local::now().to_rfc3339(),
        content,
    };
    data.journal_entries.push(entry.clone());
    persist_data(&state.data_path, &data).await?;
    Ok(Json(entry))
}

pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<EditJournalEntryRequest>,
) -> Result<Json<JournalEntry>, AppError> {
    let content = payload.content.trim().to_string();
    if content.is_empty() {
        return Err(AppError::bad_request("entry content must not be empty"));
    }

    let mut data = state.data.lock().await;
    let edited = {
        let entry = data
            .journal_entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::not_found("no such entry"))?;
        entry.content = content;
        entry.clone()
    };
    let updated = with_live_context(&edited, &data.habits);

    persist_data(&state.data_path, &data).await?;
    Ok(Json(updated))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    let before = data.journal_entries.len();
    data.journal_entries.retain(|e| e.id != id);
    if data.journal_entries.len() == before {
        return Err(AppError::not_found("no such entry"));
    }
    persist_data(&state.data_path, &data).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// The stored context is only a label; when the entry is linked to a habit,
/// the habit's current activity name wins.
fn with_live_context(entry: &JournalEntry, habits: &[Habit]) -> JournalEntry {
    let mut refreshed = entry.clone();
    if let Some(habit_id) = &entry.habit_id {
        if let Some(habit) = habits.iter().find(|h| &h.id == habit_id) {
            refreshed.context = habit.activity.clone();
        }
    }
    refreshed
}

// Focus sessions

pub async fn record_session(
    State(state): State<AppState>,
    Json(payload): Json<NewFocusSessionRequest>,
) -> Result<Json<FocusSession>, AppError> {
    if payload.duration_seconds == 0 {
        return Err(AppError::bad_request("durationSeconds must be positive"));
    }

    let session = FocusSession {
        id: Uuid::new_v4().to_string(),
        mode: payload.mode,
        duration_seconds: payload.duration_seconds,
        timestamp: Local::now().to_rfc3339(),
    };

    let mut data = state.data.lock().await;
    data.focus_sessions.push(session.clone());
    persist_data(&state.data_path, &data).await?;
    Ok(Json(session))
}

#[derive(Debug, Deserialize, Default)]
pub struct FocusStatsQuery {
    #[serde(default)]
    pub timeframe: Timeframe,
    #[serde(default)]
    pub mode: FocusMode,
}

pub async fn focus_stats(
    State(state): State<AppState>,
    Query(query): Query<FocusStatsQuery>,
) -> Result<Json<FocusStats>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(build_focus_stats(
        &data.focus_sessions,
        query.timeframe,
        query.mode,
    )))
}

// Notifications

pub async fn list_notifications(
    State(state): State<AppState>,
) -> Result<Json<Vec<InAppNotification>>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(data.in_app_notifications.clone()))
}

pub async fn read_notifications(
    State(state): State<AppState>,
) -> Result<Json<Vec<InAppNotification>>, AppError> {
    let mut data = state.data.lock().await;
    if mark_all_read(&mut data) {
        persist_data(&state.data_path, &data).await?;
    }
    Ok(Json(data.in_app_notifications.clone()))
}

pub async fn clear_all_notifications(
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    clear_notifications(&mut data, Local::now());
    persist_data(&state.data_path, &data).await?;
    Ok(StatusCode::NO_CONTENT)
}

// Backup

pub async fn export_backup(State(state): State<AppState>) -> Result<Json<BackupData>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(collect_backup(&data, Local::now())))
}

pub async fn restore(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    restore_backup(&mut data, payload)?;
    persist_data(&state.data_path, &data).await?;
    Ok(StatusCode::NO_CONTENT)
}

// Shared helpers

fn today_string() -> String {
    Local::now().date_naive().to_string()
}

fn refresh_habits(data: &mut AppData) {
    let today = Local::now().date_naive();
    for habit in &mut data.habits {
        refresh_derived_at(today, habit);
    }
}

fn validate_activity(raw: &str) -> Result<String, AppError> {
    let activity = raw.trim();
    if activity.is_empty() {
        return Err(AppError::bad_request("activity must not be empty"));
    }
    if activity.chars().count() > MAX_ACTIVITY_LEN {
        return Err(AppError::bad_request(format!(
            "activity must be at most {MAX_ACTIVITY_LEN} characters"
        )));
    }
    Ok(activity.to_string())
}

fn validate_frequency(times: u32, days: u32) -> Result<(), AppError> {
    if times == 0 || days == 0 {
        return Err(AppError::bad_request("frequency times and days must be at least 1"));
    }
    Ok(())
}

fn validate_reminders(reminders: &ReminderConfig) -> Result<(), AppError> {
    if reminders.times.len() > MAX_REMINDER_TIMES {
        return Err(AppError::bad_request(format!(
            "at most {MAX_REMINDER_TIMES} reminder times"
        )));
    }
    if reminders.days.iter().any(|day| *day > 6) {
        return Err(AppError::bad_request("reminder days must be 0-6 (0 = Sunday)"));
    }
    if let Some(label) = reminders.times.iter().find(|t| !valid_time_label(t)) {
        return Err(AppError::bad_request(format!(
            "reminder time {label:?} is not an hh:mm AM/PM label"
        )));
    }
    Ok(())
}
