use crate::errors::AppError;
use crate::models::{AppData, Habit, InAppNotification, JournalEntry};
use crate::streak::refresh_derived_at;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

pub const BACKUP_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupData {
    pub habits: Vec<Habit>,
    #[serde(default)]
    pub journal_entries: Vec<JournalEntry>,
    #[serde(default)]
    pub notifications: BackupNotifications,
    pub version: String,
    pub export_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BackupNotifications {
    #[serde(default)]
    pub in_app: Vec<InAppNotification>,
    #[serde(default)]
    pub dismissed: Vec<String>,
}

/// Snapshot for export. Focus sessions and the reminder-check timestamp are
/// device-local and stay out of the backup.
pub fn collect_backup(data: &AppData, now: DateTime<Local>) -> BackupData {
    BackupData {
        habits: data.habits.clone(),
        journal_entries: data.journal_entries.clone(),
        notifications: BackupNotifications {
            in_app: data.in_app_notifications.clone(),
            dismissed: data.dismissed_notifications.clone(),
        },
        version: BACKUP_VERSION.to_string(),
        export_date: now.to_rfc3339(),
    }
}

/// Validates a backup document and overwrites the covered collections. The
/// check is structural: a top-level object whose `habits` is an array. Any
/// other shape is rejected before a single field is touched.
pub fn restore_backup(data: &mut AppData, raw: serde_json::Value) -> Result<(), AppError> {
    if !raw.is_object() {
        return Err(AppError::bad_request("backup must be a JSON object"));
    }
    if !raw.get("habits").is_some_and(|h| h.is_array()) {
        return Err(AppError::bad_request("backup is missing a habits array"));
    }

    let backup: BackupData = serde_json::from_value(raw)
        .map_err(|err| AppError::bad_request(format!("unreadable backup: {err}")))?;

    data.habits = backup.habits;
    data.journal_entries = backup.journal_entries;
    data.in_app_notifications = backup.notifications.in_app;
    data.dismissed_notifications = backup.notifications.dismissed;

    let today = Local::now().date_naive();
    for habit in &mut data.habits {
        refresh_derived_at(today, habit);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DisplayMode, Frequency, ReminderConfig};
    use chrono::TimeZone;

    fn sample_data() -> AppData {
        AppData {
            habits: vec![Habit {
                id: "h1".to_string(),
                activity: "Read".to_string(),
                color: "#FFD3B6".to_string(),
                frequency: Frequency { times: 1, days: 1 },
                measurement: None,
                all_completions: vec![Local::now().date_naive().to_string()],
                completed_days: Vec::new(),
                streak: 0,
                display_mode: DisplayMode::Streak,
                reminders: ReminderConfig::default(),
            }],
            journal_entries: vec![JournalEntry {
                id: "j1".to_string(),
                habit_id: Some("h1".to_string()),
                context: "Read".to_string(),
                date: "2026-01-19T08:00:00+00:00".to_string(),
                content: "ten pages".to_string(),
            }],
            dismissed_notifications: vec!["h1-09:00 AM-2026-01-18".to_string()],
            last_reminder_check: Some("2026-01-19T08:00:00+00:00".to_string()),
            ..AppData::default()
        }
    }

    #[test]
    fn round_trip_restores_an_equivalent_state() {
        let source = sample_data();
        let now = Local.with_ymd_and_hms(2026, 1, 19, 12, 0, 0).unwrap();
        let backup = collect_backup(&source, now);
        assert_eq!(backup.version, BACKUP_VERSION);

        let mut target = AppData::default();
        let raw = serde_json::to_value(&backup).unwrap();
        restore_backup(&mut target, raw).unwrap();

        assert_eq!(target.habits.len(), 1);
        assert_eq!(target.habits[0].activity, "Read");
        // Derived fields are recomputed on restore, not trusted from the file.
        assert_eq!(target.habits[0].streak, 1);
        assert_eq!(target.journal_entries.len(), 1);
        assert_eq!(target.dismissed_notifications, source.dismissed_notifications);
    }

    #[test]
    fn restore_preserves_local_only_collections() {
        let mut target = sample_data();
        target.focus_sessions = vec![crate::models::FocusSession {
            id: "f1".to_string(),
            mode: crate::models::FocusMode::Focus,
            duration_seconds: 1500,
            timestamp: "2026-01-19T09:00:00+00:00".to_string(),
        }];

        let raw = serde_json::json!({
            "habits": [],
            "journalEntries": [],
            "notifications": { "inApp": [], "dismissed": [] },
            "version": "1.0.0",
            "exportDate": "2026-01-19T12:00:00+00:00",
        });
        restore_backup(&mut target, raw).unwrap();

        assert!(target.habits.is_empty());
        assert_eq!(target.focus_sessions.len(), 1);
        assert!(target.last_reminder_check.is_some());
    }

    #[test]
    fn malformed_backups_are_rejected_without_partial_writes() {
        let mut target = sample_data();
        let before = serde_json::to_value(&target).unwrap();

        assert!(restore_backup(&mut target, serde_json::json!([1, 2, 3])).is_err());
        assert!(restore_backup(&mut target, serde_json::json!({"habits": "no"})).is_err());
        assert!(restore_backup(&mut target, serde_json::json!({"version": "1.0.0"})).is_err());

        assert_eq!(serde_json::to_value(&target).unwrap(), before);
    }

    #[test]
    fn missing_optional_sections_default_to_empty() {
        let mut target = sample_data();
        restore_backup(
            &mut target,
            serde_json::json!({ "habits": [], "version": "1.0.0", "exportDate": "x" }),
        )
        .unwrap();

        assert!(target.habits.is_empty());
        assert!(target.journal_entries.is_empty());
        assert!(target.in_app_notifications.is_empty());
        assert!(target.dismissed_notifications.is_empty());
    }
}
