use serde::{Deserialize, Serialize};

/// Everything the app persists, serialized as one JSON document. Field names
/// match the storage keys the UI and backup format use.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AppData {
    pub habits: Vec<Habit>,
    pub journal_entries: Vec<JournalEntry>,
    pub focus_sessions: Vec<FocusSession>,
    pub in_app_notifications: Vec<InAppNotification>,
    pub dismissed_notifications: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reminder_check: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub activity: String,
    pub color: String,
    pub frequency: Frequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurement: Option<Measurement>,
    /// One `yyyy-MM-dd` entry per completed day. Duplicates are tolerated on
    /// input and collapsed by the streak engine.
    #[serde(default)]
    pub all_completions: Vec<String>,
    /// 0-6 indexes (0 = Sunday) of completions in the week containing today.
    /// Derived from `all_completions`, refreshed on every mutation and on load.
    #[serde(default)]
    pub completed_days: Vec<u8>,
    /// Cached output of the streak engine, refreshed alongside `completed_days`.
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub display_mode: DisplayMode,
    #[serde(default)]
    pub reminders: ReminderConfig,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Frequency {
    pub times: u32,
    pub days: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measurement {
    pub value: String,
    pub unit: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Count,
    Streak,
}

/// Days use 0 = Sunday .. 6 = Saturday; times are "hh:mm AM/PM" labels,
/// at most `MAX_REMINDER_TIMES` of them.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReminderConfig {
    #[serde(default)]
    pub days: Vec<u8>,
    #[serde(default)]
    pub times: Vec<String>,
}

impl ReminderConfig {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty() || self.times.is_empty()
    }
}

pub const MAX_ACTIVITY_LEN: usize = 15;
pub const MAX_REMINDER_TIMES: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    /// Authoritative link to a habit; `context` is only a display label.
    /// Absent for freeform entries under the "Journal" context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub habit_id: Option<String>,
    pub context: String,
    pub date: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusSession {
    pub id: String,
    pub mode: FocusMode,
    pub duration_seconds: u64,
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FocusMode {
    #[default]
    Focus,
    Break,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InAppNotification {
    pub id: String,
    pub habit_id: String,
    pub activity: String,
    /// "hh:mm AM/PM" label of the slot that fired.
    pub time: String,
    /// "yyyy-MM-dd" of the day it fired.
    pub date: String,
    #[serde(default)]
    pub is_missed: bool,
    #[serde(default)]
    pub read: bool,
    pub timestamp: String,
}

// Request bodies. Responses reuse the persisted types directly.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHabitRequest {
    pub activity: String,
    pub color: String,
    pub frequency: Frequency,
    #[serde(default)]
    pub measurement: Option<Measurement>,
    #[serde(default)]
    pub display_mode: DisplayMode,
    #[serde(default)]
    pub reminders: ReminderConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHabitRequest {
    #[serde(default)]
    pub activity: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub frequency: Option<Frequency>,
    #[serde(default)]
    pub measurement: Option<Measurement>,
    #[serde(default)]
    pub display_mode: Option<DisplayMode>,
    #[serde(default)]
    pub reminders: Option<ReminderConfig>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ToggleCompletionRequest {
    /// "yyyy-MM-dd"; defaults to today.
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJournalEntryRequest {
    pub content: String,
    #[serde(default)]
    pub habit_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EditJournalEntryRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFocusSessionRequest {
    pub mode: FocusMode,
    pub duration_seconds: u64,
}
