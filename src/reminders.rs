use crate::models::{AppData, InAppNotification};
use crate::state::AppState;
use crate::storage::persist_data;
use chrono::{DateTime, Datelike, Duration, Local, NaiveTime};
use std::sync::Arc;
use tokio::time::{self, MissedTickBehavior};
use tracing::{error, info, warn};
use uuid::Uuid;

pub const TICK_SECONDS: u64 = 10;
const CATCH_UP_WINDOW_HOURS: i64 = 24;

pub const REMINDER_BODY: &str = "This is your scheduled reminder to keep up your streak!";

/// "hh:mm AM/PM", the format reminder times are stored in. Labels are
/// compared as opaque strings.
pub fn time_label(now: DateTime<Local>) -> String {
    now.format("%I:%M %p").to_string()
}

fn parse_time_label(label: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(label, "%I:%M %p").ok()
}

pub fn valid_time_label(label: &str) -> bool {
    parse_time_label(label).is_some()
}

fn day_index(now: DateTime<Local>) -> u8 {
    now.weekday().num_days_from_sunday() as u8
}

/// Composite key identifying one notification instance. Its presence in the
/// dismissal set suppresses regeneration after a bulk clear.
pub fn dismissal_key(habit_id: &str, time: &str, date: &str) -> String {
    format!("{habit_id}-{time}-{date}")
}

/// A reminder slot that matched the current tick, to be forwarded to the
/// platform sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiredReminder {
    pub habit_id: String,
    pub activity: String,
    pub time: String,
}

impl FiredReminder {
    pub fn platform_notification(&self) -> PlatformNotification {
        PlatformNotification {
            title: format!("Time for {}!", self.activity),
            body: REMINDER_BODY.to_string(),
            // The tag lets the platform collapse duplicates for the same slot.
            tag: format!("{}-{}", self.habit_id, self.time),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlatformNotification {
    pub title: String,
    pub body: String,
    pub tag: String,
}

/// Platform-specific notification adapters implement this. Delivery is
/// best-effort; an unavailable sink never blocks the in-app record.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: PlatformNotification);
}

/// Default sink: a structured log line per reminder.
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&self, notification: PlatformNotification) {
        info!(tag = %notification.tag, "{} {}", notification.title, notification.body);
    }
}

/// Appends an in-app notification unless its slot was dismissed or already
/// recorded for this habit/time/date. Newest entries go first.
fn insert_notification(
    data: &mut AppData,
    habit_id: &str,
    activity: &str,
    time: &str,
    date: &str,
    is_missed: bool,
    timestamp: &str,
) -> bool {
    let key = dismissal_key(habit_id, time, date);
    if data.dismissed_notifications.iter().any(|k| k == &key) {
        return false;
    }
    let duplicate = data
        .in_app_notifications
        .iter()
        .any(|n| n.habit_id == habit_id && n.time == time && n.date == date);
    if duplicate {
        return false;
    }

    data.in_app_notifications.insert(
        0,
        InAppNotification {
            id: Uuid::new_v4().to_string(),
            habit_id: habit_id.to_string(),
            activity: activity.to_string(),
            time: time.to_string(),
            date: date.to_string(),
            is_missed,
            read: false,
            timestamp: timestamp.to_string(),
        },
    );
    true
}

/// One scheduler pass. Returns `None` when this minute was already evaluated
/// (the 10-second tick outruns the minute granularity of the labels);
/// otherwise matches every habit's reminder days/times against `now`, records
/// deduplicated in-app notifications, stamps `lastReminderCheck`, and returns
/// the fired slots.
pub fn evaluate_tick(
    data: &mut AppData,
    now: DateTime<Local>,
    last_label: &mut Option<String>,
) -> Option<Vec<FiredReminder>> {
    let label = time_label(now);
    if last_label.as_deref() == Some(label.as_str()) {
        return None;
    }
    *last_label = Some(label.clone());

    let today_index = day_index(now);
    let date = now.date_naive().to_string();
    let stamp = now.to_rfc3339();

    let fired: Vec<FiredReminder> = data
        .habits
        .iter()
        .filter(|habit| {
            !habit.reminders.is_empty()
                && habit.reminders.days.contains(&today_index)
                && habit.reminders.times.iter().any(|t| t == &label)
        })
        .map(|habit| FiredReminder {
            habit_id: habit.id.clone(),
            activity: habit.activity.clone(),
            time: label.clone(),
        })
        .collect();

    for reminder in &fired {
        insert_notification(
            data,
            &reminder.habit_id,
            &reminder.activity,
            &reminder.time,
            &date,
            false,
            &stamp,
        );
    }

    data.last_reminder_check = Some(stamp);
    Some(fired)
}

/// Synthesizes `isMissed` notifications for today's reminder slots that fell
/// strictly between the persisted last check (clamped to the trailing 24
/// hours) and `now`, while the scheduler was not running. Returns how many
/// were inserted.
pub fn catch_up(data: &mut AppData, now: DateTime<Local>) -> usize {
    let Some(raw) = data.last_reminder_check.clone() else {
        return 0;
    };
    let last_check = match DateTime::parse_from_rfc3339(&raw) {
        Ok(stamp) => stamp.with_timezone(&Local),
        Err(err) => {
            warn!("ignoring unparseable lastReminderCheck {raw:?}: {err}");
            return 0;
        }
    };

    let window_start = last_check.max(now - Duration::hours(CATCH_UP_WINDOW_HOURS));
    let today_index = day_index(now);
    let today = now.date_naive();
    let date = today.to_string();
    let stamp = now.to_rfc3339();

    let candidates: Vec<(String, String, String)> = data
        .habits
        .iter()
        .filter(|habit| !habit.reminders.is_empty() && habit.reminders.days.contains(&today_index))
        .flat_map(|habit| {
            habit.reminders.times.iter().filter_map(|label| {
                let slot = today.and_time(parse_time_label(label)?);
                let due = slot > window_start.naive_local() && slot < now.naive_local();
                due.then(|| (habit.id.clone(), habit.activity.clone(), label.clone()))
            })
        })
        .collect();

    let mut inserted = 0;
    for (habit_id, activity, label) in candidates {
        if insert_notification(data, &habit_id, &activity, &label, &date, true, &stamp) {
            inserted += 1;
        }
    }
    inserted
}

/// Bulk clear: every stored notification's key moves into the dismissal set
/// so catch-up cannot resurrect it, the list empties, and the check timestamp
/// advances to `now`.
pub fn clear_notifications(data: &mut AppData, now: DateTime<Local>) {
    for n in &data.in_app_notifications {
        let key = dismissal_key(&n.habit_id, &n.time, &n.date);
        if !data.dismissed_notifications.contains(&key) {
            data.dismissed_notifications.push(key);
        }
    }
    data.in_app_notifications.clear();
    data.last_reminder_check = Some(now.to_rfc3339());
}

pub fn mark_all_read(data: &mut AppData) -> bool {
    let mut changed = false;
    for n in &mut data.in_app_notifications {
        if !n.read {
            n.read = true;
            changed = true;
        }
    }
    changed
}

/// Runs for the lifetime of the process: one catch-up pass, then a 10-second
/// poll evaluating each unique minute once.
pub async fn run_scheduler(state: AppState, sink: Arc<dyn NotificationSink>) {
    {
        let mut data = state.data.lock().await;
        let inserted = catch_up(&mut data, Local::now());
        if inserted > 0 {
            info!("caught up on {inserted} missed reminder(s)");
            if let Err(err) = persist_data(&state.data_path, &data).await {
                error!("failed to persist after catch-up: {}", err.message);
            }
        }
    }

    let mut ticker = time::interval(std::time::Duration::from_secs(TICK_SECONDS));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last_label: Option<String> = None;

    loop {
        ticker.tick().await;
        let now = Local::now();
        let mut data = state.data.lock().await;
        if let Some(fired) = evaluate_tick(&mut data, now, &mut last_label) {
            for reminder in &fired {
                sink.notify(reminder.platform_notification());
            }
            if let Err(err) = persist_data(&state.data_path, &data).await {
                error!("failed to persist after reminder pass: {}", err.message);
            }
        }
    }
}
