use crate::models::Habit;
use chrono::{Datelike, Duration, Local, NaiveDate};
use std::collections::BTreeSet;

/// Count of consecutive calendar days with a completion, ending today or
/// yesterday. A most recent completion two or more days old breaks the streak.
pub fn compute_streak(completions: &[String]) -> u32 {
    compute_streak_at(Local::now().date_naive(), completions)
}

pub fn compute_streak_at(today: NaiveDate, completions: &[String]) -> u32 {
    // Parsing into a set collapses duplicates and drops malformed entries.
    let days: BTreeSet<NaiveDate> = completions
        .iter()
        .filter_map(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
        .collect();

    let mut sorted = days.into_iter().rev();
    let Some(most_recent) = sorted.next() else {
        return 0;
    };
    if (today - most_recent).num_days() > 1 {
        return 0;
    }

    let mut streak = 1;
    let mut prev = most_recent;
    for current in sorted {
        if (prev - current).num_days() == 1 {
            streak += 1;
            prev = current;
        } else {
            break;
        }
    }
    streak
}

pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// 0-6 indexes (0 = Sunday) of completions falling in the week containing
/// `today`.
pub fn completed_week_days_at(today: NaiveDate, completions: &[String]) -> Vec<u8> {
    let start = week_start(today);
    let mut indexes: BTreeSet<u8> = BTreeSet::new();
    for raw in completions {
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            let offset = (date - start).num_days();
            if (0..7).contains(&offset) {
                indexes.insert(offset as u8);
            }
        }
    }
    indexes.into_iter().collect()
}

/// Re-derives `streak` and `completed_days` from `all_completions`. Called on
/// every mutation path and on load, so consumers never see a stale projection.
pub fn refresh_derived_at(today: NaiveDate, habit: &mut Habit) {
    habit.streak = compute_streak_at(today, &habit.all_completions);
    habit.completed_days = completed_week_days_at(today, &habit.all_completions);
}

pub fn refresh_all_derived(habits: &mut [Habit]) {
    let today = Local::now().date_naive();
    for habit in habits {
        refresh_derived_at(today, habit);
    }
}
