use crate::models::{FocusMode, FocusSession};
use crate::streak::week_start;
use chrono::{DateTime, Datelike, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    #[default]
    Today,
    Week,
    Month,
    Total,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusStats {
    pub cycles: u64,
    pub duration_seconds: u64,
}

pub fn build_focus_stats(
    sessions: &[FocusSession],
    timeframe: Timeframe,
    mode: FocusMode,
) -> FocusStats {
    build_focus_stats_at(Local::now(), sessions, timeframe, mode)
}

/// Sessions with unparseable timestamps are skipped; the week window starts
/// on Sunday, matching the reminder day indexing.
pub fn build_focus_stats_at(
    now: DateTime<Local>,
    sessions: &[FocusSession],
    timeframe: Timeframe,
    mode: FocusMode,
) -> FocusStats {
    let today = now.date_naive();
    let week_from = week_start(today);

    let mut cycles = 0;
    let mut duration_seconds = 0;
    for session in sessions {
        if session.mode != mode {
            continue;
        }
        let Ok(stamp) = DateTime::parse_from_rfc3339(&session.timestamp) else {
            continue;
        };
        let date = stamp.with_timezone(&Local).date_naive();
        let included = match timeframe {
            Timeframe::Today => date == today,
            Timeframe::Week => date >= week_from && date <= today,
            Timeframe::Month => date.month() == today.month() && date.year() == today.year(),
            Timeframe::Total => true,
        };
        if included {
            cycles += 1;
            duration_seconds += session.duration_seconds;
        }
    }

    FocusStats {
        cycles,
        duration_seconds,
    }
}

pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn session(mode: FocusMode, secs: u64, stamp: &str) -> FocusSession {
        FocusSession {
            id: stamp.to_string(),
            mode,
            duration_seconds: secs,
            timestamp: stamp.to_string(),
        }
    }

    fn now() -> DateTime<Local> {
        // Monday 2026-01-19, 12:00 local.
        Local.with_ymd_and_hms(2026, 1, 19, 12, 0, 0).unwrap()
    }

    fn rfc3339(y: i32, m: u32, d: u32, h: u32) -> String {
        Local
            .with_ymd_and_hms(y, m, d, h, 0, 0)
            .unwrap()
            .to_rfc3339()
    }

    #[test]
    fn filters_by_mode_and_timeframe() {
        let sessions = vec![
            session(FocusMode::Focus, 1500, &rfc3339(2026, 1, 19, 9)),
            session(FocusMode::Break, 300, &rfc3339(2026, 1, 19, 10)),
            session(FocusMode::Focus, 1500, &rfc3339(2026, 1, 18, 9)), // Sunday, this week
            session(FocusMode::Focus, 1500, &rfc3339(2026, 1, 10, 9)), // this month only
            session(FocusMode::Focus, 1500, &rfc3339(2025, 12, 31, 9)), // total only
        ];

        let today = build_focus_stats_at(now(), &sessions, Timeframe::Today, FocusMode::Focus);
        assert_eq!(today.cycles, 1);
        assert_eq!(today.duration_seconds, 1500);

        let week = build_focus_stats_at(now(), &sessions, Timeframe::Week, FocusMode::Focus);
        assert_eq!(week.cycles, 2);

        let month = build_focus_stats_at(now(), &sessions, Timeframe::Month, FocusMode::Focus);
        assert_eq!(month.cycles, 3);

        let total = build_focus_stats_at(now(), &sessions, Timeframe::Total, FocusMode::Focus);
        assert_eq!(total.cycles, 4);
        assert_eq!(total.duration_seconds, 6000);

        let breaks = build_focus_stats_at(now(), &sessions, Timeframe::Today, FocusMode::Break);
        assert_eq!(breaks.cycles, 1);
        assert_eq!(breaks.duration_seconds, 300);
    }

    #[test]
    fn unparseable_timestamps_are_skipped() {
        let sessions = vec![session(FocusMode::Focus, 1500, "garbage")];
        let stats = build_focus_stats_at(now(), &sessions, Timeframe::Total, FocusMode::Focus);
        assert_eq!(stats.cycles, 0);
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(0), "0m");
        assert_eq!(format_duration(59), "0m");
        assert_eq!(format_duration(300), "5m");
        assert_eq!(format_duration(3900), "1h 5m");
    }
}
