use crate::domain::models::{Reminder, ReminderSpec, Weekday};
use crate::error::{Error, Result};
use chrono::{Duration, NaiveDateTime, NaiveTime};
use std::collections::BTreeSet;

/// Next future firing instant for a daily-time-on-weekdays recurrence,
/// relative to `now`. Local wall-clock, no timezone math.
///
/// Fires today when today's weekday is active and the time is still strictly
/// ahead; otherwise the first active weekday within the next 7 days. The
/// bounded scan is the guard against a misconfigured day set — an empty set
/// is an error, never a loop.
pub fn next_occurrence(
    time_of_day: NaiveTime,
    active_days: &BTreeSet<Weekday>,
    now: NaiveDateTime,
) -> Result<NaiveDateTime> {
    if active_days.is_empty() {
        return Err(Error::validation("active day set is empty"));
    }

    if active_days.contains(&Weekday::of(now.date())) {
        let today_fire = now.date().and_time(time_of_day);
        if today_fire > now {
            return Ok(today_fire);
        }
    }

    for offset in 1..=7 {
        let day = now.date() + Duration::days(offset);
        if active_days.contains(&Weekday::of(day)) {
            return Ok(day.and_time(time_of_day));
        }
    }

    // Unreachable: a 7-day scan visits every weekday once.
    Err(Error::validation("no active day within the next 7 days"))
}

impl Reminder {
    pub fn next_occurrence(&self, now: NaiveDateTime) -> Result<NaiveDateTime> {
        next_occurrence(self.time_of_day, &self.active_days, now)
    }
}

impl ReminderSpec {
    pub fn next_occurrence(&self, now: NaiveDateTime) -> Result<NaiveDateTime> {
        next_occurrence(self.time_of_day, &self.active_days, now)
    }
}
