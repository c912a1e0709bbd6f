use crate::error::{Error, Result};
use chrono::{Datelike, Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// One glass of water in liters.
pub const LITERS_PER_GLASS: f64 = 0.25;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Mood,
    Sleep,
    Hydration,
    Work,
}

impl MetricKind {
    pub const ALL: [MetricKind; 4] = [
        MetricKind::Mood,
        MetricKind::Sleep,
        MetricKind::Hydration,
        MetricKind::Work,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Mood => "mood",
            MetricKind::Sleep => "sleep",
            MetricKind::Hydration => "hydration",
            MetricKind::Work => "work",
        }
    }
}

impl TryFrom<&str> for MetricKind {
    type Error = ();

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "mood" => Ok(MetricKind::Mood),
            "sleep" => Ok(MetricKind::Sleep),
            "hydration" | "water" => Ok(MetricKind::Hydration),
            "work" | "workload" => Ok(MetricKind::Work),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Angry,
    Sad,
    Anxious,
    Neutral,
    Happy,
}

impl Mood {
    /// Numeric value used by the scoring rubric and the mood trend rule.
    pub fn score_value(&self) -> f64 {
        match self {
            Mood::Angry => 1.0,
            Mood::Sad => 2.0,
            Mood::Anxious => 3.0,
            Mood::Neutral => 4.0,
            Mood::Happy => 5.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Angry => "angry",
            Mood::Sad => "sad",
            Mood::Anxious => "anxious",
            Mood::Neutral => "neutral",
            Mood::Happy => "happy",
        }
    }
}

impl TryFrom<&str> for Mood {
    type Error = ();

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "angry" => Ok(Mood::Angry),
            "sad" => Ok(Mood::Sad),
            "anxious" => Ok(Mood::Anxious),
            "neutral" => Ok(Mood::Neutral),
            "happy" => Ok(Mood::Happy),
            _ => Err(()),
        }
    }
}

/// One logged observation, already deserialized by the transport layer.
/// Which value field is present depends on the metric kind; sleep and work
/// share `hours` and are told apart by the list they arrive in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricEntry {
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glasses: Option<u32>,
}

impl MetricEntry {
    pub fn mood(date: NaiveDate, mood: Mood) -> Self {
        Self {
            date,
            mood: Some(mood),
            hours: None,
            glasses: None,
        }
    }

    pub fn sleep(date: NaiveDate, hours: f64) -> Self {
        Self {
            date,
            mood: None,
            hours: Some(hours),
            glasses: None,
        }
    }

    pub fn hydration(date: NaiveDate, glasses: u32) -> Self {
        Self {
            date,
            mood: None,
            hours: None,
            glasses: Some(glasses),
        }
    }

    pub fn work(date: NaiveDate, hours: f64) -> Self {
        Self {
            date,
            mood: None,
            hours: Some(hours),
            glasses: None,
        }
    }

    /// Numeric value of this entry when read as `kind`, `None` when the
    /// entry does not carry that kind's field.
    pub fn value_for(&self, kind: MetricKind) -> Option<f64> {
        match kind {
            MetricKind::Mood => self.mood.map(|m| m.score_value()),
            MetricKind::Sleep | MetricKind::Work => self.hours,
            MetricKind::Hydration => self.glasses.map(|g| g as f64),
        }
    }
}

/// Derived per-kind summary over whatever window the caller supplied.
/// `sample_count == 0` means "no data", not "average 0".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MetricSummary {
    pub average: f64,
    pub sample_count: usize,
}

impl MetricSummary {
    pub const EMPTY: MetricSummary = MetricSummary {
        average: 0.0,
        sample_count: 0,
    };

    pub fn has_samples(&self) -> bool {
        self.sample_count > 0
    }
}

/// Per-kind entry lists as returned by `MetricsSource::fetch_metrics`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricBatch {
    pub mood: Vec<MetricEntry>,
    pub sleep: Vec<MetricEntry>,
    pub hydration: Vec<MetricEntry>,
    pub work: Vec<MetricEntry>,
}

impl MetricBatch {
    pub fn entries_for(&self, kind: MetricKind) -> &[MetricEntry] {
        match kind {
            MetricKind::Mood => &self.mood,
            MetricKind::Sleep => &self.sleep,
            MetricKind::Hydration => &self.hydration,
            MetricKind::Work => &self.work,
        }
    }

    pub fn is_empty(&self) -> bool {
        MetricKind::ALL
            .iter()
            .all(|kind| self.entries_for(*kind).is_empty())
    }
}

/// Inclusive calendar-day window. Time-of-day is discarded for bucketing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(Error::validation(format!(
                "date range start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// The usual dashboard window: today and the 6 days before it.
    pub fn trailing_week(today: NaiveDate) -> Self {
        Self {
            start: today - Duration::days(6),
            end: today,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Mon => "mon",
            Weekday::Tue => "tue",
            Weekday::Wed => "wed",
            Weekday::Thu => "thu",
            Weekday::Fri => "fri",
            Weekday::Sat => "sat",
            Weekday::Sun => "sun",
        }
    }

    pub fn of(date: NaiveDate) -> Self {
        date.weekday().into()
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Mon,
            chrono::Weekday::Tue => Weekday::Tue,
            chrono::Weekday::Wed => Weekday::Wed,
            chrono::Weekday::Thu => Weekday::Thu,
            chrono::Weekday::Fri => Weekday::Fri,
            chrono::Weekday::Sat => Weekday::Sat,
            chrono::Weekday::Sun => Weekday::Sun,
        }
    }
}

impl TryFrom<&str> for Weekday {
    type Error = ();

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "mon" | "monday" => Ok(Weekday::Mon),
            "tue" | "tuesday" => Ok(Weekday::Tue),
            "wed" | "wednesday" => Ok(Weekday::Wed),
            "thu" | "thursday" => Ok(Weekday::Thu),
            "fri" | "friday" => Ok(Weekday::Fri),
            "sat" | "saturday" => Ok(Weekday::Sat),
            "sun" | "sunday" => Ok(Weekday::Sun),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    Water,
    Meal,
    EyeRest,
    Stretch,
    Posture,
    Meditation,
}

impl ReminderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReminderKind::Water => "water",
            ReminderKind::Meal => "meal",
            ReminderKind::EyeRest => "eye_rest",
            ReminderKind::Stretch => "stretch",
            ReminderKind::Posture => "posture",
            ReminderKind::Meditation => "meditation",
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            ReminderKind::Water => "Time for a glass of water",
            ReminderKind::Meal => "Step away and have a proper meal",
            ReminderKind::EyeRest => "Look 20 feet away for 20 seconds",
            ReminderKind::Stretch => "Stand up and stretch for a minute",
            ReminderKind::Posture => "Check your posture",
            ReminderKind::Meditation => "A few minutes of quiet breathing",
        }
    }

    pub fn default_sound(&self) -> Sound {
        match self {
            ReminderKind::Water => Sound::Drop,
            ReminderKind::Meal => Sound::Bell,
            ReminderKind::EyeRest => Sound::Soft,
            ReminderKind::Stretch => Sound::Chime,
            ReminderKind::Posture => Sound::Soft,
            ReminderKind::Meditation => Sound::Bell,
        }
    }
}

impl TryFrom<&str> for ReminderKind {
    type Error = ();

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "water" => Ok(ReminderKind::Water),
            "meal" => Ok(ReminderKind::Meal),
            "eye_rest" | "eye-rest" | "eyerest" => Ok(ReminderKind::EyeRest),
            "stretch" => Ok(ReminderKind::Stretch),
            "posture" => Ok(ReminderKind::Posture),
            "meditation" => Ok(ReminderKind::Meditation),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sound {
    Chime,
    Drop,
    Bell,
    Soft,
}

impl Sound {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sound::Chime => "chime",
            Sound::Drop => "drop",
            Sound::Bell => "bell",
            Sound::Soft => "soft",
        }
    }
}

/// What a caller (or a template pack) asks the store to create.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReminderSpec {
    #[serde(rename = "type")]
    pub kind: ReminderKind,
    #[serde(rename = "time", with = "hhmm")]
    pub time_of_day: NaiveTime,
    #[serde(rename = "days")]
    pub active_days: BTreeSet<Weekday>,
}

impl ReminderSpec {
    pub fn new(
        kind: ReminderKind,
        time_of_day: NaiveTime,
        active_days: BTreeSet<Weekday>,
    ) -> Self {
        Self {
            kind,
            time_of_day,
            active_days,
        }
    }

    /// A reminder with no active day is meaningless; reject at creation.
    pub fn validate(&self) -> Result<()> {
        if self.active_days.is_empty() {
            return Err(Error::validation(format!(
                "{} reminder has no active days",
                self.kind.as_str()
            )));
        }
        Ok(())
    }
}

/// Persisted reminder entity, shaped like the store returns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reminder {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: ReminderKind,
    #[serde(rename = "time", with = "hhmm")]
    pub time_of_day: NaiveTime,
    #[serde(rename = "days")]
    pub active_days: BTreeSet<Weekday>,
    pub enabled: bool,
    pub message: String,
    pub sound: Sound,
}

impl Reminder {
    /// Materialize a spec into a full reminder with per-kind defaults.
    pub fn from_spec(spec: &ReminderSpec) -> Result<Self> {
        spec.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            kind: spec.kind,
            time_of_day: spec.time_of_day,
            active_days: spec.active_days.clone(),
            enabled: true,
            message: spec.kind.default_message().to_string(),
            sound: spec.kind.default_sound(),
        })
    }
}

/// Reminder times travel as "HH:MM" local wall-clock, no seconds.
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(
        time: &NaiveTime,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_mood_score_values() {
        assert_eq!(Mood::Angry.score_value(), 1.0);
        assert_eq!(Mood::Anxious.score_value(), 3.0);
        assert_eq!(Mood::Happy.score_value(), 5.0);
    }

    #[test]
    fn test_kind_round_trips() {
        for kind in MetricKind::ALL {
            assert_eq!(MetricKind::try_from(kind.as_str()), Ok(kind));
        }
        assert_eq!(ReminderKind::try_from("eye_rest"), Ok(ReminderKind::EyeRest));
        assert_eq!(Weekday::try_from("wednesday"), Ok(Weekday::Wed));
        assert!(MetricKind::try_from("steps").is_err());
    }

    #[test]
    fn test_entry_value_for_kind() {
        let entry = MetricEntry::sleep(date(2026, 3, 2), 7.5);
        assert_eq!(entry.value_for(MetricKind::Sleep), Some(7.5));
        assert_eq!(entry.value_for(MetricKind::Mood), None);
        assert_eq!(entry.value_for(MetricKind::Hydration), None);

        let entry = MetricEntry::mood(date(2026, 3, 2), Mood::Sad);
        assert_eq!(entry.value_for(MetricKind::Mood), Some(2.0));
    }

    #[test]
    fn test_reminder_wire_shape() {
        let spec = ReminderSpec::new(
            ReminderKind::Water,
            NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            [Weekday::Mon, Weekday::Fri].into_iter().collect(),
        );
        let reminder = Reminder::from_spec(&spec).unwrap();
        let json = serde_json::to_value(&reminder).unwrap();
        assert_eq!(json["type"], "water");
        assert_eq!(json["time"], "09:30");
        assert_eq!(json["days"], serde_json::json!(["mon", "fri"]));
        assert_eq!(json["enabled"], true);
        assert_eq!(json["sound"], "drop");

        let back: Reminder = serde_json::from_value(json).unwrap();
        assert_eq!(back, reminder);
    }

    #[test]
    fn test_spec_without_days_is_rejected() {
        let spec = ReminderSpec::new(
            ReminderKind::Stretch,
            NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
            BTreeSet::new(),
        );
        assert!(spec.validate().is_err());
        assert!(Reminder::from_spec(&spec).is_err());
    }

    #[test]
    fn test_metric_entry_wire_shape() {
        let entry: MetricEntry =
            serde_json::from_str(r#"{"date":"2026-03-02","glasses":6}"#).unwrap();
        assert_eq!(entry.glasses, Some(6));
        assert_eq!(entry.mood, None);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("mood"));
    }

    #[test]
    fn test_trailing_week_window() {
        let range = DateRange::trailing_week(date(2026, 3, 8));
        assert_eq!(range.start, date(2026, 3, 2));
        assert!(range.contains(date(2026, 3, 2)));
        assert!(range.contains(date(2026, 3, 8)));
        assert!(!range.contains(date(2026, 3, 1)));
        assert!(DateRange::new(date(2026, 3, 8), date(2026, 3, 1)).is_err());
    }
}
