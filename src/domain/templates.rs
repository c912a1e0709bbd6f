//! Static catalog of reminder template packs, versioned with the crate.

use crate::domain::models::{ReminderKind, ReminderSpec, Weekday};
use chrono::NaiveTime;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeSet;

/// Named bundle of reminder specs, applied in order as one batch.
#[derive(Debug, Clone, Serialize)]
pub struct TemplatePack {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub specs: Vec<ReminderSpec>,
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("catalog time out of range")
}

fn weekdays() -> BTreeSet<Weekday> {
    [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ]
    .into_iter()
    .collect()
}

fn every_day() -> BTreeSet<Weekday> {
    [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ]
    .into_iter()
    .collect()
}

static CATALOG: Lazy<Vec<TemplatePack>> = Lazy::new(|| {
    vec![
        TemplatePack {
            id: "hydration_kickstart",
            name: "Hydration Kickstart",
            description: "Four water breaks spread across the workday.",
            specs: vec![
                ReminderSpec::new(ReminderKind::Water, hm(9, 0), weekdays()),
                ReminderSpec::new(ReminderKind::Water, hm(11, 30), weekdays()),
                ReminderSpec::new(ReminderKind::Water, hm(14, 0), weekdays()),
                ReminderSpec::new(ReminderKind::Water, hm(16, 30), weekdays()),
            ],
        },
        TemplatePack {
            id: "desk_care",
            name: "Desk Care",
            description: "Eye rest, stretching and posture checks for long desk sessions.",
            specs: vec![
                ReminderSpec::new(ReminderKind::EyeRest, hm(10, 30), weekdays()),
                ReminderSpec::new(ReminderKind::Stretch, hm(11, 0), weekdays()),
                ReminderSpec::new(ReminderKind::Posture, hm(14, 0), weekdays()),
                ReminderSpec::new(ReminderKind::EyeRest, hm(15, 30), weekdays()),
                ReminderSpec::new(ReminderKind::Stretch, hm(16, 0), weekdays()),
            ],
        },
        TemplatePack {
            id: "daily_balance",
            name: "Daily Balance",
            description: "A light everyday routine: breathing, a proper lunch, water.",
            specs: vec![
                ReminderSpec::new(ReminderKind::Meditation, hm(7, 30), every_day()),
                ReminderSpec::new(ReminderKind::Water, hm(10, 0), every_day()),
                ReminderSpec::new(ReminderKind::Meal, hm(12, 30), every_day()),
                ReminderSpec::new(ReminderKind::Water, hm(15, 0), every_day()),
            ],
        },
    ]
});

pub fn catalog() -> &'static [TemplatePack] {
    &CATALOG
}

pub fn find_pack(id: &str) -> Option<&'static TemplatePack> {
    CATALOG.iter().find(|pack| pack.id == id)
}
