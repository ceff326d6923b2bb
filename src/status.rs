//! Pure derivation of watering status from a plant's stored dates.
//!
//! Both functions take `now` explicitly so callers (and tests) control the
//! clock; nothing here reads wall-clock time or touches the store.

use crate::model::Plant;
use chrono::{DateTime, Utc};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WateringStatus {
    Healthy,
    Thirsty,
    Overdue,
}

impl WateringStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WateringStatus::Healthy => "healthy",
            WateringStatus::Thirsty => "thirsty",
            WateringStatus::Overdue => "overdue",
        }
    }
}

/// Derive a plant's care status at `now`.
///
/// Elapsed time since the last watering is counted in whole days, partial
/// days dropped. Strictly fewer elapsed days than the frequency is healthy,
/// exactly the frequency is thirsty, more is overdue.
///
/// If `now` is earlier than `last_watered` (clock skew), the elapsed count
/// goes negative and the plant reads as healthy. That is accepted behavior,
/// not an error.
pub fn compute_status(plant: &Plant, now: DateTime<Utc>) -> WateringStatus {
    let days_since_watering = (now - plant.last_watered).num_days();
    let frequency = i64::from(plant.watering_frequency);

    if days_since_watering < frequency {
        WateringStatus::Healthy
    } else if days_since_watering == frequency {
        WateringStatus::Thirsty
    } else {
        WateringStatus::Overdue
    }
}

/// Whole days until the plant is next due, counted with a ceiling: any
/// partial day remaining rounds up to the next full day.
///
/// Positive means days remaining, zero means due today, negative means days
/// overdue. Note the asymmetry with [`compute_status`], which truncates
/// elapsed days instead; the two must not be unified.
pub fn days_until_watering(plant: &Plant, now: DateTime<Utc>) -> i64 {
    let millis = (plant.next_watering_date - now).num_milliseconds();
    let days = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) > 0 {
        days + 1
    } else {
        days
    }
}
