use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog entry describing a category of houseplant.
///
/// `default_frequency` is the suggested days between waterings for the
/// category. It only seeds the add form; tracked plants keep whatever
/// frequency they were created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlantType {
    pub name: &'static str,
    pub emoji: &'static str,
    pub default_frequency: u32,
}

/// The static plant type catalog, in display order.
pub static PLANT_TYPES: Lazy<Vec<PlantType>> = Lazy::new(|| {
    vec![
        PlantType { name: "Succulent", emoji: "🌵", default_frequency: 7 },
        PlantType { name: "Fern", emoji: "🌿", default_frequency: 3 },
        PlantType { name: "Flowering Plant", emoji: "🌸", default_frequency: 2 },
        PlantType { name: "Herb", emoji: "🌱", default_frequency: 2 },
        PlantType { name: "Tree", emoji: "🌳", default_frequency: 5 },
        PlantType { name: "Vine", emoji: "🍃", default_frequency: 3 },
        PlantType { name: "Cactus", emoji: "🌵", default_frequency: 14 },
        PlantType { name: "Orchid", emoji: "🌺", default_frequency: 4 },
    ]
});

/// Look up a catalog entry by name, case-insensitively.
pub fn plant_type_by_name(name: &str) -> Option<&'static PlantType> {
    PLANT_TYPES
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
}

/// A tracked plant.
///
/// Serialized field names keep the camelCase schema of older data files,
/// with timestamps as RFC 3339 strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: Uuid,
    pub name: String,
    /// Catalog type name chosen at creation. Not re-validated against the
    /// catalog afterwards.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Copied from the catalog entry at creation, never re-derived.
    pub emoji: String,
    /// Days between waterings, fixed after creation.
    pub watering_frequency: u32,
    pub last_watered: DateTime<Utc>,
    /// Always `last_watered + watering_frequency` days. Recomputed on every
    /// watering, never set independently.
    pub next_watering_date: DateTime<Utc>,
    pub added_date: DateTime<Utc>,
}

/// Input for the add operation: a plant before the store assigns its
/// `id`, `added_date` and `next_watering_date`.
#[derive(Debug, Clone)]
pub struct PlantDraft {
    pub name: String,
    pub type_name: String,
    pub emoji: String,
    pub watering_frequency: u32,
    pub last_watered: DateTime<Utc>,
}

impl PlantDraft {
    pub fn new(
        name: impl Into<String>,
        plant_type: &PlantType,
        watering_frequency: u32,
        last_watered: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: plant_type.name.to_string(),
            emoji: plant_type.emoji.to_string(),
            watering_frequency,
            last_watered,
        }
    }
}

/// The one place the watering-date invariant is computed.
pub fn next_watering_date(last_watered: DateTime<Utc>, frequency_days: u32) -> DateTime<Utc> {
    last_watered + Duration::days(i64::from(frequency_days))
}
