use chrono::{DateTime, Duration, TimeZone, Utc};
use plantpal::model::{plant_type_by_name, PlantDraft};
use plantpal::status::{compute_status, WateringStatus};
use plantpal::store::json_file::JsonFileBackend;
use plantpal::store::PlantStore;
use std::fs;
use tempfile::TempDir;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()
}

fn open(dir: &TempDir) -> (PlantStore<JsonFileBackend>, bool) {
    let (store, report) = PlantStore::open(JsonFileBackend::new(dir.path())).unwrap();
    (store, report.discarded_corrupt)
}

#[test]
fn collection_survives_reopening() {
    let dir = TempDir::new().unwrap();

    let (mut store, _) = open(&dir);
    let fern = store
        .add_plant(
            PlantDraft::new("Freddy", plant_type_by_name("Fern").unwrap(), 3, t0()),
            t0(),
        )
        .unwrap();
    let cactus = store
        .add_plant(
            PlantDraft::new("Spike", plant_type_by_name("Cactus").unwrap(), 14, t0()),
            t0() + Duration::minutes(5),
        )
        .unwrap();
    drop(store);

    let (reloaded, discarded) = open(&dir);
    assert!(!discarded);
    // Field-for-field equality, timestamps included, in insertion order.
    assert_eq!(reloaded.plants(), &[fern, cactus]);
}

#[test]
fn missing_file_opens_empty() {
    let dir = TempDir::new().unwrap();
    let (store, discarded) = open(&dir);
    assert!(!discarded);
    assert!(store.plants().is_empty());
}

#[test]
fn corrupt_file_is_discarded_and_reported() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("plants.json"), "{{{ definitely not json").unwrap();

    let (mut store, discarded) = open(&dir);
    assert!(discarded);
    assert!(store.plants().is_empty());

    // The store stays usable; the next mutation replaces the corrupt file.
    store
        .add_plant(
            PlantDraft::new("Freddy", plant_type_by_name("Fern").unwrap(), 3, t0()),
            t0(),
        )
        .unwrap();
    let (reloaded, discarded) = open(&dir);
    assert!(!discarded);
    assert_eq!(reloaded.plants().len(), 1);
}

#[test]
fn delete_is_reflected_in_durable_storage() {
    let dir = TempDir::new().unwrap();
    let (mut store, _) = open(&dir);
    let fern = store
        .add_plant(
            PlantDraft::new("Freddy", plant_type_by_name("Fern").unwrap(), 3, t0()),
            t0(),
        )
        .unwrap();
    assert!(store.delete_plant(fern.id).unwrap());
    drop(store);

    let (reloaded, _) = open(&dir);
    assert!(reloaded.plants().is_empty());
}

#[test]
fn watering_lifecycle_end_to_end() {
    let dir = TempDir::new().unwrap();
    let (mut store, _) = open(&dir);

    let fern = store
        .add_plant(
            PlantDraft::new("Fern", plant_type_by_name("Fern").unwrap(), 3, t0()),
            t0(),
        )
        .unwrap();
    assert_eq!(fern.next_watering_date, t0() + Duration::days(3));

    // Three days later the plant hits its boundary day.
    let due_day = t0() + Duration::days(3);
    assert_eq!(compute_status(&fern, due_day), WateringStatus::Thirsty);

    let watered = store.water_plant(fern.id, due_day).unwrap().unwrap();
    assert_eq!(watered.last_watered, due_day);
    assert_eq!(watered.next_watering_date, t0() + Duration::days(6));
    assert_eq!(compute_status(&watered, due_day), WateringStatus::Healthy);

    // The new dates are what got persisted.
    let (reloaded, _) = open(&dir);
    assert_eq!(reloaded.plants()[0], watered);
}
