//! # Storage Layer
//!
//! The [`StorageBackend`] trait handles the "how" of persistence (one raw
//! payload under a fixed location), while [`PlantStore`] handles the "what":
//! it owns the canonical in-memory collection and is the only mutation
//! surface.
//!
//! ## Implementations
//!
//! - [`json_file::JsonFileBackend`]: production storage, a single
//!   `plants.json` written atomically.
//! - [`memory::MemBackend`]: in-memory storage for tests, with optional
//!   write-error simulation.
//!
//! ## Write discipline
//!
//! Every mutation serializes and writes the entire collection; there are no
//! delta writes. A mutation only commits to the in-memory collection
//! after the backend write succeeds, so a failed write leaves both the
//! collection and the durable payload as they were.

use crate::error::{PlantError, Result};
use crate::model::{next_watering_date, Plant, PlantDraft};
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub mod json_file;
pub mod memory;

/// Abstract interface for raw storage I/O: a single payload under a fixed
/// key, read whole and written whole.
pub trait StorageBackend {
    /// Read the stored payload. `Ok(None)` when nothing has been stored yet;
    /// `Err` only on actual I/O failure.
    fn read(&self) -> Result<Option<String>>;

    /// Write the payload, replacing any previous one. Must not leave a
    /// partially written payload behind on failure.
    fn write(&self, payload: &str) -> Result<()>;
}

/// What happened while loading the collection at startup.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoadReport {
    /// A stored payload existed but did not deserialize; it was discarded
    /// and the store started empty. Callers should surface this to the user.
    pub discarded_corrupt: bool,
}

/// Owner of the canonical plant collection, kept in insertion order and
/// synchronized with a [`StorageBackend`] on every mutation.
///
/// All operations take `now` explicitly rather than reading the clock, so
/// the watering flow can be tested at fixed instants.
pub struct PlantStore<B: StorageBackend> {
    backend: B,
    plants: Vec<Plant>,
}

impl<B: StorageBackend> PlantStore<B> {
    /// Load the collection from the backend.
    ///
    /// A missing payload yields an empty store. A corrupt payload also
    /// yields an empty store, flagged in the [`LoadReport`] — the previous
    /// data is effectively lost, which is the documented recovery behavior,
    /// not a silent one. I/O errors propagate.
    pub fn open(backend: B) -> Result<(Self, LoadReport)> {
        let mut report = LoadReport::default();
        let plants = match backend.read()? {
            None => Vec::new(),
            Some(payload) => match serde_json::from_str::<Vec<Plant>>(&payload) {
                Ok(plants) => plants,
                Err(_) => {
                    report.discarded_corrupt = true;
                    Vec::new()
                }
            },
        };
        Ok((Self { backend, plants }, report))
    }

    /// The collection in insertion order.
    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    /// Register a new plant from `draft`, appending it to the collection.
    ///
    /// Assigns a fresh id, stamps `added_date = now` and computes
    /// `next_watering_date` from the draft's `last_watered`. Rejects drafts
    /// with an empty (post-trim) name or a zero frequency; the UI checks
    /// these too, but the store is the last line of defense.
    pub fn add_plant(&mut self, draft: PlantDraft, now: DateTime<Utc>) -> Result<Plant> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(PlantError::InvalidDraft("name must not be empty".into()));
        }
        if draft.watering_frequency < 1 {
            return Err(PlantError::InvalidDraft(
                "watering frequency must be at least 1 day".into(),
            ));
        }

        let plant = Plant {
            id: Uuid::new_v4(),
            name: name.to_string(),
            type_name: draft.type_name,
            emoji: draft.emoji,
            watering_frequency: draft.watering_frequency,
            last_watered: draft.last_watered,
            next_watering_date: next_watering_date(draft.last_watered, draft.watering_frequency),
            added_date: now,
        };

        let mut next = self.plants.clone();
        next.push(plant.clone());
        self.commit(next)?;
        Ok(plant)
    }

    /// Record a watering at `now` for the plant with `id`.
    ///
    /// The entry is replaced in place, keeping its position. Returns the
    /// updated plant, or `Ok(None)` if no plant has that id (a no-op, not
    /// an error).
    pub fn water_plant(&mut self, id: Uuid, now: DateTime<Utc>) -> Result<Option<Plant>> {
        let Some(pos) = self.plants.iter().position(|p| p.id == id) else {
            return Ok(None);
        };

        let mut next = self.plants.clone();
        next[pos].last_watered = now;
        next[pos].next_watering_date = next_watering_date(now, next[pos].watering_frequency);
        let updated = next[pos].clone();
        self.commit(next)?;
        Ok(Some(updated))
    }

    /// Remove the plant with `id`. Returns whether anything was removed;
    /// an unknown id is a no-op.
    pub fn delete_plant(&mut self, id: Uuid) -> Result<bool> {
        if !self.plants.iter().any(|p| p.id == id) {
            return Ok(false);
        }

        let next: Vec<Plant> = self
            .plants
            .iter()
            .filter(|p| p.id != id)
            .cloned()
            .collect();
        self.commit(next)?;
        Ok(true)
    }

    /// Persist `next` and, only once that succeeds, make it the in-memory
    /// collection.
    fn commit(&mut self, next: Vec<Plant>) -> Result<()> {
        let payload = serde_json::to_string_pretty(&next)?;
        self.backend.write(&payload)?;
        self.plants = next;
        Ok(())
    }
}
