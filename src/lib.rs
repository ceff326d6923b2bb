//! # PlantPal
//!
//! A UI-agnostic plant-care tracking library with a thin CLI client. The
//! library owns all state and logic; the binary only parses arguments,
//! dispatches, and prints.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  CLI (args.rs, render.rs, wired by main.rs)             │
//! │  The only place that knows about stdout/stderr/colors   │
//! └─────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │  Store (store/) — canonical collection + persistence    │
//! │  add / water / delete / list, whole-collection writes   │
//! └─────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │  StorageBackend trait                                   │
//! │  JsonFileBackend (production), MemBackend (testing)     │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! [`status`] sits beside the store: pure functions deriving a plant's care
//! status from its dates and an explicit `now`, so rendering and tests never
//! need a mocked clock.
//!
//! ## Module overview
//!
//! - [`model`]: core data types (`Plant`, `PlantDraft`, the `PlantType`
//!   catalog)
//! - [`status`]: watering status and due-day derivation
//! - [`store`]: storage abstraction and the `PlantStore` mutation surface
//! - [`error`]: error types

pub mod error;
pub mod model;
pub mod status;
pub mod store;
