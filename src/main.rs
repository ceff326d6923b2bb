use chrono::Utc;
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use plantpal::error::{PlantError, Result};
use plantpal::model::{plant_type_by_name, PlantDraft, PLANT_TYPES};
use plantpal::store::json_file::JsonFileBackend;
use plantpal::store::{PlantStore, StorageBackend};
use std::path::PathBuf;
use uuid::Uuid;

mod args;
mod render;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let backend = JsonFileBackend::new(resolve_data_dir()?);
    let (mut store, report) = PlantStore::open(backend)?;
    if report.discarded_corrupt {
        eprintln!(
            "{}",
            "Warning: stored plant data was unreadable and has been discarded".yellow()
        );
    }

    match cli.command {
        Some(Commands::Add {
            name,
            plant_type,
            frequency,
        }) => handle_add(&mut store, name, plant_type, frequency),
        Some(Commands::Water { index }) => handle_water(&mut store, index),
        Some(Commands::Delete { index }) => handle_delete(&mut store, index),
        Some(Commands::Types) => {
            render::print_types();
            Ok(())
        }
        Some(Commands::List) | None => {
            render::print_plants(store.plants(), Utc::now());
            Ok(())
        }
    }
}

fn resolve_data_dir() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "plantpal", "plantpal")
        .ok_or_else(|| PlantError::Store("Could not determine data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn handle_add<B: StorageBackend>(
    store: &mut PlantStore<B>,
    name: String,
    plant_type: String,
    frequency: Option<u32>,
) -> Result<()> {
    let entry = plant_type_by_name(&plant_type).ok_or_else(|| {
        let known: Vec<&str> = PLANT_TYPES.iter().map(|t| t.name).collect();
        PlantError::InvalidDraft(format!(
            "unknown plant type '{}' (expected one of: {})",
            plant_type,
            known.join(", ")
        ))
    })?;

    let now = Utc::now();
    let frequency = frequency.unwrap_or(entry.default_frequency);
    let plant = store.add_plant(PlantDraft::new(name, entry, frequency, now), now)?;

    println!(
        "{} Added {} {}, watering every {} days",
        "✓".green(),
        plant.emoji,
        plant.name.bold(),
        plant.watering_frequency
    );
    Ok(())
}

fn handle_water<B: StorageBackend>(store: &mut PlantStore<B>, index: usize) -> Result<()> {
    let id = resolve_index(store, index)?;
    match store.water_plant(id, Utc::now())? {
        Some(plant) => {
            println!(
                "{} Watered {} {}, next due {}",
                "✓".green(),
                plant.emoji,
                plant.name.bold(),
                plant.next_watering_date.format("%Y-%m-%d")
            );
            Ok(())
        }
        None => {
            // The id came from the current list, so this only happens if
            // another process removed the plant in between.
            println!("{}", "Plant is no longer tracked".yellow());
            Ok(())
        }
    }
}

fn handle_delete<B: StorageBackend>(store: &mut PlantStore<B>, index: usize) -> Result<()> {
    let id = resolve_index(store, index)?;
    let name = store
        .plants()
        .iter()
        .find(|p| p.id == id)
        .map(|p| p.name.clone())
        .unwrap_or_default();

    if store.delete_plant(id)? {
        println!("{} Removed {}", "✓".green(), name.bold());
    } else {
        println!("{}", "Plant is no longer tracked".yellow());
    }
    Ok(())
}

fn resolve_index<B: StorageBackend>(store: &PlantStore<B>, index: usize) -> Result<Uuid> {
    index
        .checked_sub(1)
        .and_then(|i| store.plants().get(i))
        .map(|p| p.id)
        .ok_or_else(|| {
            PlantError::Store(format!(
                "no plant at position {} (see `plantpal list`)",
                index
            ))
        })
}
