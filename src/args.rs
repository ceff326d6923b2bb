use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "plantpal", bin_name = "plantpal", version)]
#[command(about = "Track your houseplants' watering schedule from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List tracked plants with their watering status (the default)
    List,
    /// Add a plant to the tracker
    Add {
        /// Display name for the plant
        #[arg(short, long)]
        name: String,
        /// Catalog type, e.g. "Fern" (see `plantpal types`)
        #[arg(short = 't', long = "type")]
        plant_type: String,
        /// Days between waterings; defaults to the type's suggestion
        #[arg(short, long)]
        frequency: Option<u32>,
    },
    /// Record that a plant was watered just now
    Water {
        /// Position in the list (1-based)
        index: usize,
    },
    /// Remove a plant from the tracker
    Delete {
        /// Position in the list (1-based)
        index: usize,
    },
    /// Show the plant type catalog with suggested frequencies
    Types,
}
