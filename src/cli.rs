use clap::{Parser, Subcommand};

/// KibbleTracker — a pet nutrition CLI that tracks feedings against
/// computed daily calorie budgets.
#[derive(Parser, Debug)]
#[command(name = "kibble_tracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the tracker state JSON file.
    #[arg(short, long, default_value = "kibble_data.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Register a new pet interactively.
    AddPet,

    /// Edit a pet's profile.
    EditPet {
        /// Pet name.
        name: String,
    },

    /// Delete a pet and its feeding log.
    DeletePet {
        /// Pet name.
        name: String,
    },

    /// List pets, or set the active pet.
    Pets {
        /// Set the active pet by name.
        #[arg(long)]
        activate: Option<String>,
    },

    /// Show the calorie budget and feeding log for a day.
    Status {
        /// Date to show (YYYY-MM-DD), default today.
        #[arg(long)]
        date: Option<String>,

        /// Pet name, default the active pet.
        #[arg(long)]
        pet: Option<String>,
    },

    /// Search the food catalog.
    Search {
        /// Substring to match against brand, product name, or barcode.
        query: Option<String>,

        /// Filter by food type: dry, wet, raw, or treat.
        #[arg(long)]
        food_type: Option<String>,

        /// Include foods made for other species than the active pet.
        #[arg(long)]
        all_species: bool,
    },

    /// Show a food's nutrition facts and the active pet's daily
    /// feeding recommendation.
    Show {
        /// Food name (fuzzy-matched).
        food: String,
    },

    /// Log a feeding for the active pet.
    Log {
        /// Food name (fuzzy-matched).
        food: String,

        /// Number of servings fed; prompted for when omitted.
        #[arg(long)]
        servings: Option<f64>,
    },

    /// Remove a feeding log entry by id.
    Unlog {
        /// Log entry id (shown by 'status').
        entry_id: String,
    },

    /// Look up a food by its barcode.
    Scan {
        /// UPC/EAN barcode (8, 12, 13, or 14 digits).
        barcode: String,
    },

    /// Bulk-import foods from a CSV file.
    Import {
        /// Path to the CSV file.
        path: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Status {
            date: None,
            pet: None,
        }
    }
}
