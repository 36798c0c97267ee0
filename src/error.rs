use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Pet not found: {0}")]
    PetNotFound(String),

    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("Log entry not found: {0}")]
    EntryNotFound(String),

    #[error("No active pet. Add one with 'add-pet' or pick one with 'pets --activate <name>'.")]
    NoActivePet,

    #[error("Invalid pet profile: {0}")]
    InvalidPetProfile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid date: {0}")]
    Date(#[from] chrono::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
