pub mod catalog;
pub mod cli;
pub mod energy;
pub mod error;
pub mod ids;
pub mod interface;
pub mod models;
pub mod state;

pub use energy::{calculate_daily_calories, calculate_feeding_amount, FeedingAmount};
pub use error::{Result, TrackerError};
pub use models::{FeedingLogEntry, Food, Pet};
