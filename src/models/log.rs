use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::new_id;
use crate::models::{Food, Pet};

/// One logged feeding: servings of a food given to a pet.
///
/// `calories` is captured at log time so later catalog edits do not
/// rewrite history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedingLogEntry {
    pub id: String,
    pub pet_id: String,
    pub food_id: String,
    pub servings: f64,
    pub calories: f64,
    pub logged_at: DateTime<Utc>,
}

impl FeedingLogEntry {
    pub fn record(pet: &Pet, food: &Food, servings: f64, logged_at: DateTime<Utc>) -> Self {
        Self {
            id: new_id(),
            pet_id: pet.id.clone(),
            food_id: food.id.clone(),
            servings,
            calories: food.calories_per_serving * servings,
            logged_at,
        }
    }
}
