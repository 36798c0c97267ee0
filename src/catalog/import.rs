use std::io::Read;
use std::path::Path;

use chrono::Utc;
use serde::Deserialize;

use crate::error::Result;
use crate::ids::new_id;
use crate::models::{Food, FoodSpecies, FoodType};

/// One row of a food-import CSV. Headers match the field names.
#[derive(Debug, Deserialize)]
struct FoodRow {
    brand: String,
    product_name: String,
    #[serde(default)]
    barcode: Option<String>,
    food_type: FoodType,
    species: FoodSpecies,
    calories_per_serving: f64,
    serving_size_g: f64,
    serving_unit: String,
    #[serde(default)]
    protein_pct: f64,
    #[serde(default)]
    fat_pct: f64,
    #[serde(default)]
    fiber_pct: f64,
    #[serde(default)]
    moisture_pct: f64,
}

impl FoodRow {
    fn into_food(self) -> Food {
        Food {
            id: new_id(),
            barcode: self.barcode.filter(|b| !b.trim().is_empty()),
            brand: self.brand,
            product_name: self.product_name,
            food_type: self.food_type,
            species: self.species,
            calories_per_serving: self.calories_per_serving,
            serving_size_g: self.serving_size_g,
            serving_unit: self.serving_unit,
            protein_pct: self.protein_pct,
            fat_pct: self.fat_pct,
            fiber_pct: self.fiber_pct,
            moisture_pct: self.moisture_pct,
            created_at: Utc::now(),
        }
    }
}

/// Result of an import pass: parsed foods plus the count of rows that were
/// malformed or failed validation.
#[derive(Debug, Default)]
pub struct ImportSummary {
    pub imported: Vec<Food>,
    pub skipped: usize,
}

/// Read foods from a CSV file. Bad rows are skipped and counted, not fatal;
/// an unreadable file or malformed header is.
pub fn import_foods_csv<P: AsRef<Path>>(path: P) -> Result<ImportSummary> {
    import_foods_from_reader(csv::Reader::from_path(path)?)
}

pub fn import_foods_from_reader<R: Read>(mut reader: csv::Reader<R>) -> Result<ImportSummary> {
    let mut summary = ImportSummary::default();

    for row in reader.deserialize() {
        let row: FoodRow = match row {
            Ok(row) => row,
            Err(_) => {
                summary.skipped += 1;
                continue;
            }
        };

        let food = row.into_food();
        if food.is_valid() {
            summary.imported.push(food);
        } else {
            summary.skipped += 1;
        }
    }

    Ok(summary)
}
