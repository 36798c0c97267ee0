use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Species;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodType {
    Dry,
    Wet,
    Raw,
    Treat,
}

impl FoodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodType::Dry => "dry",
            FoodType::Wet => "wet",
            FoodType::Raw => "raw",
            FoodType::Treat => "treat",
        }
    }

    pub fn parse(s: &str) -> Option<FoodType> {
        match s.to_lowercase().as_str() {
            "dry" => Some(FoodType::Dry),
            "wet" => Some(FoodType::Wet),
            "raw" => Some(FoodType::Raw),
            "treat" => Some(FoodType::Treat),
            _ => None,
        }
    }
}

/// Which species a food is made for. `Both` suits cats and dogs alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodSpecies {
    Dog,
    Cat,
    Both,
}

impl FoodSpecies {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodSpecies::Dog => "dog",
            FoodSpecies::Cat => "cat",
            FoodSpecies::Both => "both",
        }
    }

    pub fn suits(&self, species: Species) -> bool {
        match self {
            FoodSpecies::Both => true,
            FoodSpecies::Dog => species == Species::Dog,
            FoodSpecies::Cat => species == Species::Cat,
        }
    }
}

/// A catalog food entry with its caloric and nutritional profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub id: String,
    #[serde(default)]
    pub barcode: Option<String>,
    pub brand: String,
    pub product_name: String,
    pub food_type: FoodType,
    pub species: FoodSpecies,
    /// kcal per serving.
    pub calories_per_serving: f64,
    /// Mass of one serving in grams.
    pub serving_size_g: f64,
    /// Display label for the serving's own unit of measure (e.g. "g", "cup").
    pub serving_unit: String,
    #[serde(default)]
    pub protein_pct: f64,
    #[serde(default)]
    pub fat_pct: f64,
    #[serde(default)]
    pub fiber_pct: f64,
    #[serde(default)]
    pub moisture_pct: f64,
    pub created_at: DateTime<Utc>,
}

impl Food {
    /// "Brand Product Name" as shown in lists and matched by lookups.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.product_name)
    }

    /// Basic validation: usable serving data and sane percentages.
    ///
    /// Zero calories per serving is allowed; the feeding-amount calculation
    /// treats such entries as degenerate rather than invalid.
    pub fn is_valid(&self) -> bool {
        self.calories_per_serving >= 0.0
            && self.calories_per_serving.is_finite()
            && self.serving_size_g > 0.0
            && self.serving_size_g.is_finite()
            && !self.product_name.trim().is_empty()
            && [self.protein_pct, self.fat_pct, self.fiber_pct, self.moisture_pct]
                .iter()
                .all(|pct| (0.0..=100.0).contains(pct))
    }

    /// Case-insensitive substring match on brand and product name, plus
    /// raw substring match on the barcode.
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.brand.to_lowercase().contains(&q)
            || self.product_name.to_lowercase().contains(&q)
            || self.barcode.as_deref().unwrap_or("").contains(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_food() -> Food {
        Food {
            id: "f1".to_string(),
            barcode: Some("017800123451".to_string()),
            brand: "Purina Pro Plan".to_string(),
            product_name: "Adult Chicken & Rice".to_string(),
            food_type: FoodType::Dry,
            species: FoodSpecies::Dog,
            calories_per_serving: 378.0,
            serving_size_g: 100.0,
            serving_unit: "g".to_string(),
            protein_pct: 26.0,
            fat_pct: 16.0,
            fiber_pct: 3.0,
            moisture_pct: 12.0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_food().is_valid());

        let mut zero_cal = sample_food();
        zero_cal.calories_per_serving = 0.0;
        assert!(zero_cal.is_valid());

        let mut bad_serving = sample_food();
        bad_serving.serving_size_g = 0.0;
        assert!(!bad_serving.is_valid());

        let mut bad_pct = sample_food();
        bad_pct.protein_pct = 130.0;
        assert!(!bad_pct.is_valid());
    }

    #[test]
    fn test_matches_query() {
        let food = sample_food();
        assert!(food.matches_query("purina"));
        assert!(food.matches_query("chicken"));
        assert!(food.matches_query("017800"));
        assert!(!food.matches_query("salmon"));
    }

    #[test]
    fn test_species_suits() {
        assert!(FoodSpecies::Both.suits(Species::Dog));
        assert!(FoodSpecies::Both.suits(Species::Cat));
        assert!(FoodSpecies::Dog.suits(Species::Dog));
        assert!(!FoodSpecies::Dog.suits(Species::Cat));
    }

    #[test]
    fn test_food_type_parse() {
        assert_eq!(FoodType::parse("Dry"), Some(FoodType::Dry));
        assert_eq!(FoodType::parse("TREAT"), Some(FoodType::Treat));
        assert_eq!(FoodType::parse("kibble"), None);
    }
}
