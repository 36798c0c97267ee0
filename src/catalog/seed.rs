use std::sync::LazyLock;

use crate::models::Food;

/// The bundled starter catalog: static reference data, parsed once and
/// never mutated. User state starts from a copy of it.
pub static SEED_FOODS: LazyLock<Vec<Food>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("seed_foods.json"))
        .expect("embedded seed catalog parses; pinned by tests")
});

/// A fresh copy of the seed catalog for a new state file.
pub fn seed_foods() -> Vec<Food> {
    SEED_FOODS.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use crate::models::{FoodSpecies, Species};

    #[test]
    fn test_seed_catalog_parses_and_is_valid() {
        assert!(!SEED_FOODS.is_empty());
        for food in SEED_FOODS.iter() {
            assert!(food.is_valid(), "invalid seed entry: {}", food.id);
        }
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let ids: HashSet<&str> = SEED_FOODS.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids.len(), SEED_FOODS.len());
    }

    #[test]
    fn test_seed_covers_both_species() {
        assert!(SEED_FOODS.iter().any(|f| f.species.suits(Species::Dog)));
        assert!(SEED_FOODS.iter().any(|f| f.species.suits(Species::Cat)));
        assert!(SEED_FOODS.iter().any(|f| f.species == FoodSpecies::Both));
    }

    #[test]
    fn test_seed_barcodes_look_like_barcodes() {
        for food in SEED_FOODS.iter() {
            if let Some(barcode) = &food.barcode {
                assert!(
                    crate::catalog::barcode::is_likely_barcode(barcode),
                    "bad seed barcode on {}: {}",
                    food.id,
                    barcode
                );
            }
        }
    }
}
