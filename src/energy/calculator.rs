//! The energy requirement and feeding calculator.
//!
//! Pure and stateless: no I/O, no clocks, no shared state. Callers validate
//! pet profiles (`Pet::validate`) before computing with them; the functions
//! here are total over well-typed inputs.

use crate::energy::constants::*;
use crate::models::{Food, LifeStage, Pet, Species, WeightGoal};

/// Recommended daily feeding amount for a food.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedingAmount {
    /// Rounded to the nearest whole unit.
    pub amount: u32,
    pub unit: String,
}

/// Resting Energy Requirement in kcal/day: `70 × weight_kg^0.75`.
///
/// Unrounded; rounding happens once at the DER stage. Does not validate its
/// input — a pet profile is validated before it reaches this function.
pub fn calculate_rer(weight_kg: f64) -> f64 {
    RER_COEFFICIENT * weight_kg.powf(RER_EXPONENT)
}

/// DER multiplier for a pet: an ordered decision table.
///
/// The growth stage wins over everything, the weight goal wins over neuter
/// status, and neuter status breaks the tie for maintaining adults and
/// seniors. Senior shares the adult rules; there is no senior-specific
/// factor.
pub fn der_factor(pet: &Pet) -> f64 {
    match pet.species {
        Species::Cat => match (pet.life_stage, pet.goal, pet.is_neutered) {
            (LifeStage::Kitten, _, _) => CAT_KITTEN_FACTOR,
            (_, WeightGoal::Lose, _) => CAT_WEIGHT_LOSS_FACTOR,
            (_, WeightGoal::Gain, _) => CAT_WEIGHT_GAIN_FACTOR,
            (_, WeightGoal::Maintain, true) => CAT_NEUTERED_MAINTAIN_FACTOR,
            (_, WeightGoal::Maintain, false) => CAT_INTACT_MAINTAIN_FACTOR,
        },
        Species::Dog => match (pet.life_stage, pet.goal, pet.is_neutered) {
            (LifeStage::Puppy, _, _) => DOG_PUPPY_FACTOR,
            (_, WeightGoal::Lose, _) => DOG_WEIGHT_LOSS_FACTOR,
            (_, WeightGoal::Gain, _) => DOG_WEIGHT_GAIN_FACTOR,
            (_, WeightGoal::Maintain, true) => DOG_NEUTERED_MAINTAIN_FACTOR,
            (_, WeightGoal::Maintain, false) => DOG_INTACT_MAINTAIN_FACTOR,
        },
    }
}

/// Daily Energy Requirement in whole kcal/day: `round(RER × factor)`.
///
/// Rounds half away from zero (`f64::round`); every input here is
/// non-negative, so the negative-half case never arises.
pub fn calculate_daily_calories(pet: &Pet) -> u32 {
    (calculate_rer(pet.weight_kg) * der_factor(pet)).round() as u32
}

/// How much of a food to feed per day to hit a calorie target.
///
/// A food with `calories_per_serving <= 0` has no computable amount; it
/// yields zero with the food's own unit label passed through. The normal
/// path always reports grams, even when the food's `serving_unit` label is
/// something else ("cup", "can") — callers must not substitute the food's
/// label for this output.
pub fn calculate_feeding_amount(daily_calories: u32, food: &Food) -> FeedingAmount {
    if food.calories_per_serving <= 0.0 {
        return FeedingAmount {
            amount: 0,
            unit: food.serving_unit.clone(),
        };
    }

    let servings_needed = f64::from(daily_calories) / food.calories_per_serving;
    let grams = (servings_needed * food.serving_size_g).round();

    FeedingAmount {
        amount: grams as u32,
        unit: GRAMS_UNIT.to_string(),
    }
}
