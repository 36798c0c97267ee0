use assert_float_eq::assert_float_absolute_eq;
use chrono::Utc;

use kibble_tracker_rs::energy::{
    calculate_daily_calories, calculate_feeding_amount, calculate_rer, der_factor,
};
use kibble_tracker_rs::models::{
    ActivityLevel, Food, FoodSpecies, FoodType, LifeStage, Pet, Species, WeightGoal,
};

fn make_pet(
    species: Species,
    life_stage: LifeStage,
    goal: WeightGoal,
    is_neutered: bool,
    weight_kg: f64,
) -> Pet {
    Pet {
        id: "pet".to_string(),
        name: "Test".to_string(),
        species,
        breed: String::new(),
        weight_kg,
        age_years: 3.0,
        activity_level: ActivityLevel::Moderate,
        is_neutered,
        life_stage,
        goal,
        target_weight_kg: None,
        created_at: Utc::now(),
    }
}

fn make_food(calories_per_serving: f64, serving_size_g: f64, serving_unit: &str) -> Food {
    Food {
        id: "food".to_string(),
        barcode: None,
        brand: "Brand".to_string(),
        product_name: "Product".to_string(),
        food_type: FoodType::Dry,
        species: FoodSpecies::Both,
        calories_per_serving,
        serving_size_g,
        serving_unit: serving_unit.to_string(),
        protein_pct: 24.0,
        fat_pct: 14.0,
        fiber_pct: 4.0,
        moisture_pct: 10.0,
        created_at: Utc::now(),
    }
}

#[test]
fn test_rer_formula() {
    assert_float_absolute_eq!(calculate_rer(0.0), 0.0, 1e-12);
    // 70 × 10^0.75
    assert_float_absolute_eq!(calculate_rer(10.0), 393.638_927_633_244, 1e-6);

    // Strictly increasing in weight
    let mut last = 0.0;
    for weight in [0.1, 1.0, 3.5, 8.0, 22.0, 45.0] {
        let rer = calculate_rer(weight);
        assert!(rer > last);
        last = rer;
    }
}

#[test]
fn test_factor_table_cats() {
    let factor = |stage, goal, neutered| {
        der_factor(&make_pet(Species::Cat, stage, goal, neutered, 4.0))
    };

    assert_float_absolute_eq!(factor(LifeStage::Kitten, WeightGoal::Lose, true), 2.5, 1e-12);
    assert_float_absolute_eq!(factor(LifeStage::Adult, WeightGoal::Lose, true), 0.8, 1e-12);
    assert_float_absolute_eq!(factor(LifeStage::Adult, WeightGoal::Gain, false), 1.3, 1e-12);
    assert_float_absolute_eq!(factor(LifeStage::Adult, WeightGoal::Maintain, true), 1.0, 1e-12);
    assert_float_absolute_eq!(factor(LifeStage::Senior, WeightGoal::Maintain, false), 1.2, 1e-12);
}

#[test]
fn test_factor_table_dogs() {
    let factor = |stage, goal, neutered| {
        der_factor(&make_pet(Species::Dog, stage, goal, neutered, 10.0))
    };

    assert_float_absolute_eq!(factor(LifeStage::Puppy, WeightGoal::Gain, false), 2.5, 1e-12);
    assert_float_absolute_eq!(factor(LifeStage::Adult, WeightGoal::Lose, false), 1.0, 1e-12);
    assert_float_absolute_eq!(factor(LifeStage::Adult, WeightGoal::Gain, true), 1.9, 1e-12);
    assert_float_absolute_eq!(factor(LifeStage::Adult, WeightGoal::Maintain, true), 1.6, 1e-12);
    assert_float_absolute_eq!(factor(LifeStage::Senior, WeightGoal::Maintain, false), 1.8, 1e-12);
}

#[test]
fn test_daily_calories_reference_pets() {
    // Growth dominates: round(393.64 × 2.5) = 984 even on a lose goal
    let puppy = make_pet(Species::Dog, LifeStage::Puppy, WeightGoal::Lose, true, 10.0);
    assert_eq!(calculate_daily_calories(&puppy), 984);

    // RER(4) ≈ 197.99 × 1.0 = 198
    let cat = make_pet(Species::Cat, LifeStage::Adult, WeightGoal::Maintain, true, 4.0);
    assert_eq!(calculate_daily_calories(&cat), 198);

    // RER(20) ≈ 662.02 × 1.9 = 1258; the goal factor wins over neuter tier
    let dog = make_pet(Species::Dog, LifeStage::Adult, WeightGoal::Gain, false, 20.0);
    assert_eq!(calculate_daily_calories(&dog), 1258);
}

#[test]
fn test_feeding_amount_reference_food() {
    let kibble = make_food(378.0, 100.0, "g");
    let amount = calculate_feeding_amount(400, &kibble);
    assert_eq!(amount.amount, 106);
    assert_eq!(amount.unit, "g");
}

#[test]
fn test_feeding_amount_zero_budget() {
    for food in [
        make_food(378.0, 100.0, "g"),
        make_food(89.0, 85.0, "can"),
        make_food(2.0, 0.5, "piece"),
    ] {
        assert_eq!(calculate_feeding_amount(0, &food).amount, 0);
    }
}

#[test]
fn test_degenerate_food_passes_unit_through() {
    let no_data = make_food(0.0, 100.0, "cup");
    let amount = calculate_feeding_amount(750, &no_data);
    assert_eq!(amount.amount, 0);
    assert_eq!(amount.unit, "cup");
}

#[test]
fn test_normal_path_always_reports_grams() {
    // The food's own label is "can"; the recommendation is still in grams
    let canned = make_food(89.0, 85.0, "can");
    let amount = calculate_feeding_amount(198, &canned);
    assert_eq!(amount.unit, "g");
    // round(198 / 89 × 85) = 189
    assert_eq!(amount.amount, 189);
}

#[test]
fn test_feeding_amount_monotonic_in_budget() {
    let food = make_food(341.0, 100.0, "g");
    let mut last = 0;
    for kcal in 0..2000 {
        let amount = calculate_feeding_amount(kcal, &food).amount;
        assert!(amount >= last, "amount decreased at {} kcal", kcal);
        last = amount;
    }
}

#[test]
fn test_calculator_is_deterministic() {
    let pet = make_pet(Species::Cat, LifeStage::Senior, WeightGoal::Lose, false, 5.2);
    let food = make_food(341.0, 100.0, "g");

    let daily_first = calculate_daily_calories(&pet);
    let daily_second = calculate_daily_calories(&pet);
    assert_eq!(daily_first, daily_second);

    assert_eq!(
        calculate_feeding_amount(daily_first, &food),
        calculate_feeding_amount(daily_second, &food)
    );
}
