use chrono::NaiveDate;

use crate::energy::FeedingAmount;
use crate::models::{FeedingLogEntry, Food, FoodType, Pet};

/// Width of the calorie budget bar in characters.
const BAR_WIDTH: usize = 30;

/// Render the daily calorie budget: consumed vs target with a progress bar
/// capped at 100% and a remaining/over-budget line.
pub fn display_calorie_budget(consumed: u32, target: u32) {
    let pct = if target > 0 {
        (f64::from(consumed) / f64::from(target)).min(1.0)
    } else {
        0.0
    };
    let filled = (pct * BAR_WIDTH as f64).round() as usize;
    let bar = format!("{}{}", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled));

    println!("Daily Calories: {} / {} kcal", consumed, target);
    println!("[{}] {:.0}%", bar, pct * 100.0);
    if consumed > target {
        println!("{} kcal over budget", consumed - target);
    } else {
        println!("{} kcal remaining", target - consumed);
    }
}

/// One-line food summary used in lists.
fn food_line(food: &Food) -> String {
    format!(
        "{} [{}, {}] - {:.0} kcal per {:.0} g serving",
        food.display_name(),
        food.food_type.as_str(),
        food.species.as_str(),
        food.calories_per_serving,
        food.serving_size_g
    )
}

/// Display a list of foods with a title.
pub fn display_food_list(foods: &[&Food], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();
    for food in foods {
        println!("  {}", food_line(food));
    }
    println!();
}

/// Display a food's full nutrition facts.
pub fn display_food_detail(food: &Food) {
    println!();
    println!("{}", food.display_name());
    println!(
        "  {} food for {}",
        food.food_type.as_str(),
        food.species.as_str()
    );
    if let Some(barcode) = &food.barcode {
        println!("  Barcode:  {}", barcode);
    }
    println!(
        "  Calories: {:.0} kcal per serving ({:.0} {})",
        food.calories_per_serving, food.serving_size_g, food.serving_unit
    );
    println!("  Protein:  {:.1}%", food.protein_pct);
    println!("  Fat:      {:.1}%", food.fat_pct);
    println!("  Fiber:    {:.1}%", food.fiber_pct);
    println!("  Moisture: {:.1}%", food.moisture_pct);
}

/// Display the daily feeding recommendation for a pet.
pub fn display_recommendation(pet: &Pet, daily_calories: u32, food: &Food, amount: &FeedingAmount) {
    println!();
    println!("Daily recommendation for {}:", pet.name);
    if food.calories_per_serving <= 0.0 {
        println!("  No computable amount (food has no caloric data).");
    } else {
        println!(
            "  {} {}/day ({} kcal target)",
            amount.amount, amount.unit, daily_calories
        );
    }
}

/// Display the pet roster, marking the active pet.
pub fn display_pet_list(pets: &[Pet], active_pet_id: Option<&str>, daily_targets: &[u32]) {
    if pets.is_empty() {
        println!("No pets yet. Register one with 'add-pet'.");
        return;
    }

    println!();
    println!("=== Pets ({}) ===", pets.len());
    println!();
    for (pet, target) in pets.iter().zip(daily_targets) {
        let marker = if active_pet_id == Some(pet.id.as_str()) {
            "*"
        } else {
            " "
        };
        println!(
            "{} {} - {} {}, {:.1} kg, {}, goal: {} - target {} kcal/day",
            marker,
            pet.name,
            pet.life_stage.as_str(),
            pet.species.as_str(),
            pet.weight_kg,
            if pet.is_neutered { "neutered" } else { "intact" },
            pet.goal.as_str(),
            target
        );
    }
    println!();
}

/// Display one day of the feeding log, meals and treats in separate
/// sections. Entries whose food is gone from the catalog are shown too.
pub fn display_day_log(date: NaiveDate, entries: &[(&FeedingLogEntry, Option<&Food>)]) {
    println!();
    println!("=== Feedings for {} ===", date.format("%Y-%m-%d"));

    if entries.is_empty() {
        println!();
        println!("No feedings logged.");
        println!();
        return;
    }

    for (title, want_treats) in [("Meals", false), ("Treats", true)] {
        let group: Vec<&(&FeedingLogEntry, Option<&Food>)> = entries
            .iter()
            .filter(|(_, food)| {
                food.is_some_and(|f| f.food_type == FoodType::Treat) == want_treats
            })
            .collect();
        if group.is_empty() {
            continue;
        }
        println!();
        println!("--- {} ---", title);
        for (entry, food) in group {
            let food_name = food
                .map(|f| f.display_name())
                .unwrap_or_else(|| "(unknown food)".to_string());
            println!(
                "  {}  {:>6.1} serving(s)  {:<40} {:>5.0} kcal  [{}]",
                entry.logged_at.format("%H:%M"),
                entry.servings,
                food_name,
                entry.calories,
                entry.id
            );
        }
    }

    let total: f64 = entries.iter().map(|(e, _)| e.calories).sum();
    println!();
    println!("Total: {:.0} kcal over {} feedings", total, entries.len());
    println!();
}
