use chrono::Utc;
use dialoguer::{Confirm, Input, Select};

use crate::catalog::search::{exact_match, fuzzy_rank};
use crate::error::{Result, TrackerError};
use crate::ids::new_id;
use crate::models::{ActivityLevel, Food, LifeStage, Pet, Species, WeightGoal};

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Prompt for the number of servings fed.
pub fn prompt_servings() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("How many servings?")
        .default("1".to_string())
        .interact_text()?;

    let servings: f64 = input
        .parse()
        .map_err(|_| TrackerError::InvalidInput("Invalid number".to_string()))?;

    if !servings.is_finite() || servings <= 0.0 {
        return Err(TrackerError::InvalidInput(
            "Servings must be positive".to_string(),
        ));
    }

    Ok(servings)
}

fn prompt_weight_kg(prompt: &str, default: Option<f64>) -> Result<f64> {
    let mut input = Input::new().with_prompt(prompt);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    let raw: String = input.interact_text()?;

    let weight: f64 = raw
        .parse()
        .map_err(|_| TrackerError::InvalidInput("Invalid number".to_string()))?;

    if !weight.is_finite() || weight <= 0.0 {
        return Err(TrackerError::InvalidInput(
            "Weight must be a positive number of kilograms".to_string(),
        ));
    }

    Ok(weight)
}

fn select_index<T: PartialEq>(options: &[T], current: &T) -> usize {
    options.iter().position(|o| o == current).unwrap_or(0)
}

/// Interactive registration of a new pet. Life-stage choices are filtered
/// by species, so a species-inconsistent profile cannot be entered.
pub fn prompt_new_pet() -> Result<Pet> {
    let name: String = Input::new().with_prompt("Pet name").interact_text()?;
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(TrackerError::InvalidInput(
            "Pet name must not be empty".to_string(),
        ));
    }

    let species_options = [Species::Dog, Species::Cat];
    let species_idx = Select::new()
        .with_prompt("Species")
        .items(&species_options.map(|s| s.as_str()))
        .default(0)
        .interact()?;
    let species = species_options[species_idx];

    let breed: String = Input::new()
        .with_prompt("Breed (optional)")
        .allow_empty(true)
        .interact_text()?;

    let weight_kg = prompt_weight_kg("Weight (kg)", None)?;

    let age_input: String = Input::new()
        .with_prompt("Age (years)")
        .default("1".to_string())
        .interact_text()?;
    let age_years: f64 = age_input
        .parse()
        .map_err(|_| TrackerError::InvalidInput("Invalid number".to_string()))?;

    let stage_options = LifeStage::choices_for(species);
    let stage_idx = Select::new()
        .with_prompt("Life stage")
        .items(&stage_options.iter().map(|s| s.as_str()).collect::<Vec<_>>())
        .default(select_index(stage_options, &LifeStage::Adult))
        .interact()?;
    let life_stage = stage_options[stage_idx];

    let goal_options = [WeightGoal::Lose, WeightGoal::Maintain, WeightGoal::Gain];
    let goal_idx = Select::new()
        .with_prompt("Weight goal")
        .items(&goal_options.map(|g| g.as_str()))
        .default(1)
        .interact()?;
    let goal = goal_options[goal_idx];

    let activity_options = [
        ActivityLevel::Low,
        ActivityLevel::Moderate,
        ActivityLevel::High,
    ];
    let activity_idx = Select::new()
        .with_prompt("Activity level")
        .items(&activity_options.map(|a| a.as_str()))
        .default(1)
        .interact()?;
    let activity_level = activity_options[activity_idx];

    let is_neutered = prompt_yes_no("Neutered/spayed?", true)?;

    let target_input: String = Input::new()
        .with_prompt("Target weight in kg (optional)")
        .allow_empty(true)
        .interact_text()?;
    let target_weight_kg = if target_input.trim().is_empty() {
        None
    } else {
        Some(target_input.trim().parse().map_err(|_| {
            TrackerError::InvalidInput("Invalid number".to_string())
        })?)
    };

    let pet = Pet {
        id: new_id(),
        name,
        species,
        breed: breed.trim().to_string(),
        weight_kg,
        age_years,
        activity_level,
        is_neutered,
        life_stage,
        goal,
        target_weight_kg,
        created_at: Utc::now(),
    };
    pet.validate()?;
    Ok(pet)
}

/// Re-prompt a pet's profile with the current values as defaults. Species
/// is fixed; id and creation time are kept.
pub fn prompt_pet_edits(existing: &Pet) -> Result<Pet> {
    let name: String = Input::new()
        .with_prompt("Pet name")
        .default(existing.name.clone())
        .interact_text()?;

    let breed: String = Input::new()
        .with_prompt("Breed (optional)")
        .default(existing.breed.clone())
        .allow_empty(true)
        .interact_text()?;

    let weight_kg = prompt_weight_kg("Weight (kg)", Some(existing.weight_kg))?;

    let age_input: String = Input::new()
        .with_prompt("Age (years)")
        .default(existing.age_years.to_string())
        .interact_text()?;
    let age_years: f64 = age_input
        .parse()
        .map_err(|_| TrackerError::InvalidInput("Invalid number".to_string()))?;

    let stage_options = LifeStage::choices_for(existing.species);
    let stage_idx = Select::new()
        .with_prompt("Life stage")
        .items(&stage_options.iter().map(|s| s.as_str()).collect::<Vec<_>>())
        .default(select_index(stage_options, &existing.life_stage))
        .interact()?;

    let goal_options = [WeightGoal::Lose, WeightGoal::Maintain, WeightGoal::Gain];
    let goal_idx = Select::new()
        .with_prompt("Weight goal")
        .items(&goal_options.map(|g| g.as_str()))
        .default(select_index(&goal_options, &existing.goal))
        .interact()?;

    let activity_options = [
        ActivityLevel::Low,
        ActivityLevel::Moderate,
        ActivityLevel::High,
    ];
    let activity_idx = Select::new()
        .with_prompt("Activity level")
        .items(&activity_options.map(|a| a.as_str()))
        .default(select_index(&activity_options, &existing.activity_level))
        .interact()?;

    let is_neutered = prompt_yes_no("Neutered/spayed?", existing.is_neutered)?;

    let pet = Pet {
        id: existing.id.clone(),
        name: name.trim().to_string(),
        species: existing.species,
        breed: breed.trim().to_string(),
        weight_kg,
        age_years,
        activity_level: activity_options[activity_idx],
        is_neutered,
        life_stage: stage_options[stage_idx],
        goal: goal_options[goal_idx],
        target_weight_kg: existing.target_weight_kg,
        created_at: existing.created_at,
    };
    pet.validate()?;
    Ok(pet)
}

/// Resolve a food by name: exact match first, then fuzzy candidates with
/// confirmation. Returns None when nothing matched or the user declined
/// every candidate.
pub fn resolve_food<'a>(foods: &'a [Food], input: &str) -> Result<Option<&'a Food>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    if let Some(food) = exact_match(foods, input) {
        return Ok(Some(food));
    }

    let candidates = fuzzy_rank(foods, input);
    if candidates.is_empty() {
        println!("No matching food found for '{}'", input);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let food = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", food.display_name()))
            .default(true)
            .interact()?;
        return Ok(confirm.then_some(food));
    }

    // Multiple matches - let user select
    let shortlist: Vec<&Food> = candidates.iter().take(5).map(|(f, _)| *f).collect();
    let mut options: Vec<String> = shortlist.iter().map(|f| f.display_name()).collect();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(shortlist.get(selection).copied())
}
