use chrono::{NaiveDate, Utc};
use clap::Parser;

use kibble_tracker_rs::catalog::{filter_foods, import_foods_csv, is_likely_barcode, FoodFilter};
use kibble_tracker_rs::cli::{Cli, Command};
use kibble_tracker_rs::energy::{calculate_daily_calories, calculate_feeding_amount};
use kibble_tracker_rs::error::{Result, TrackerError};
use kibble_tracker_rs::interface::{
    display_calorie_budget, display_day_log, display_food_detail, display_food_list,
    display_pet_list, display_recommendation, prompt_new_pet, prompt_pet_edits, prompt_servings,
    prompt_yes_no, resolve_food,
};
use kibble_tracker_rs::models::{FeedingLogEntry, FoodType, Pet};
use kibble_tracker_rs::state::{load_state_or_default, save_state, TrackerStateManager};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::AddPet => cmd_add_pet(&cli.file),
        Command::EditPet { name } => cmd_edit_pet(&cli.file, &name),
        Command::DeletePet { name } => cmd_delete_pet(&cli.file, &name),
        Command::Pets { activate } => cmd_pets(&cli.file, activate.as_deref()),
        Command::Status { date, pet } => cmd_status(&cli.file, date.as_deref(), pet.as_deref()),
        Command::Search {
            query,
            food_type,
            all_species,
        } => cmd_search(&cli.file, query.as_deref(), food_type.as_deref(), all_species),
        Command::Show { food } => cmd_show(&cli.file, &food),
        Command::Log { food, servings } => cmd_log(&cli.file, &food, servings),
        Command::Unlog { entry_id } => cmd_unlog(&cli.file, &entry_id),
        Command::Scan { barcode } => cmd_scan(&cli.file, &barcode),
        Command::Import { path } => cmd_import(&cli.file, &path),
    }
}

fn load_manager(file_path: &str) -> Result<TrackerStateManager> {
    Ok(TrackerStateManager::new(load_state_or_default(file_path)?))
}

/// Resolve the pet a command operates on: `--pet <name>` if given, the
/// active pet otherwise. The profile is validated before any budget is
/// computed from it; a bad profile is rejected, never papered over.
fn resolve_pet<'a>(
    manager: &'a TrackerStateManager,
    name: Option<&str>,
) -> Result<&'a Pet> {
    let pet = match name {
        Some(name) => manager
            .pet_by_name(name)
            .ok_or_else(|| TrackerError::PetNotFound(name.to_string()))?,
        None => manager.active_pet().ok_or(TrackerError::NoActivePet)?,
    };
    pet.validate()?;
    Ok(pet)
}

fn parse_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(raw) => Ok(NaiveDate::parse_from_str(raw, "%Y-%m-%d")?),
        None => Ok(Utc::now().date_naive()),
    }
}

/// Register a new pet and show its computed daily target.
fn cmd_add_pet(file_path: &str) -> Result<()> {
    let mut manager = load_manager(file_path)?;

    let pet = prompt_new_pet()?;
    let name = pet.name.clone();
    let target = calculate_daily_calories(&pet);
    manager.add_pet(pet)?;
    save_state(file_path, manager.data())?;

    println!();
    println!("Added {}. Daily target: {} kcal.", name, target);
    if manager.pets().len() == 1 {
        println!("{} is now the active pet.", name);
    }
    Ok(())
}

/// Edit a pet's profile and show the recomputed daily target.
fn cmd_edit_pet(file_path: &str, name: &str) -> Result<()> {
    let mut manager = load_manager(file_path)?;

    let existing = manager
        .pet_by_name(name)
        .ok_or_else(|| TrackerError::PetNotFound(name.to_string()))?
        .clone();
    let updated = prompt_pet_edits(&existing)?;
    let target = calculate_daily_calories(&updated);
    let updated_name = updated.name.clone();

    manager.update_pet(updated)?;
    save_state(file_path, manager.data())?;

    println!();
    println!("Updated {}. Daily target: {} kcal.", updated_name, target);
    Ok(())
}

/// Delete a pet after confirmation.
fn cmd_delete_pet(file_path: &str, name: &str) -> Result<()> {
    let mut manager = load_manager(file_path)?;

    let pet = manager
        .pet_by_name(name)
        .ok_or_else(|| TrackerError::PetNotFound(name.to_string()))?;
    let pet_id = pet.id.clone();
    let pet_name = pet.name.clone();

    let confirm = prompt_yes_no(
        &format!("Delete {} and all of its feeding log entries?", pet_name),
        false,
    )?;
    if !confirm {
        println!("Cancelled.");
        return Ok(());
    }

    manager.delete_pet(&pet_id)?;
    save_state(file_path, manager.data())?;
    println!("Deleted {}.", pet_name);
    Ok(())
}

/// List pets or set the active pet.
fn cmd_pets(file_path: &str, activate: Option<&str>) -> Result<()> {
    let mut manager = load_manager(file_path)?;

    if let Some(name) = activate {
        let pet_name = manager.set_active_pet(name)?.name.clone();
        save_state(file_path, manager.data())?;
        println!("{} is now the active pet.", pet_name);
        return Ok(());
    }

    let targets: Vec<u32> = manager
        .pets()
        .iter()
        .map(calculate_daily_calories)
        .collect();
    display_pet_list(
        manager.pets(),
        manager.data().active_pet_id.as_deref(),
        &targets,
    );
    Ok(())
}

/// The home screen: calorie budget bar plus the day's feedings.
fn cmd_status(file_path: &str, date: Option<&str>, pet_name: Option<&str>) -> Result<()> {
    let manager = load_manager(file_path)?;
    let pet = resolve_pet(&manager, pet_name)?;
    let date = parse_date(date)?;

    let target = calculate_daily_calories(pet);
    let entries = manager.log_for_date(&pet.id, date);
    let consumed = manager.consumed_for_date(&pet.id, date).round() as u32;

    println!();
    println!(
        "{} - {} {}, {:.1} kg, goal: {}",
        pet.name,
        pet.life_stage.as_str(),
        pet.species.as_str(),
        pet.weight_kg,
        pet.goal.as_str()
    );
    println!();
    display_calorie_budget(consumed, target);

    let with_foods: Vec<_> = entries
        .iter()
        .map(|e| (*e, manager.food_by_id(&e.food_id)))
        .collect();
    display_day_log(date, &with_foods);
    Ok(())
}

/// Search the catalog, filtered to the active pet's species by default.
fn cmd_search(
    file_path: &str,
    query: Option<&str>,
    food_type: Option<&str>,
    all_species: bool,
) -> Result<()> {
    let manager = load_manager(file_path)?;

    let food_type = match food_type {
        Some(raw) => Some(FoodType::parse(raw).ok_or_else(|| {
            TrackerError::InvalidInput(format!(
                "unknown food type '{}': expected dry, wet, raw, or treat",
                raw
            ))
        })?),
        None => None,
    };

    let species = if all_species {
        None
    } else {
        manager.active_pet().map(|p| p.species)
    };

    let filter = FoodFilter {
        query: query.map(str::to_string),
        food_type,
        species,
    };
    let hits = filter_foods(manager.foods(), &filter);
    display_food_list(&hits, "Food catalog");
    Ok(())
}

fn show_food_with_recommendation(manager: &TrackerStateManager, food_id: &str) -> Result<()> {
    let food = manager
        .food_by_id(food_id)
        .ok_or_else(|| TrackerError::FoodNotFound(food_id.to_string()))?;
    display_food_detail(food);

    if let Some(pet) = manager.active_pet() {
        pet.validate()?;
        let daily = calculate_daily_calories(pet);
        let amount = calculate_feeding_amount(daily, food);
        display_recommendation(pet, daily, food, &amount);
    }
    println!();
    Ok(())
}

/// The food-detail screen: nutrition facts plus the daily recommendation.
fn cmd_show(file_path: &str, food_name: &str) -> Result<()> {
    let manager = load_manager(file_path)?;

    let Some(food) = resolve_food(manager.foods(), food_name)? else {
        return Err(TrackerError::FoodNotFound(food_name.to_string()));
    };
    let food_id = food.id.clone();
    show_food_with_recommendation(&manager, &food_id)
}

/// Log a feeding for the active pet and show the updated budget.
fn cmd_log(file_path: &str, food_name: &str, servings: Option<f64>) -> Result<()> {
    let mut manager = load_manager(file_path)?;
    let pet = manager.active_pet().ok_or(TrackerError::NoActivePet)?.clone();
    pet.validate()?;

    let Some(food) = resolve_food(manager.foods(), food_name)? else {
        return Err(TrackerError::FoodNotFound(food_name.to_string()));
    };
    let food = food.clone();

    let servings = match servings {
        Some(servings) if servings.is_finite() && servings > 0.0 => servings,
        Some(_) => {
            return Err(TrackerError::InvalidInput(
                "Servings must be positive".to_string(),
            ));
        }
        None => prompt_servings()?,
    };

    let entry = FeedingLogEntry::record(&pet, &food, servings, Utc::now());
    let logged_kcal = entry.calories;
    manager.add_log_entry(entry);
    save_state(file_path, manager.data())?;

    println!();
    println!(
        "Logged {:.1} serving(s) of {} ({:.0} kcal) for {}.",
        servings,
        food.display_name(),
        logged_kcal,
        pet.name
    );
    println!();

    let today = Utc::now().date_naive();
    let consumed = manager.consumed_for_date(&pet.id, today).round() as u32;
    display_calorie_budget(consumed, calculate_daily_calories(&pet));
    Ok(())
}

/// Remove a feeding log entry.
fn cmd_unlog(file_path: &str, entry_id: &str) -> Result<()> {
    let mut manager = load_manager(file_path)?;
    manager.delete_log_entry(entry_id)?;
    save_state(file_path, manager.data())?;
    println!("Removed log entry {}.", entry_id);
    Ok(())
}

/// Look up a food by barcode.
fn cmd_scan(file_path: &str, barcode: &str) -> Result<()> {
    if !is_likely_barcode(barcode) {
        return Err(TrackerError::InvalidInput(
            "Enter a valid UPC/EAN barcode (8, 12, 13, or 14 digits)".to_string(),
        ));
    }

    let manager = load_manager(file_path)?;
    match manager.food_by_barcode(barcode) {
        Some(food) => {
            let food_id = food.id.clone();
            show_food_with_recommendation(&manager, &food_id)
        }
        None => {
            println!("No catalog entry for barcode {}.", barcode);
            Ok(())
        }
    }
}

/// Bulk-import foods from CSV, merging by id/barcode identity.
fn cmd_import(file_path: &str, csv_path: &str) -> Result<()> {
    let mut manager = load_manager(file_path)?;

    let summary = import_foods_csv(csv_path)?;
    let skipped = summary.skipped;
    let (added, updated) = manager.merge_foods(summary.imported);
    save_state(file_path, manager.data())?;

    println!(
        "Imported {} new foods, updated {}, skipped {} rows.",
        added, updated, skipped
    );
    Ok(())
}
