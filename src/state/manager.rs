use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::{normalize_barcode, seed_foods};
use crate::error::{Result, TrackerError};
use crate::models::{FeedingLogEntry, Food, Pet};

/// On-disk application state: pets, food catalog, feeding log, active pet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackerData {
    #[serde(default)]
    pub pets: Vec<Pet>,
    #[serde(default)]
    pub foods: Vec<Food>,
    #[serde(default)]
    pub log: Vec<FeedingLogEntry>,
    #[serde(default)]
    pub active_pet_id: Option<String>,
}

impl TrackerData {
    /// A first-run state: no pets, no log, the embedded seed catalog.
    pub fn seeded() -> Self {
        Self {
            foods: seed_foods(),
            ..Default::default()
        }
    }
}

/// Two catalog entries describe the same food when their ids match or both
/// carry barcodes that normalize equal.
fn is_same_food(a: &Food, b: &Food) -> bool {
    if a.id == b.id {
        return true;
    }
    match (&a.barcode, &b.barcode) {
        (Some(x), Some(y)) => {
            let (x, y) = (normalize_barcode(x), normalize_barcode(y));
            !x.is_empty() && x == y
        }
        _ => false,
    }
}

/// Manages pets, the food catalog, the feeding log, and the active pet.
pub struct TrackerStateManager {
    data: TrackerData,
}

impl TrackerStateManager {
    pub fn new(data: TrackerData) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &TrackerData {
        &self.data
    }

    // ── Pets ──────────────────────────────────────────────────────────

    /// Add a validated pet. The first pet added becomes the active pet.
    /// Names must be unique (case-insensitive) so commands can address
    /// pets by name.
    pub fn add_pet(&mut self, pet: Pet) -> Result<()> {
        pet.validate()?;
        if self.pet_by_name(&pet.name).is_some() {
            return Err(TrackerError::InvalidInput(format!(
                "a pet named '{}' already exists",
                pet.name
            )));
        }

        if self.data.active_pet_id.is_none() {
            self.data.active_pet_id = Some(pet.id.clone());
        }
        self.data.pets.push(pet);
        Ok(())
    }

    /// Replace an existing pet's profile (matched by id) after validation.
    pub fn update_pet(&mut self, pet: Pet) -> Result<()> {
        pet.validate()?;
        if self
            .pet_by_name(&pet.name)
            .is_some_and(|other| other.id != pet.id)
        {
            return Err(TrackerError::InvalidInput(format!(
                "a pet named '{}' already exists",
                pet.name
            )));
        }
        let slot = self
            .data
            .pets
            .iter_mut()
            .find(|p| p.id == pet.id)
            .ok_or_else(|| TrackerError::PetNotFound(pet.id.clone()))?;
        *slot = pet;
        Ok(())
    }

    /// Remove a pet and its feeding log entries. Clears the active pet if
    /// it was the one removed.
    pub fn delete_pet(&mut self, id: &str) -> Result<()> {
        if !self.data.pets.iter().any(|p| p.id == id) {
            return Err(TrackerError::PetNotFound(id.to_string()));
        }

        self.data.pets.retain(|p| p.id != id);
        self.data.log.retain(|e| e.pet_id != id);
        if self.data.active_pet_id.as_deref() == Some(id) {
            self.data.active_pet_id = self.data.pets.first().map(|p| p.id.clone());
        }
        Ok(())
    }

    pub fn pets(&self) -> &[Pet] {
        &self.data.pets
    }

    pub fn pet_by_id(&self, id: &str) -> Option<&Pet> {
        self.data.pets.iter().find(|p| p.id == id)
    }

    /// Case-insensitive name lookup.
    pub fn pet_by_name(&self, name: &str) -> Option<&Pet> {
        let key = name.to_lowercase();
        self.data.pets.iter().find(|p| p.key() == key)
    }

    pub fn active_pet(&self) -> Option<&Pet> {
        self.data
            .active_pet_id
            .as_deref()
            .and_then(|id| self.pet_by_id(id))
    }

    pub fn set_active_pet(&mut self, name: &str) -> Result<&Pet> {
        let id = self
            .pet_by_name(name)
            .map(|p| p.id.clone())
            .ok_or_else(|| TrackerError::PetNotFound(name.to_string()))?;
        self.data.active_pet_id = Some(id.clone());
        self.pet_by_id(&id)
            .ok_or_else(|| TrackerError::PetNotFound(name.to_string()))
    }

    // ── Foods ─────────────────────────────────────────────────────────

    pub fn foods(&self) -> &[Food] {
        &self.data.foods
    }

    pub fn food_by_id(&self, id: &str) -> Option<&Food> {
        self.data.foods.iter().find(|f| f.id == id)
    }

    /// Look up a food by barcode; both sides are normalized first.
    pub fn food_by_barcode(&self, raw: &str) -> Option<&Food> {
        let barcode = normalize_barcode(raw);
        if barcode.is_empty() {
            return None;
        }
        self.data.foods.iter().find(|f| {
            f.barcode
                .as_deref()
                .is_some_and(|b| normalize_barcode(b) == barcode)
        })
    }

    /// Add a food, replacing any entry it duplicates (same id, or same
    /// normalized barcode). Returns true when the food was new.
    pub fn add_food(&mut self, food: Food) -> bool {
        match self.data.foods.iter_mut().find(|f| is_same_food(f, &food)) {
            Some(slot) => {
                *slot = food;
                false
            }
            None => {
                self.data.foods.push(food);
                true
            }
        }
    }

    /// Merge an incoming food set into the catalog. Returns (added, updated).
    pub fn merge_foods(&mut self, incoming: Vec<Food>) -> (usize, usize) {
        let mut added = 0;
        let mut updated = 0;
        for food in incoming {
            if self.add_food(food) {
                added += 1;
            } else {
                updated += 1;
            }
        }
        (added, updated)
    }

    // ── Feeding log ───────────────────────────────────────────────────

    pub fn add_log_entry(&mut self, entry: FeedingLogEntry) {
        self.data.log.push(entry);
    }

    pub fn delete_log_entry(&mut self, id: &str) -> Result<()> {
        let before = self.data.log.len();
        self.data.log.retain(|e| e.id != id);
        if self.data.log.len() == before {
            return Err(TrackerError::EntryNotFound(id.to_string()));
        }
        Ok(())
    }

    /// A pet's entries for one calendar day (UTC), oldest first.
    pub fn log_for_date(&self, pet_id: &str, date: NaiveDate) -> Vec<&FeedingLogEntry> {
        let mut entries: Vec<&FeedingLogEntry> = self
            .data
            .log
            .iter()
            .filter(|e| e.pet_id == pet_id && e.logged_at.date_naive() == date)
            .collect();
        entries.sort_by_key(|e| e.logged_at);
        entries
    }

    /// Total kcal a pet consumed on one day.
    pub fn consumed_for_date(&self, pet_id: &str, date: NaiveDate) -> f64 {
        self.log_for_date(pet_id, date)
            .iter()
            .map(|e| e.calories)
            .sum()
    }
}
