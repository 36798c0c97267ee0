use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::state::manager::TrackerData;

/// Load tracker state from a JSON file.
pub fn load_state<P: AsRef<Path>>(path: P) -> Result<TrackerData> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load tracker state, falling back to the seeded first-run state when the
/// file does not exist yet.
pub fn load_state_or_default<P: AsRef<Path>>(path: P) -> Result<TrackerData> {
    if path.as_ref().exists() {
        load_state(path)
    } else {
        Ok(TrackerData::seeded())
    }
}

/// Save tracker state to a JSON file, pretty-printed.
pub fn save_state<P: AsRef<Path>>(path: P, data: &TrackerData) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::NamedTempFile;

    use crate::ids::new_id;
    use crate::models::{ActivityLevel, LifeStage, Pet, Species, WeightGoal};

    #[test]
    fn test_save_and_load_roundtrip() {
        let mut data = TrackerData::seeded();
        data.pets.push(Pet {
            id: new_id(),
            name: "Rex".to_string(),
            species: Species::Dog,
            breed: "Beagle".to_string(),
            weight_kg: 10.0,
            age_years: 4.0,
            activity_level: ActivityLevel::Moderate,
            is_neutered: true,
            life_stage: LifeStage::Adult,
            goal: WeightGoal::Maintain,
            target_weight_kg: Some(9.5),
            created_at: Utc::now(),
        });
        data.active_pet_id = Some(data.pets[0].id.clone());

        let file = NamedTempFile::new().unwrap();
        save_state(file.path(), &data).unwrap();

        let reloaded = load_state(file.path()).unwrap();
        assert_eq!(reloaded.pets.len(), 1);
        assert_eq!(reloaded.pets[0].name, "Rex");
        assert_eq!(reloaded.foods.len(), data.foods.len());
        assert_eq!(reloaded.active_pet_id, data.active_pet_id);
    }

    #[test]
    fn test_missing_file_loads_seeded_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kibble_data.json");

        let data = load_state_or_default(&path).unwrap();
        assert!(data.pets.is_empty());
        assert!(!data.foods.is_empty());
        // Nothing was written
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_fields_default() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "{}").unwrap();

        let data = load_state(file.path()).unwrap();
        assert!(data.pets.is_empty());
        assert!(data.foods.is_empty());
        assert!(data.active_pet_id.is_none());
    }
}
