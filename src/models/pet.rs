use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
}

impl Species {
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifeStage {
    Puppy,
    Kitten,
    Adult,
    Senior,
}

impl LifeStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifeStage::Puppy => "puppy",
            LifeStage::Kitten => "kitten",
            LifeStage::Adult => "adult",
            LifeStage::Senior => "senior",
        }
    }

    /// Growth stages only exist for the matching species.
    pub fn valid_for(&self, species: Species) -> bool {
        match self {
            LifeStage::Puppy => species == Species::Dog,
            LifeStage::Kitten => species == Species::Cat,
            LifeStage::Adult | LifeStage::Senior => true,
        }
    }

    /// The life stages a pet of this species can be registered with.
    pub fn choices_for(species: Species) -> &'static [LifeStage] {
        match species {
            Species::Dog => &[LifeStage::Puppy, LifeStage::Adult, LifeStage::Senior],
            Species::Cat => &[LifeStage::Kitten, LifeStage::Adult, LifeStage::Senior],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightGoal {
    Lose,
    Maintain,
    Gain,
}

impl WeightGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightGoal::Lose => "lose",
            WeightGoal::Maintain => "maintain",
            WeightGoal::Gain => "gain",
        }
    }
}

/// Recorded on the profile; not an input to the energy calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Low => "low",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::High => "high",
        }
    }
}

/// A registered pet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub species: Species,
    #[serde(default)]
    pub breed: String,
    pub weight_kg: f64,
    pub age_years: f64,
    pub activity_level: ActivityLevel,
    pub is_neutered: bool,
    pub life_stage: LifeStage,
    pub goal: WeightGoal,
    #[serde(default)]
    pub target_weight_kg: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl Pet {
    /// Reject profiles the calculator must never see: non-positive or
    /// non-finite weight, and a growth stage on the wrong species.
    ///
    /// A rejected profile is returned to the caller to fix; no default
    /// weight is ever substituted.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(TrackerError::InvalidPetProfile(
                "name must not be empty".to_string(),
            ));
        }
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(TrackerError::InvalidPetProfile(format!(
                "weight must be a positive number of kilograms, got {}",
                self.weight_kg
            )));
        }
        if !self.life_stage.valid_for(self.species) {
            return Err(TrackerError::InvalidPetProfile(format!(
                "life stage '{}' is not valid for a {}",
                self.life_stage.as_str(),
                self.species.as_str()
            )));
        }
        Ok(())
    }

    /// Canonical key for name lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
