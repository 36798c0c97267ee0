//! Documented constants for the energy requirement formulas.
//!
//! RER uses the veterinary-standard allometric scaling formula
//! `70 × kg^0.75`. DER factors follow the common life-stage / weight-goal /
//! neuter-status multiplier tables for cats and dogs.

/// Coefficient of the RER formula (kcal per kg^0.75 per day).
pub const RER_COEFFICIENT: f64 = 70.0;

/// Exponent of the RER formula.
pub const RER_EXPONENT: f64 = 0.75;

/// Growth multiplier for kittens. Applies regardless of goal or neuter status.
pub const CAT_KITTEN_FACTOR: f64 = 2.5;

/// Weight-loss multiplier for adult and senior cats.
pub const CAT_WEIGHT_LOSS_FACTOR: f64 = 0.8;

/// Weight-gain multiplier for adult and senior cats.
pub const CAT_WEIGHT_GAIN_FACTOR: f64 = 1.3;

/// Maintenance multiplier for neutered adult and senior cats.
pub const CAT_NEUTERED_MAINTAIN_FACTOR: f64 = 1.0;

/// Maintenance multiplier for intact adult and senior cats.
pub const CAT_INTACT_MAINTAIN_FACTOR: f64 = 1.2;

/// Growth multiplier for puppies. Applies regardless of goal or neuter status.
pub const DOG_PUPPY_FACTOR: f64 = 2.5;

/// Weight-loss multiplier for adult and senior dogs.
pub const DOG_WEIGHT_LOSS_FACTOR: f64 = 1.0;

/// Weight-gain multiplier for adult and senior dogs.
pub const DOG_WEIGHT_GAIN_FACTOR: f64 = 1.9;

/// Maintenance multiplier for neutered adult and senior dogs.
pub const DOG_NEUTERED_MAINTAIN_FACTOR: f64 = 1.6;

/// Maintenance multiplier for intact adult and senior dogs.
pub const DOG_INTACT_MAINTAIN_FACTOR: f64 = 1.8;

/// Mass unit reported on the normal feeding-amount path.
pub const GRAMS_UNIT: &str = "g";
