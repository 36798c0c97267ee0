pub mod calculator;
pub mod constants;

pub use calculator::{
    calculate_daily_calories, calculate_feeding_amount, calculate_rer, der_factor, FeedingAmount,
};
pub use constants::*;
