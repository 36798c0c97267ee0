pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_new_pet, prompt_pet_edits, prompt_servings, prompt_yes_no, resolve_food,
};
pub use render::{
    display_calorie_budget, display_day_log, display_food_detail, display_food_list,
    display_pet_list, display_recommendation,
};
