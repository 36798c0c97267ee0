mod manager;
mod persistence;

pub use manager::{TrackerData, TrackerStateManager};
pub use persistence::{load_state, load_state_or_default, save_state};
