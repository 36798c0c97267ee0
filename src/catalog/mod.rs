pub mod barcode;
pub mod import;
pub mod search;
pub mod seed;

pub use barcode::{is_likely_barcode, normalize_barcode};
pub use import::{import_foods_csv, import_foods_from_reader, ImportSummary};
pub use search::{exact_match, filter_foods, fuzzy_rank, FoodFilter};
pub use seed::seed_foods;
