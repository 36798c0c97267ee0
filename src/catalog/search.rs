use strsim::jaro_winkler;

use crate::models::{Food, FoodType, Species};

/// Minimum Jaro-Winkler similarity for a fuzzy candidate.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Catalog browse filter. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct FoodFilter {
    pub query: Option<String>,
    pub food_type: Option<FoodType>,
    /// Restrict to foods suitable for this species (`Both` always matches).
    pub species: Option<Species>,
}

/// Filter the catalog the way the search screen does: substring query over
/// brand/product/barcode, optional type filter, species suitability.
pub fn filter_foods<'a>(foods: &'a [Food], filter: &FoodFilter) -> Vec<&'a Food> {
    foods
        .iter()
        .filter(|f| match &filter.query {
            Some(q) if !q.is_empty() => f.matches_query(q),
            _ => true,
        })
        .filter(|f| match filter.food_type {
            Some(food_type) => f.food_type == food_type,
            None => true,
        })
        .filter(|f| match filter.species {
            Some(species) => f.species.suits(species),
            None => true,
        })
        .collect()
}

/// Exact case-insensitive match on the display name or bare product name.
pub fn exact_match<'a>(foods: &'a [Food], name: &str) -> Option<&'a Food> {
    let needle = name.to_lowercase();
    foods.iter().find(|f| {
        f.display_name().to_lowercase() == needle || f.product_name.to_lowercase() == needle
    })
}

/// Rank foods against an inexact name, best first. Candidates at or below
/// the similarity threshold are dropped.
pub fn fuzzy_rank<'a>(foods: &'a [Food], name: &str) -> Vec<(&'a Food, f64)> {
    let needle = name.to_lowercase();
    let mut ranked: Vec<(&Food, f64)> = foods
        .iter()
        .map(|f| {
            let against_display = jaro_winkler(&f.display_name().to_lowercase(), &needle);
            let against_product = jaro_winkler(&f.product_name.to_lowercase(), &needle);
            (f, against_display.max(against_product))
        })
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}
