//! # Crop Recommendation View Records
//!
//! Season filter plus four sort keys. Water requirement and market demand
//! are ordinal scales, so sorting maps them to fixed ranks rather than
//! comparing strings.

use super::{matches_search, FilterOutcome};

/// Three-step ordinal scale (water requirement, market demand, risk).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    /// Fixed ordinal rank: low=1, medium=2, high=3.
    pub fn rank(&self) -> u8 {
        match self {
            Level::Low => 1,
            Level::Medium => 2,
            Level::High => 3,
        }
    }

    pub fn parse(value: &str) -> Option<Level> {
        match value {
            "low" => Some(Level::Low),
            "medium" => Some(Level::Medium),
            "high" => Some(Level::High),
            _ => None,
        }
    }
}

/// Climate suitability grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suitability {
    Excellent,
    Good,
    Fair,
}

/// One recommendation card.
#[derive(Debug, Clone, PartialEq)]
pub struct CropRecommendation {
    pub id: i64,
    pub name: String,
    pub name_hindi: String,
    /// Expected profit in ₹ per acre.
    pub profit_margin: f64,
    /// Display text like "8-10 क्विंटल/एकड़".
    pub expected_yield: String,
    pub water_requirement: Level,
    pub market_demand: Level,
    pub climate_suitability: Suitability,
    pub season: String,
    /// Crop duration in days.
    pub duration: u32,
    /// Up-front investment in ₹ per acre.
    pub investment: f64,
    pub risk_level: Level,
}

/// Sort keys offered by the recommendations view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecommendationSort {
    /// Highest profit first (the view's default).
    #[default]
    Profit,
    /// Least thirsty first.
    Water,
    /// Strongest demand first.
    Demand,
    /// Name ascending.
    Name,
}

impl RecommendationSort {
    /// Parse a stored sort key; unknown values fall back to the default.
    pub fn parse(value: &str) -> RecommendationSort {
        match value {
            "profit" => RecommendationSort::Profit,
            "water" => RecommendationSort::Water,
            "demand" => RecommendationSort::Demand,
            "name" => RecommendationSort::Name,
            _ => RecommendationSort::default(),
        }
    }
}

/// Filter/sort state for the recommendations view.
#[derive(Debug, Clone, Default)]
pub struct RecommendationQuery {
    /// Case-insensitive substring over both name fields.
    pub search: String,
    /// Exact season match. `None` = the "all" sentinel.
    pub season: Option<String>,
    pub sort: RecommendationSort,
}

impl RecommendationQuery {
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.season.is_some()
    }

    /// Apply filters then the selected sort. Stable under ties.
    pub fn apply(&self, crops: &[CropRecommendation]) -> FilterOutcome<CropRecommendation> {
        let mut kept: Vec<CropRecommendation> = crops
            .iter()
            .filter(|crop| {
                let matches_name =
                    matches_search(&[&crop.name, &crop.name_hindi], &self.search);
                let matches_season = self
                    .season
                    .as_deref()
                    .map_or(true, |season| crop.season == season);
                matches_name && matches_season
            })
            .cloned()
            .collect();

        match self.sort {
            RecommendationSort::Profit => kept.sort_by(|a, b| {
                b.profit_margin
                    .partial_cmp(&a.profit_margin)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            RecommendationSort::Water => {
                kept.sort_by_key(|crop| crop.water_requirement.rank())
            }
            RecommendationSort::Demand => {
                kept.sort_by_key(|crop| std::cmp::Reverse(crop.market_demand.rank()))
            }
            RecommendationSort::Name => kept.sort_by(|a, b| a.name.cmp(&b.name)),
        }

        FilterOutcome {
            items: kept,
            filtered: self.is_active(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crop(
        id: i64,
        name: &str,
        name_hindi: &str,
        profit: f64,
        water: Level,
        demand: Level,
        season: &str,
    ) -> CropRecommendation {
        CropRecommendation {
            id,
            name: name.to_string(),
            name_hindi: name_hindi.to_string(),
            profit_margin: profit,
            expected_yield: "8-10 क्विंटल/एकड़".to_string(),
            water_requirement: water,
            market_demand: demand,
            climate_suitability: Suitability::Good,
            season: season.to_string(),
            duration: 120,
            investment: 15000.0,
            risk_level: Level::Medium,
        }
    }

    fn sample() -> Vec<CropRecommendation> {
        vec![
            crop(1, "Soybean", "सोयाबीन", 65000.0, Level::Medium, Level::High, "खरीफ"),
            crop(2, "Gram", "चना", 55000.0, Level::Low, Level::High, "रबी"),
            crop(3, "Mustard", "सरसों", 48000.0, Level::Low, Level::Medium, "रबी"),
            crop(4, "Cotton", "कपास", 85000.0, Level::High, Level::High, "खरीफ"),
        ]
    }

    #[test]
    fn test_default_sort_profit_descending() {
        let outcome = RecommendationQuery::default().apply(&sample());
        let names: Vec<&str> = outcome.items.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Cotton", "Soybean", "Gram", "Mustard"]);
    }

    #[test]
    fn test_water_sort_ascending_by_ordinal() {
        let query = RecommendationQuery {
            sort: RecommendationSort::Water,
            ..Default::default()
        };
        let outcome = query.apply(&sample());
        let ranks: Vec<u8> = outcome
            .items
            .iter()
            .map(|c| c.water_requirement.rank())
            .collect();
        assert_eq!(ranks, vec![1, 1, 2, 3]);
        // Gram and Mustard tie at low water; source order is preserved.
        assert_eq!(outcome.items[0].name, "Gram");
        assert_eq!(outcome.items[1].name, "Mustard");
    }

    #[test]
    fn test_demand_sort_descending_by_ordinal() {
        let query = RecommendationQuery {
            sort: RecommendationSort::Demand,
            ..Default::default()
        };
        let outcome = query.apply(&sample());
        let ranks: Vec<u8> = outcome.items.iter().map(|c| c.market_demand.rank()).collect();
        assert_eq!(ranks, vec![3, 3, 3, 2]);
        // High-demand ties keep source order: Soybean, Gram, Cotton.
        let names: Vec<&str> = outcome.items.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Soybean", "Gram", "Cotton", "Mustard"]);
    }

    #[test]
    fn test_season_filter_with_all_sentinel() {
        let all = RecommendationQuery::default().apply(&sample());
        assert_eq!(all.len(), 4);
        assert!(!all.filtered);

        let rabi = RecommendationQuery {
            season: Some("रबी".to_string()),
            ..Default::default()
        };
        let outcome = rabi.apply(&sample());
        assert_eq!(outcome.len(), 2);
        assert!(outcome.items.iter().all(|c| c.season == "रबी"));
        assert!(outcome.filtered);
    }

    #[test]
    fn test_search_and_season_combine() {
        let query = RecommendationQuery {
            search: "सरसों".to_string(),
            season: Some("रबी".to_string()),
            ..Default::default()
        };
        let outcome = query.apply(&sample());
        assert_eq!(outcome.len(), 1);
        assert_eq!(outcome.items[0].name, "Mustard");
    }

    #[test]
    fn test_unknown_sort_key_falls_back_to_profit() {
        assert_eq!(RecommendationSort::parse("yield"), RecommendationSort::Profit);
        assert_eq!(RecommendationSort::parse("water"), RecommendationSort::Water);
    }

    #[test]
    fn test_level_parse() {
        assert_eq!(Level::parse("medium"), Some(Level::Medium));
        assert_eq!(Level::parse("extreme"), None);
    }

    #[test]
    fn test_empty_source() {
        let query = RecommendationQuery {
            search: "कुछ".to_string(),
            season: Some("खरीफ".to_string()),
            sort: RecommendationSort::Demand,
        };
        assert!(query.apply(&[]).is_empty());
    }
}
