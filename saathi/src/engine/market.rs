//! # Mandi Price View Records
//!
//! The market view renders one card per crop with the current rate, the
//! day-over-day movement, and a sparkline of recent rates. Movement fields
//! are computed on demand from the stored prices — recomputing is cheap and
//! avoids a staleness invariant.

use super::{matches_search, FilterOutcome};
use shared::utils::round2;

/// Price card record for one crop in one market.
#[derive(Debug, Clone, PartialEq)]
pub struct CropPrice {
    pub id: i64,
    pub name: String,
    pub name_hindi: String,
    pub current_price: f64,
    pub previous_price: f64,
    pub market_name: String,
    pub category: String,
    pub unit: String,
    /// Last seven daily rates, oldest first (sparkline data).
    pub weekly: Vec<f64>,
    /// Last few monthly averages, oldest first.
    pub monthly: Vec<f64>,
}

impl CropPrice {
    /// Absolute movement since the previous rate.
    pub fn change(&self) -> f64 {
        self.current_price - self.previous_price
    }

    /// Percent movement, rounded to two decimals. A zero previous rate
    /// yields 0.0 rather than a division error.
    pub fn change_percent(&self) -> f64 {
        if self.previous_price == 0.0 {
            return 0.0;
        }
        round2(self.change() / self.previous_price * 100.0)
    }
}

/// Sort keys offered by the market view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceSort {
    /// Biggest gainers first (the view's default).
    #[default]
    Change,
    /// Highest current rate first.
    Price,
    /// Name ascending.
    Name,
}

impl PriceSort {
    /// Parse a stored sort key; unknown values fall back to the default.
    pub fn parse(value: &str) -> PriceSort {
        match value {
            "change" => PriceSort::Change,
            "price" => PriceSort::Price,
            "name" => PriceSort::Name,
            _ => PriceSort::default(),
        }
    }
}

/// Filter/sort state for the market view.
#[derive(Debug, Clone, Default)]
pub struct PriceQueryState {
    /// Case-insensitive substring over both name fields.
    pub search: String,
    pub sort: PriceSort,
}

impl PriceQueryState {
    pub fn is_active(&self) -> bool {
        !self.search.is_empty()
    }

    /// Apply search then sort. Stable: crops comparing equal keep their
    /// source order.
    pub fn apply(&self, prices: &[CropPrice]) -> FilterOutcome<CropPrice> {
        let mut kept: Vec<CropPrice> = prices
            .iter()
            .filter(|price| matches_search(&[&price.name, &price.name_hindi], &self.search))
            .cloned()
            .collect();

        match self.sort {
            PriceSort::Change => kept.sort_by(|a, b| {
                b.change_percent()
                    .partial_cmp(&a.change_percent())
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            PriceSort::Price => kept.sort_by(|a, b| {
                b.current_price
                    .partial_cmp(&a.current_price)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            PriceSort::Name => kept.sort_by(|a, b| a.name.cmp(&b.name)),
        }

        FilterOutcome {
            items: kept,
            filtered: self.is_active(),
        }
    }
}
