//! # Inventory Filtering and Stats
//!
//! The inventory view holds its items in memory and derives the displayed
//! subset from the current filter state. "Low stock" is a derived
//! predicate, never a stored flag, so it cannot go stale when quantity or
//! threshold change independently.

use chrono::NaiveDate;

use super::{matches_search, FilterOutcome};

/// Inventory category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Fertilizer,
    Seeds,
    Pesticide,
    Equipment,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Fertilizer,
        Category::Seeds,
        Category::Pesticide,
        Category::Equipment,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fertilizer => "fertilizer",
            Category::Seeds => "seeds",
            Category::Pesticide => "pesticide",
            Category::Equipment => "equipment",
            Category::Other => "other",
        }
    }

    /// Parse a stored category value. Unknown strings return `None`, which
    /// downstream means "no category filter" — stale state degrades to
    /// pass-through instead of an error.
    pub fn parse(value: &str) -> Option<Category> {
        match value {
            "fertilizer" => Some(Category::Fertilizer),
            "seeds" => Some(Category::Seeds),
            "pesticide" => Some(Category::Pesticide),
            "equipment" => Some(Category::Equipment),
            "other" => Some(Category::Other),
            _ => None,
        }
    }
}

/// One inventory record. `quantity` and `low_stock_threshold` are
/// independently mutable.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub name_hindi: String,
    pub category: Category,
    pub quantity: f64,
    pub unit: String,
    pub low_stock_threshold: f64,
    pub cost: f64,
    pub supplier: String,
    pub expiry_date: Option<NaiveDate>,
    pub last_updated: NaiveDate,
}

impl InventoryItem {
    /// Derived low-stock predicate.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.low_stock_threshold
    }
}

/// Filter state for the inventory view.
#[derive(Debug, Clone, Default)]
pub struct InventoryFilter {
    /// Case-insensitive substring over both name fields. Empty = no filter.
    pub search: String,
    /// Exact category match. `None` = the "all" sentinel.
    pub category: Option<Category>,
    /// Keep only items at or below their threshold.
    pub low_stock_only: bool,
}

impl InventoryFilter {
    /// True when any non-sentinel predicate is active.
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.category.is_some() || self.low_stock_only
    }

    /// Apply the filter, preserving source order.
    pub fn apply(&self, items: &[InventoryItem]) -> FilterOutcome<InventoryItem> {
        let kept = items
            .iter()
            .filter(|item| {
                let matches_name =
                    matches_search(&[&item.name, &item.name_hindi], &self.search);
                let matches_category =
                    self.category.map_or(true, |cat| item.category == cat);
                let matches_low_stock = !self.low_stock_only || item.is_low_stock();
                matches_name && matches_category && matches_low_stock
            })
            .cloned()
            .collect();

        FilterOutcome {
            items: kept,
            filtered: self.is_active(),
        }
    }
}

/// Aggregates shown in the stats row of the inventory view.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryStats {
    pub total_items: usize,
    pub low_stock_count: usize,
    /// Σ cost × quantity.
    pub total_value: f64,
    pub category_count: usize,
    /// (category, item count) in `Category::ALL` order, empty categories
    /// omitted.
    pub per_category: Vec<(Category, usize)>,
}

/// Compute the stats row from the full (unfiltered) item list.
pub fn stats(items: &[InventoryItem]) -> InventoryStats {
    let low_stock_count = items.iter().filter(|item| item.is_low_stock()).count();
    let total_value = items.iter().map(|item| item.cost * item.quantity).sum();

    let per_category: Vec<(Category, usize)> = Category::ALL
        .iter()
        .filter_map(|&cat| {
            let count = items.iter().filter(|item| item.category == cat).count();
            (count > 0).then_some((cat, count))
        })
        .collect();

    InventoryStats {
        total_items: items.len(),
        low_stock_count,
        total_value,
        category_count: per_category.len(),
        per_category,
    }
}
