//! # Shared Utility Functions
//!
//! Formatting helpers used by every FasalSaathi surface (terminal views,
//! dashboards, chat transcripts).
//!
//! - [`format_inr`] - Format a rupee amount with Indian-system digit grouping
//! - [`round2`] - Round to two decimal places (derived price fields)

/// Format a rupee amount with Indian-system grouping: the last three digits
/// form one group, every two digits after that form another
/// (`550000` → `"₹5,50,000"`).
///
/// Fractional paise are dropped; mandi rates are quoted in whole rupees.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_inr;
///
/// assert_eq!(format_inr(5250.0), "₹5,250");
/// assert_eq!(format_inr(550000.0), "₹5,50,000");
/// ```
pub fn format_inr(amount: f64) -> String {
    let negative = amount < 0.0;
    let whole = amount.abs().trunc() as u64;
    let digits = whole.to_string();

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut parts: Vec<String> = Vec::new();
        let head_bytes = head.as_bytes();
        let mut i = head_bytes.len();
        while i > 0 {
            let start = i.saturating_sub(2);
            parts.push(head[start..i].to_string());
            i = start;
        }
        parts.reverse();
        format!("{},{}", parts.join(","), tail)
    };

    if negative {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

/// Round a value to two decimal places.
///
/// Used for derived market fields (percent change) so displayed values are
/// stable across recomputation.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
