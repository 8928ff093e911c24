//! Value formatting policy
//!
//! Pure functions mapping numeric values to the display strings used by
//! chart labels and tooltips. The caller always supplies the percentage
//! denominator; the formatter never decides "percent of what" on its own
//! and never emits NaN or infinity for a zero denominator.

use serde::{Deserialize, Serialize};

use crate::models::Money;

/// How a chart label renders a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueDisplay {
    /// No label
    None,
    /// Currency value only
    #[default]
    Value,
    /// Percentage of the supplied total only
    Percentage,
    /// "value (percentage)"
    Both,
}

/// Percentage of `part` relative to `total`, 0 when the total is zero
pub fn percentage_of(part: Money, total: Money) -> f64 {
    if total.is_zero() {
        0.0
    } else {
        part.to_major_units() / total.to_major_units() * 100.0
    }
}

/// Currency form with two decimal places, e.g. "$150.00"
pub fn format_currency(value: Money) -> String {
    value.to_string()
}

/// Percentage form with one decimal place, e.g. "50.0%"
pub fn format_percentage(part: Money, total: Money) -> String {
    format!("{:.1}%", percentage_of(part, total))
}

/// Format a value per the display mode, with `total` as the percentage base
pub fn format_value(value: Money, total: Money, mode: ValueDisplay) -> String {
    match mode {
        ValueDisplay::None => String::new(),
        ValueDisplay::Value => format_currency(value),
        ValueDisplay::Percentage => format_percentage(value, total),
        ValueDisplay::Both => format!(
            "{} ({})",
            format_currency(value),
            format_percentage(value, total)
        ),
    }
}

/// Compact thousands form used by chart axis ticks, e.g. "$1.5k"
pub fn format_axis_label(value: Money) -> String {
    format!("${:.1}k", value.to_major_units() / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_mode() {
        let s = format_value(Money::from_cents(70_000), Money::from_cents(140_000), ValueDisplay::Value);
        assert_eq!(s, "$700.00");
    }

    #[test]
    fn test_percentage_mode() {
        let s = format_value(
            Money::from_cents(70_000),
            Money::from_cents(140_000),
            ValueDisplay::Percentage,
        );
        assert_eq!(s, "50.0%");
    }

    #[test]
    fn test_both_mode() {
        let s = format_value(
            Money::from_cents(70_000),
            Money::from_cents(140_000),
            ValueDisplay::Both,
        );
        assert_eq!(s, "$700.00 (50.0%)");
    }

    #[test]
    fn test_none_mode() {
        let s = format_value(Money::from_cents(70_000), Money::from_cents(140_000), ValueDisplay::None);
        assert_eq!(s, "");
    }

    #[test]
    fn test_zero_total_never_yields_nan() {
        assert_eq!(percentage_of(Money::from_cents(500), Money::zero()), 0.0);
        let s = format_value(Money::from_cents(500), Money::zero(), ValueDisplay::Both);
        assert_eq!(s, "$5.00 (0.0%)");
    }

    #[test]
    fn test_axis_label() {
        assert_eq!(format_axis_label(Money::from_cents(150_000)), "$1.5k");
        assert_eq!(format_axis_label(Money::from_cents(170_000)), "$1.7k");
    }

    #[test]
    fn test_default_mode_is_value() {
        assert_eq!(ValueDisplay::default(), ValueDisplay::Value);
    }
}
