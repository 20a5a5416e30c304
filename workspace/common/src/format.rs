//! Display formatting for chart axes and categorical colors.

use rust_decimal::Decimal;

/// Categorical colors, cycled by index.
pub const PALETTE: [&str; 5] = ["#2563eb", "#10b981", "#8b5cf6", "#f59e0b", "#ef4444"];

/// Spacing between vertical-axis ticks of the trend chart.
pub const AXIS_TICK_STEP: i64 = 3_000_000;

/// Formats an amount in millions: `10041812` becomes `₹10.041812M`.
///
/// The quotient is exact. Trailing zeros are dropped (`3000000` becomes
/// `₹3M`) and nothing is rounded.
pub fn format_axis_value(value: i64, symbol: &str) -> String {
    let millions = Decimal::new(value, 6).normalize();
    format!("{}{}M", symbol, millions)
}

/// Color assigned to the series at `index`. A sixth series reuses the first color.
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// A labelled tick on a value axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisTick {
    pub value: i64,
    pub label: String,
}

/// Ticks every [`AXIS_TICK_STEP`] from zero up to the first step at or above `max`.
pub fn axis_ticks(max: i64, symbol: &str) -> Vec<AxisTick> {
    let steps = if max <= 0 {
        0
    } else {
        (max + AXIS_TICK_STEP - 1) / AXIS_TICK_STEP
    };

    (0..=steps)
        .map(|step| {
            let value = step * AXIS_TICK_STEP;
            AxisTick {
                value,
                label: format_axis_value(value, symbol),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_axis_value_keeps_exact_quotient() {
        assert_eq!(format_axis_value(10_041_812, "₹"), "₹10.041812M");
        assert_eq!(format_axis_value(9_678_456, "₹"), "₹9.678456M");
    }

    #[test]
    fn test_format_axis_value_drops_trailing_zeros() {
        assert_eq!(format_axis_value(3_000_000, "₹"), "₹3M");
        assert_eq!(format_axis_value(12_500_000, "₹"), "₹12.5M");
        assert_eq!(format_axis_value(0, "₹"), "₹0M");
    }

    #[test]
    fn test_format_axis_value_negative() {
        assert_eq!(format_axis_value(-1_500_000, "$"), "$-1.5M");
    }

    #[test]
    fn test_palette_cycles_by_index() {
        for (index, color) in PALETTE.iter().enumerate() {
            assert_eq!(palette_color(index), *color);
        }
        assert_eq!(palette_color(5), PALETTE[0]);
        assert_eq!(palette_color(7), PALETTE[2]);
    }

    #[test]
    fn test_axis_ticks_cover_max() {
        let ticks = axis_ticks(11_991_008, "₹");
        let values: Vec<_> = ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![0, 3_000_000, 6_000_000, 9_000_000, 12_000_000]);

        let labels: Vec<_> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["₹0M", "₹3M", "₹6M", "₹9M", "₹12M"]);
    }

    #[test]
    fn test_axis_ticks_on_exact_step() {
        let ticks = axis_ticks(6_000_000, "₹");
        assert_eq!(ticks.last().map(|t| t.value), Some(6_000_000));
        assert_eq!(ticks.len(), 3);
    }

    #[test]
    fn test_axis_ticks_empty_range() {
        let ticks = axis_ticks(0, "₹");
        assert_eq!(
            ticks,
            vec![AxisTick {
                value: 0,
                label: "₹0M".to_string()
            }]
        );
    }
}
