//! Plotly.js payloads for the dashboard charts.
//!
//! Traces for the trend chart are built with the `plotly` crate; layouts and
//! the donut trace are plain JSON because they only set a handful of keys.

use crate::dataset::{Dataset, currency_symbol};
use crate::error::Result;
use crate::format::{axis_ticks, palette_color};
use plotly::Scatter;
use plotly::common::{DashType, Fill, Line, LineShape, Mode};
use serde_json::{Value, json};
use tracing::debug;

pub const ACTUAL_COLOR: &str = "#2563eb";
pub const ACTUAL_FILL: &str = "rgba(37, 99, 235, 0.15)";
pub const BUDGET_COLOR: &str = "#e2e8f0";
const GRID_COLOR: &str = "#f1f5f9";
const TICK_COLOR: &str = "#94a3b8";

/// Inner radius over outer radius of the regional donut.
pub const DONUT_HOLE: f64 = 0.73;

/// Arguments for a single `Plotly.newPlot` call.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub data: Value,
    pub layout: Value,
    pub config: Value,
}

fn chart_config() -> Value {
    json!({"responsive": true, "displayModeBar": false})
}

/// Area chart of actual against budget, one category per month in dataset order.
pub fn trend_chart(dataset: &Dataset) -> Result<ChartSpec> {
    let months: Vec<String> = dataset
        .month_labels()
        .into_iter()
        .map(str::to_string)
        .collect();
    let actual: Vec<i64> = dataset.monthly.iter().map(|m| m.actual).collect();
    let budget: Vec<i64> = dataset.monthly.iter().map(|m| m.budget).collect();

    let actual_trace = Scatter::new(months.clone(), actual)
        .mode(Mode::Lines)
        .name("Actual")
        .fill(Fill::ToZeroY)
        .fill_color(ACTUAL_FILL)
        .line(
            Line::new()
                .color(ACTUAL_COLOR)
                .width(4.0)
                .shape(LineShape::Spline),
        )
        .hover_template("Actual: %{y:d}<extra></extra>");

    let budget_trace = Scatter::new(months.clone(), budget)
        .mode(Mode::Lines)
        .name("Budget")
        .fill(Fill::None)
        .line(
            Line::new()
                .color(BUDGET_COLOR)
                .width(2.0)
                .shape(LineShape::Spline)
                .dash(DashType::Dash),
        )
        .hover_template("Budget: %{y:d}<extra></extra>");

    let data = Value::Array(vec![
        serde_json::to_value(&actual_trace)?,
        serde_json::to_value(&budget_trace)?,
    ]);

    let symbol = currency_symbol();
    let ticks = axis_ticks(dataset.max_amount(), symbol);
    let tick_values: Vec<i64> = ticks.iter().map(|t| t.value).collect();
    let tick_text: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();

    let layout = json!({
        "margin": {"t": 10, "r": 10, "l": 60, "b": 30},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "showlegend": false,
        "hovermode": "x unified",
        "xaxis": {
            "type": "category",
            "categoryorder": "array",
            "categoryarray": months,
            "showgrid": false,
            "tickfont": {"color": TICK_COLOR, "size": 12}
        },
        "yaxis": {
            "tickmode": "array",
            "tickvals": tick_values,
            "ticktext": tick_text,
            "showgrid": true,
            "gridcolor": GRID_COLOR,
            "griddash": "dash",
            "zeroline": false,
            "tickfont": {"color": TICK_COLOR, "size": 12}
        }
    });

    debug!(months = dataset.monthly.len(), ticks = ticks.len(), "built trend chart payload");

    Ok(ChartSpec {
        data,
        layout,
        config: chart_config(),
    })
}

/// Donut chart of sales per region. Slice `i` is painted `palette_color(i)`.
pub fn regional_chart(dataset: &Dataset) -> ChartSpec {
    let labels = dataset.region_names();
    let values: Vec<i64> = dataset.regions.iter().map(|r| r.sales).collect();
    let colors: Vec<&str> = (0..dataset.regions.len()).map(palette_color).collect();

    let data = json!([{
        "type": "pie",
        "labels": labels,
        "values": values,
        "hole": DONUT_HOLE,
        "sort": false,
        "direction": "clockwise",
        "textinfo": "none",
        "marker": {"colors": colors, "line": {"width": 0}},
        "hovertemplate": "%{label}: %{value:d}<extra></extra>"
    }]);

    let layout = json!({
        "margin": {"t": 10, "r": 10, "l": 10, "b": 10},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "showlegend": true,
        "legend": {
            "orientation": "h",
            "x": 0.5,
            "xanchor": "center",
            "y": -0.1,
            "font": {"size": 12}
        }
    });

    debug!(regions = dataset.regions.len(), "built regional chart payload");

    ChartSpec {
        data,
        layout,
        config: chart_config(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{MonthlyRecord, RegionRecord};
    use crate::format::PALETTE;

    static SHUFFLED_MONTHS: [MonthlyRecord; 3] = [
        MonthlyRecord {
            month: "Mar",
            actual: 3,
            budget: 30,
        },
        MonthlyRecord {
            month: "Apr",
            actual: 1,
            budget: 10,
        },
        MonthlyRecord {
            month: "Feb",
            actual: 2,
            budget: 20,
        },
    ];

    static SIX_REGIONS: [RegionRecord; 6] = [
        RegionRecord {
            name: "A",
            sales: 1,
        },
        RegionRecord {
            name: "B",
            sales: 2,
        },
        RegionRecord {
            name: "C",
            sales: 3,
        },
        RegionRecord {
            name: "D",
            sales: 4,
        },
        RegionRecord {
            name: "E",
            sales: 5,
        },
        RegionRecord {
            name: "F",
            sales: 6,
        },
    ];

    fn strings(value: &Value) -> Vec<String> {
        value
            .as_array()
            .expect("array")
            .iter()
            .map(|v| v.as_str().expect("string").to_string())
            .collect()
    }

    #[test]
    fn test_trend_chart_categories_follow_dataset_order() {
        let spec = trend_chart(Dataset::fiscal_year()).unwrap();
        let expected = vec![
            "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec", "Jan", "Feb", "Mar",
        ];

        assert_eq!(strings(&spec.data[0]["x"]), expected);
        assert_eq!(strings(&spec.data[1]["x"]), expected);
        assert_eq!(strings(&spec.layout["xaxis"]["categoryarray"]), expected);
        assert_eq!(spec.layout["xaxis"]["categoryorder"], "array");
    }

    #[test]
    fn test_trend_chart_reorders_with_data() {
        let dataset = Dataset {
            kpis: &[],
            monthly: &SHUFFLED_MONTHS,
            regions: &[],
        };
        let spec = trend_chart(&dataset).unwrap();
        assert_eq!(strings(&spec.data[0]["x"]), vec!["Mar", "Apr", "Feb"]);
        assert_eq!(spec.data[0]["y"], json!([3, 1, 2]));
        assert_eq!(spec.data[1]["y"], json!([30, 10, 20]));
    }

    #[test]
    fn test_trend_chart_series_styles() {
        let spec = trend_chart(Dataset::fiscal_year()).unwrap();
        let actual = &spec.data[0];
        let budget = &spec.data[1];

        assert_eq!(actual["name"], "Actual");
        assert_eq!(actual["fill"], "tozeroy");
        assert_eq!(actual["line"]["color"], ACTUAL_COLOR);
        assert_eq!(actual["y"][0], 10_041_812);

        assert_eq!(budget["name"], "Budget");
        assert_eq!(budget["fill"], "none");
        assert_eq!(budget["line"]["dash"], "dash");
        assert_eq!(budget["y"][0], 10_772_113);
    }

    #[test]
    fn test_trend_chart_hover_rows_omit_month() {
        let spec = trend_chart(Dataset::fiscal_year()).unwrap();
        assert_eq!(spec.layout["hovermode"], "x unified");
        assert_eq!(spec.data[0]["hovertemplate"], "Actual: %{y:d}<extra></extra>");
        assert_eq!(spec.data[1]["hovertemplate"], "Budget: %{y:d}<extra></extra>");
        assert_eq!(spec.layout["yaxis"]["griddash"], "dash");
    }

    #[test]
    fn test_trend_chart_axis_labels_are_formatted() {
        let spec = trend_chart(Dataset::fiscal_year()).unwrap();
        assert_eq!(
            strings(&spec.layout["yaxis"]["ticktext"]),
            vec!["₹0M", "₹3M", "₹6M", "₹9M", "₹12M"]
        );
        assert_eq!(
            spec.layout["yaxis"]["tickvals"],
            json!([0, 3_000_000, 6_000_000, 9_000_000, 12_000_000])
        );
    }

    #[test]
    fn test_regional_chart_colors_by_index() {
        let spec = regional_chart(Dataset::fiscal_year());
        let slice = &spec.data[0];

        assert_eq!(
            strings(&slice["labels"]),
            vec!["East", "North", "Central", "South", "West"]
        );
        assert_eq!(strings(&slice["marker"]["colors"]), PALETTE.to_vec());
        assert_eq!(slice["sort"], false);
        assert_eq!(slice["hole"], DONUT_HOLE);
        assert_eq!(slice["values"][0], 26_898_924);
    }

    #[test]
    fn test_regional_chart_sixth_region_reuses_first_color() {
        let dataset = Dataset {
            kpis: &[],
            monthly: &[],
            regions: &SIX_REGIONS,
        };
        let spec = regional_chart(&dataset);
        let colors = strings(&spec.data[0]["marker"]["colors"]);
        assert_eq!(colors.len(), 6);
        assert_eq!(colors[5], PALETTE[0]);
    }

    #[test]
    fn test_chart_config_hides_mode_bar() {
        let spec = regional_chart(Dataset::fiscal_year());
        assert_eq!(spec.config["displayModeBar"], false);
        assert_eq!(spec.config["responsive"], true);
    }
}
