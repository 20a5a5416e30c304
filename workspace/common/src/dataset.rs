//! Static figures shown by the executive dashboard.
//!
//! The dataset is a compile-time constant. Slice order is significant: the
//! monthly slice drives the x-axis sequence of the trend chart and the region
//! slice drives slice order and palette assignment of the donut chart.

use crate::icon::Icon;

/// ISO code of the currency every amount is expressed in.
pub const CURRENCY_CODE: &str = "INR";

pub const DASHBOARD_TITLE: &str = "Executive Dashboard";
pub const DASHBOARD_SUBTITLE: &str = "Real-time Financial Year 2025-26 Overview";
pub const BRAND_NAME: &str = "Trial Analytics";
pub const BRAND_MARK: &str = "T";
pub const SYSTEM_STATUS: &str = "Systems Online";

/// Delta badge shown on every KPI card. Not derived from the monthly figures.
pub const KPI_DELTA: &str = "+14.2%";
/// "Top Region" legend figure under the donut chart. Literal text.
pub const TOP_REGION_LABEL: &str = "East (22%)";
/// "Growth" legend figure under the donut chart. Literal text.
pub const GROWTH_LABEL: &str = "+5.4%";

/// A single summary metric card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KpiEntry {
    pub label: &'static str,
    /// Already formatted for display, e.g. `₹119.1M`.
    pub value: &'static str,
    pub icon: Icon,
    /// Accent (foreground) color of the icon badge.
    pub color: &'static str,
    /// Background color of the icon badge.
    pub background: &'static str,
}

/// Actual and budgeted amounts for one month, in whole rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyRecord {
    pub month: &'static str,
    pub actual: i64,
    pub budget: i64,
}

/// Total sales of one territory, in whole rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionRecord {
    pub name: &'static str,
    pub sales: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dataset {
    pub kpis: &'static [KpiEntry],
    pub monthly: &'static [MonthlyRecord],
    pub regions: &'static [RegionRecord],
}

static KPIS: [KpiEntry; 4] = [
    KpiEntry {
        label: "Net Sales",
        value: "₹119.1M",
        icon: Icon::DollarSign,
        color: "#2563eb",
        background: "#eff6ff",
    },
    KpiEntry {
        label: "Gross Profit",
        value: "₹38.3M",
        icon: Icon::TrendingUp,
        color: "#059669",
        background: "#ecfdf5",
    },
    KpiEntry {
        label: "Net Income",
        value: "₹15.0M",
        icon: Icon::BarChart,
        color: "#7c3aed",
        background: "#f5f3ff",
    },
    KpiEntry {
        label: "EBITDA",
        value: "₹19.0M",
        icon: Icon::Globe,
        color: "#d97706",
        background: "#fffbeb",
    },
];

// April through March.
static MONTHLY: [MonthlyRecord; 12] = [
    MonthlyRecord {
        month: "Apr",
        actual: 10_041_812,
        budget: 10_772_113,
    },
    MonthlyRecord {
        month: "May",
        actual: 9_643_030,
        budget: 10_656_412,
    },
    MonthlyRecord {
        month: "Jun",
        actual: 8_693_637,
        budget: 10_170_695,
    },
    MonthlyRecord {
        month: "Jul",
        actual: 11_991_008,
        budget: 9_266_355,
    },
    MonthlyRecord {
        month: "Aug",
        actual: 10_681_595,
        budget: 8_098_487,
    },
    MonthlyRecord {
        month: "Sep",
        actual: 11_740_002,
        budget: 8_324_448,
    },
    MonthlyRecord {
        month: "Oct",
        actual: 9_121_629,
        budget: 11_686_728,
    },
    MonthlyRecord {
        month: "Nov",
        actual: 7_887_241,
        budget: 10_808_181,
    },
    MonthlyRecord {
        month: "Dec",
        actual: 8_924_062,
        budget: 10_464_227,
    },
    MonthlyRecord {
        month: "Jan",
        actual: 11_675_135,
        budget: 10_356_566,
    },
    MonthlyRecord {
        month: "Feb",
        actual: 8_988_796,
        budget: 10_227_594,
    },
    MonthlyRecord {
        month: "Mar",
        actual: 9_670_361,
        budget: 9_678_456,
    },
];

static REGIONS: [RegionRecord; 5] = [
    RegionRecord {
        name: "East",
        sales: 26_898_924,
    },
    RegionRecord {
        name: "North",
        sales: 24_021_060,
    },
    RegionRecord {
        name: "Central",
        sales: 22_871_066,
    },
    RegionRecord {
        name: "South",
        sales: 22_763_496,
    },
    RegionRecord {
        name: "West",
        sales: 22_503_767,
    },
];

static FISCAL_YEAR: Dataset = Dataset {
    kpis: &KPIS,
    monthly: &MONTHLY,
    regions: &REGIONS,
};

impl Dataset {
    /// The financial year 2025-26 figures rendered by the dashboard.
    pub fn fiscal_year() -> &'static Dataset {
        &FISCAL_YEAR
    }

    /// Month labels in insertion order.
    pub fn month_labels(&self) -> Vec<&'static str> {
        self.monthly.iter().map(|record| record.month).collect()
    }

    pub fn region_names(&self) -> Vec<&'static str> {
        self.regions.iter().map(|region| region.name).collect()
    }

    /// Largest actual or budget amount across all months, zero when empty.
    pub fn max_amount(&self) -> i64 {
        self.monthly
            .iter()
            .map(|record| record.actual.max(record.budget))
            .max()
            .unwrap_or(0)
    }
}

/// Symbol of the dashboard currency, looked up in the ISO currency table.
pub fn currency_symbol() -> &'static str {
    rusty_money::iso::INR.symbol
}
