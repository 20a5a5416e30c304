//! Shared, renderer-independent pieces of the executive dashboard.
//! Holds the static dataset, value formatting, the shell view-model and the
//! chart payload builders so the frontend only has to turn them into markup.

mod charts;
mod dataset;
mod error;
mod format;
mod icon;
mod layout;
mod navigation;

pub use charts::{ChartSpec, regional_chart, trend_chart};
pub use dataset::{
    BRAND_MARK, BRAND_NAME, CURRENCY_CODE, DASHBOARD_SUBTITLE, DASHBOARD_TITLE, Dataset,
    GROWTH_LABEL, KPI_DELTA, KpiEntry, MonthlyRecord, RegionRecord, SYSTEM_STATUS,
    TOP_REGION_LABEL, currency_symbol,
};
pub use error::{DashboardError, Result};
pub use format::{AXIS_TICK_STEP, AxisTick, PALETTE, axis_ticks, format_axis_value, palette_color};
pub use icon::Icon;
pub use layout::{
    DEFAULT_NARROW_BREAKPOINT_PX, DrawerView, LayoutMode, NavPanelView, NavWidth, ShellAction,
    ShellState, ShellView,
};
pub use navigation::{NAV_ENTRIES, NavEntry};
