mod chart;
mod stats;
mod view;

pub use chart::{RegionalShareChart, TrendChart};
pub use stats::Stats;
pub use view::{Dashboard, Props as DashboardProps};
