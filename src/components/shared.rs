mod error;
mod plotly_chart;

pub use error::ErrorDisplay;
pub use plotly_chart::PlotlyChart;
