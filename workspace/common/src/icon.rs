//! Icon identifiers used by dashboard records.
//!
//! Records only carry an [`Icon`]; the frontend resolves it to a concrete
//! glyph when rendering.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Dashboard,
    TrendingUp,
    BarChart,
    PieChart,
    Settings,
    DollarSign,
    Globe,
    Download,
    Bell,
    Menu,
    Close,
    ChevronLeft,
    ChevronRight,
}

impl Icon {
    pub const ALL: [Icon; 13] = [
        Icon::Dashboard,
        Icon::TrendingUp,
        Icon::BarChart,
        Icon::PieChart,
        Icon::Settings,
        Icon::DollarSign,
        Icon::Globe,
        Icon::Download,
        Icon::Bell,
        Icon::Menu,
        Icon::Close,
        Icon::ChevronLeft,
        Icon::ChevronRight,
    ];

    /// Stable lookup key of the icon.
    pub fn key(self) -> &'static str {
        match self {
            Icon::Dashboard => "dashboard",
            Icon::TrendingUp => "trending-up",
            Icon::BarChart => "bar-chart",
            Icon::PieChart => "pie-chart",
            Icon::Settings => "settings",
            Icon::DollarSign => "dollar-sign",
            Icon::Globe => "globe",
            Icon::Download => "download",
            Icon::Bell => "bell",
            Icon::Menu => "menu",
            Icon::Close => "close",
            Icon::ChevronLeft => "chevron-left",
            Icon::ChevronRight => "chevron-right",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
