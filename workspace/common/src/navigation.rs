use crate::icon::Icon;

/// An entry of the navigation panel. Entries do not route anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub icon: Icon,
    pub active: bool,
}

pub const NAV_ENTRIES: [NavEntry; 4] = [
    NavEntry {
        label: "Dashboard",
        icon: Icon::Dashboard,
        active: true,
    },
    NavEntry {
        label: "Forecasting",
        icon: Icon::TrendingUp,
        active: false,
    },
    NavEntry {
        label: "Analysis",
        icon: Icon::PieChart,
        active: false,
    },
    NavEntry {
        label: "Settings",
        icon: Icon::Settings,
        active: false,
    },
];
