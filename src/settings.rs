use common::{DashboardError, LayoutMode, DEFAULT_NARROW_BREAKPOINT_PX};
use log::Level;
use std::str::FromStr;
use web_sys::window;

pub const LAYOUT_MODE_KEY: &str = "finboard_layout_mode";
pub const NARROW_BREAKPOINT_KEY: &str = "finboard_narrow_breakpoint_px";
pub const LOG_LEVEL_KEY: &str = "finboard_log_level";

const STORAGE_KEYS: [&str; 3] = [LAYOUT_MODE_KEY, NARROW_BREAKPOINT_KEY, LOG_LEVEL_KEY];

/// Global dashboard settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Which shell variant to render
    pub layout_mode: LayoutMode,

    /// Viewports narrower than this (in CSS pixels) use the drawer layout
    pub narrow_breakpoint_px: u32,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            layout_mode: LayoutMode::default(),
            narrow_breakpoint_px: DEFAULT_NARROW_BREAKPOINT_PX,
            log_level: Level::Info,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from the window location and localStorage.
    ///
    /// Stored values that cannot be applied are returned next to the settings
    /// so they can be reported once logging is up.
    pub fn from_environment() -> (Self, Vec<DashboardError>) {
        let mut settings = Self::default();
        let mut rejected = Vec::new();

        let Some(window) = window() else {
            return (settings, rejected);
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            for key in STORAGE_KEYS {
                if let Ok(Some(value)) = storage.get_item(key) {
                    if let Err(err) = settings.apply_override(key, &value) {
                        rejected.push(err);
                    }
                }
            }
        }

        (settings, rejected)
    }

    /// Apply a single stored `key = value` override.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), DashboardError> {
        let invalid = || DashboardError::InvalidSetting {
            key: key.to_string(),
            value: value.to_string(),
        };

        match key {
            LAYOUT_MODE_KEY => {
                self.layout_mode = value.parse()?;
            }
            NARROW_BREAKPOINT_KEY => {
                let px = value.trim().parse::<u32>().map_err(|_| invalid())?;
                if px == 0 {
                    return Err(invalid());
                }
                self.narrow_breakpoint_px = px;
            }
            LOG_LEVEL_KEY => {
                self.log_level = Level::from_str(value.trim()).map_err(|_| invalid())?;
            }
            _ => return Err(DashboardError::UnknownSetting(key.to_string())),
        }
        Ok(())
    }
}
