//! Shell view-model: layout mode, toggle state and the view derived from them.
//!
//! [`ShellState`] is owned by the root component. Its setters (or
//! [`ShellState::apply`]) are the only way to change it; everything the shell
//! renders is read from [`ShellState::view`].

use crate::error::{DashboardError, Result};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Viewports narrower than this many CSS pixels count as narrow.
pub const DEFAULT_NARROW_BREAKPOINT_PX: u32 = 1024;

/// How the navigation panel is laid out next to the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutMode {
    /// Constant-width panel, no toggles.
    Fixed,
    /// Panel switches between two widths through a collapse control.
    Collapsible,
    /// Static panel on wide viewports, overlay drawer on narrow ones.
    #[default]
    Responsive,
}

impl LayoutMode {
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutMode::Fixed => "fixed",
            LayoutMode::Collapsible => "collapsible",
            LayoutMode::Responsive => "responsive",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutMode {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "fixed" => Ok(LayoutMode::Fixed),
            "collapsible" => Ok(LayoutMode::Collapsible),
            "responsive" => Ok(LayoutMode::Responsive),
            _ => Err(DashboardError::UnknownLayoutMode(s.to_string())),
        }
    }
}

/// The two widths a static navigation panel can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavWidth {
    Expanded,
    Collapsed,
}

impl NavWidth {
    /// Tailwind width utility.
    pub fn css_class(self) -> &'static str {
        match self {
            NavWidth::Expanded => "w-72",
            NavWidth::Collapsed => "w-20",
        }
    }

    pub fn px(self) -> u32 {
        match self {
            NavWidth::Expanded => 288,
            NavWidth::Collapsed => 80,
        }
    }
}

/// Requests raised by the shell's controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    ToggleCollapsed,
    OpenDrawer,
    CloseDrawer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellState {
    mode: LayoutMode,
    collapsed: bool,
    drawer_open: bool,
}

/// Static navigation panel as it should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavPanelView {
    pub width: NavWidth,
    pub show_labels: bool,
    pub collapse_toggle: bool,
}

/// Overlay drawer as it should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawerView {
    pub open: bool,
}

/// Everything the shell needs to decide what to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellView {
    pub static_nav: Option<NavPanelView>,
    pub drawer: Option<DrawerView>,
    pub hamburger: bool,
}

impl ShellState {
    /// Expanded panel, closed drawer.
    pub fn new(mode: LayoutMode) -> Self {
        Self {
            mode,
            collapsed: false,
            drawer_open: false,
        }
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Flips the collapse flag. Only the collapsible layout has one.
    pub fn toggle_collapsed(&mut self) {
        if self.mode != LayoutMode::Collapsible {
            trace!(mode = %self.mode, "ignoring collapse toggle");
            return;
        }
        self.collapsed = !self.collapsed;
        debug!(collapsed = self.collapsed, "navigation panel toggled");
    }

    pub fn open_drawer(&mut self) {
        self.set_drawer(true);
    }

    pub fn close_drawer(&mut self) {
        self.set_drawer(false);
    }

    fn set_drawer(&mut self, open: bool) {
        if self.mode != LayoutMode::Responsive {
            trace!(mode = %self.mode, open, "ignoring drawer request");
            return;
        }
        self.drawer_open = open;
        debug!(open, "navigation drawer updated");
    }

    /// Applies `action` and returns the resulting state.
    pub fn apply(mut self, action: ShellAction) -> Self {
        match action {
            ShellAction::ToggleCollapsed => self.toggle_collapsed(),
            ShellAction::OpenDrawer => self.open_drawer(),
            ShellAction::CloseDrawer => self.close_drawer(),
        }
        self
    }

    /// Derives the shell view for a viewport `viewport_width` pixels wide.
    pub fn view(&self, viewport_width: u32, narrow_breakpoint_px: u32) -> ShellView {
        let expanded = NavPanelView {
            width: NavWidth::Expanded,
            show_labels: true,
            collapse_toggle: false,
        };

        match self.mode {
            LayoutMode::Fixed => ShellView {
                static_nav: Some(expanded),
                drawer: None,
                hamburger: false,
            },
            LayoutMode::Collapsible => {
                let width = if self.collapsed {
                    NavWidth::Collapsed
                } else {
                    NavWidth::Expanded
                };
                ShellView {
                    static_nav: Some(NavPanelView {
                        width,
                        show_labels: !self.collapsed,
                        collapse_toggle: true,
                    }),
                    drawer: None,
                    hamburger: false,
                }
            }
            LayoutMode::Responsive if viewport_width < narrow_breakpoint_px => ShellView {
                static_nav: None,
                drawer: Some(DrawerView {
                    open: self.drawer_open,
                }),
                hamburger: true,
            },
            LayoutMode::Responsive => ShellView {
                static_nav: Some(expanded),
                drawer: None,
                hamburger: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NARROW: u32 = 640;
    const WIDE: u32 = 1440;

    fn view(state: &ShellState, width: u32) -> ShellView {
        state.view(width, DEFAULT_NARROW_BREAKPOINT_PX)
    }

    #[test]
    fn test_layout_mode_parsing() {
        assert_eq!("fixed".parse::<LayoutMode>().unwrap(), LayoutMode::Fixed);
        assert_eq!(
            " Collapsible ".parse::<LayoutMode>().unwrap(),
            LayoutMode::Collapsible
        );
        assert_eq!(
            "RESPONSIVE".parse::<LayoutMode>().unwrap(),
            LayoutMode::Responsive
        );

        let err = "drawer".parse::<LayoutMode>().unwrap_err();
        assert!(
            matches!(err, DashboardError::UnknownLayoutMode(ref value) if value == "drawer")
        );
    }

    #[test]
    fn test_layout_mode_display_round_trip() {
        for mode in [LayoutMode::Fixed, LayoutMode::Collapsible, LayoutMode::Responsive] {
            assert_eq!(mode.to_string().parse::<LayoutMode>().unwrap(), mode);
        }
        assert_eq!(LayoutMode::default(), LayoutMode::Responsive);
    }

    #[test]
    fn test_fixed_panel_width_never_changes() {
        let mut state = ShellState::new(LayoutMode::Fixed);
        let initial = view(&state, WIDE);

        for action in [
            ShellAction::ToggleCollapsed,
            ShellAction::OpenDrawer,
            ShellAction::ToggleCollapsed,
            ShellAction::CloseDrawer,
        ] {
            state = state.apply(action);
            assert_eq!(view(&state, WIDE), initial);
            assert_eq!(view(&state, NARROW), initial);
        }

        let nav = initial.static_nav.unwrap();
        assert_eq!(nav.width, NavWidth::Expanded);
        assert!(nav.show_labels);
        assert!(!nav.collapse_toggle);
    }

    #[test]
    fn test_collapse_toggle_switches_width_and_labels_together() {
        let state = ShellState::new(LayoutMode::Collapsible);
        let expanded = view(&state, WIDE).static_nav.unwrap();
        assert_eq!(expanded.width, NavWidth::Expanded);
        assert!(expanded.show_labels);
        assert!(expanded.collapse_toggle);

        let collapsed_state = state.apply(ShellAction::ToggleCollapsed);
        let collapsed = view(&collapsed_state, WIDE).static_nav.unwrap();
        assert_eq!(collapsed.width, NavWidth::Collapsed);
        assert!(!collapsed.show_labels);
        assert!(collapsed_state.is_collapsed());
    }

    #[test]
    fn test_collapse_toggle_twice_restores_state() {
        let state = ShellState::new(LayoutMode::Collapsible);
        let round_trip = state
            .apply(ShellAction::ToggleCollapsed)
            .apply(ShellAction::ToggleCollapsed);
        assert_eq!(round_trip, state);
        assert_eq!(view(&round_trip, WIDE), view(&state, WIDE));
    }

    #[test]
    fn test_collapsible_widths_are_the_only_two_values() {
        let mut state = ShellState::new(LayoutMode::Collapsible);
        for _ in 0..5 {
            let width = view(&state, WIDE).static_nav.unwrap().width;
            assert!(matches!(width.px(), 288 | 80));
            state.toggle_collapsed();
        }
    }

    #[test]
    fn test_collapsible_ignores_drawer_requests() {
        let state =
            ShellState::new(LayoutMode::Collapsible).apply(ShellAction::OpenDrawer);
        assert!(!state.is_drawer_open());
        assert_eq!(view(&state, NARROW).drawer, None);
    }

    #[test]
    fn test_responsive_narrow_hides_static_panel() {
        let state = ShellState::new(LayoutMode::Responsive);
        let narrow = view(&state, NARROW);
        assert_eq!(narrow.static_nav, None);
        assert_eq!(narrow.drawer, Some(DrawerView { open: false }));
        assert!(narrow.hamburger);
    }

    #[test]
    fn test_responsive_wide_shows_static_panel() {
        let state = ShellState::new(LayoutMode::Responsive).apply(ShellAction::OpenDrawer);
        let wide = view(&state, WIDE);
        assert_eq!(wide.static_nav.map(|nav| nav.width), Some(NavWidth::Expanded));
        assert_eq!(wide.drawer, None);
        assert!(!wide.hamburger);
    }

    #[test]
    fn test_breakpoint_is_exclusive() {
        let state = ShellState::new(LayoutMode::Responsive);
        assert!(view(&state, DEFAULT_NARROW_BREAKPOINT_PX - 1).hamburger);
        assert!(!view(&state, DEFAULT_NARROW_BREAKPOINT_PX).hamburger);
    }

    #[test]
    fn test_hamburger_always_opens_and_close_always_closes() {
        let closed = ShellState::new(LayoutMode::Responsive);

        let opened = closed.apply(ShellAction::OpenDrawer);
        assert!(opened.is_drawer_open());
        assert!(opened.apply(ShellAction::OpenDrawer).is_drawer_open());

        assert!(!opened.apply(ShellAction::CloseDrawer).is_drawer_open());
        assert!(!closed.apply(ShellAction::CloseDrawer).is_drawer_open());
        assert_eq!(view(&opened, NARROW).drawer, Some(DrawerView { open: true }));
    }

    #[test]
    fn test_drawer_state_survives_viewport_changes() {
        let state = ShellState::new(LayoutMode::Responsive).apply(ShellAction::OpenDrawer);
        assert_eq!(view(&state, WIDE).drawer, None);
        assert_eq!(view(&state, NARROW).drawer, Some(DrawerView { open: true }));
    }

    #[test]
    fn test_responsive_ignores_collapse_toggle() {
        let state = ShellState::new(LayoutMode::Responsive).apply(ShellAction::ToggleCollapsed);
        assert!(!state.is_collapsed());
    }
}
