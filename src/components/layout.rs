pub mod drawer;
pub mod layout;
pub mod navbar;
pub mod sidebar;
