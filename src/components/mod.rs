//! Reusable TUI components
//!
//! - `keybindings` - focus-aware key registry
//! - `help_overlay` - `?` popup
//! - `nav_bar` - key hint bar at the bottom of the screen

pub mod help_overlay;
pub mod keybindings;
pub mod nav_bar;
