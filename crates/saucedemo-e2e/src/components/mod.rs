//! UI fragments shared by several screens.

pub mod menu;

pub use menu::Menu;
