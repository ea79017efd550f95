//! Lesson widgets and the page chrome around them.

pub mod architecture;
pub mod characteristics;
pub mod common;
pub mod comparison;
pub mod design;
pub mod event_grid;
pub mod event_hub;
pub mod icon;
pub mod intro;
pub mod layout;
pub mod routing;

