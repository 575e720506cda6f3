//! iced widgets for the Cuepoint player

pub mod components;

pub use components::*;
