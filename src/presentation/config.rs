//! UI configuration
//!
//! This module contains configuration for UI behavior.

pub mod keybindings;

pub use keybindings::{Action, KeyBindings};
