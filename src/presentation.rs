//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - The home view composed from stateless widgets
//! - Reusable widgets
//! - Configuration (keybindings) and the color palette

pub mod components;
pub mod config;
pub mod theme;
pub mod widgets;
