//! # Nxtwatch - Nxt Watch TUI Client
//!
//! A terminal client for the Nxt Watch video service, built with Rust and Ratatui.
//! This library implements an Elm-like architecture for predictable state management.
//!
//! ## Architecture Overview
//!
//! - **Model** (`state`): Application state, owned by the runtime
//! - **Message** (`msg`): Events that can change the state
//! - **Update** (`update`): Pure functions that transform state
//! - **Command** (`cmd`): Side effects (HTTP requests, terminal control, logging)
//! - **View** (`presentation`): UI rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use nxtwatch::{core::msg::home::HomeMsg, update, AppState, Cmd, Msg};
//!
//! let state = AppState::default();
//!
//! // Mounting the home screen starts the first fetch
//! let (state, commands) = update(Msg::Home(HomeMsg::FetchVideos), state);
//!
//! assert!(state.home.is_loading());
//! assert!(matches!(commands[0], Cmd::FetchVideos { .. }));
//! ```
//!
//! ## Modules
//!
//! - [`core`] - State, messages, update and commands
//! - [`domain`] - Videos, fetch status and text helpers
//! - [`infrastructure`] - HTTP client, token store, terminal and configuration
//! - [`integration`] - Runtime and main loop
//! - [`presentation`] - Views and widgets

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, update::update};
pub use crate::integration::elm_integration::{ElmRuntime, ElmRuntimeStats};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
