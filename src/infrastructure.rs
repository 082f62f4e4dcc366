//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing and configuration
//! - Video API client and the background fetch service
//! - Session token storage

pub mod cli;
pub mod config;
pub mod token_store;
pub mod tui;
pub mod video_api;
pub mod video_service;
