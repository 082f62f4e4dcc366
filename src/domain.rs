//! Domain logic
//!
//! This module contains domain-specific logic that is independent of the terminal:
//! - Video records and the wire format they are mapped from
//! - Fetch status and request generations
//! - List selection
//! - Text processing utilities

pub mod fetch;
pub mod scrollable_list;
pub mod text;
pub mod video;
