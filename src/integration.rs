//! Integration layer
//!
//! Connects the pure Elm core to the outside world:
//! - `ElmRuntime` owns the state and the message/command queues
//! - `AppRunner` drives the terminal, the services and the render loop

pub mod app_runner;
pub mod elm_integration;
