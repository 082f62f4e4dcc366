//! Components
//!
//! Components are stateless renderers that receive state as parameters.

pub mod home;

pub use home::HomeView;
