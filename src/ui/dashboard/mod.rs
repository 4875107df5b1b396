//! Dashboard module
//!
//! Contains dashboard state and rendering, organized into components

pub mod components;
mod renderer;
mod state;

pub use renderer::{body_capacity, render_dashboard};
pub use state::DashboardState;
