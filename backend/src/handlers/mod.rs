//! HTTP handlers for the Forage Balance Simulation Server

pub mod health;
pub mod simulation;
pub mod weather;

pub use health::health_check;
pub use simulation::{simulate, simulate_records};
pub use weather::get_weather;
