//! Business logic services for the Forage Balance Simulation Server

pub mod simulation;
pub mod weather;

pub use simulation::SimulationService;
pub use weather::WeatherService;
