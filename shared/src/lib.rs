//! Shared types and simulation engine for the Forage Balance Platform
//!
//! This crate contains the domain models and the deterministic simulation
//! pipeline shared between the backend and the browser (via WASM). The
//! engine is pure and synchronous: it never performs I/O, never mutates its
//! inputs, and allocates fresh result structures on every call.

pub mod models;
pub mod simulation;
pub mod validation;

pub use models::*;
pub use simulation::*;
pub use validation::*;
