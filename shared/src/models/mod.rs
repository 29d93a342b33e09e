//! Domain models for the Forage Balance Platform

pub(crate) mod de;
mod herd;
mod record;
mod result;
mod soil;
mod weather;

pub use herd::*;
pub use record::*;
pub use result::*;
pub use soil::*;
pub use weather::*;
