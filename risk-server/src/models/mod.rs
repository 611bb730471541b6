//! Request/response DTOs

pub mod assessment;
pub mod prediction;

pub use assessment::*;
pub use prediction::*;
