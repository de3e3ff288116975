//! Infrastructure services behind the console pages:
//!
//! - **directory**: in-memory role directory acting as the concrete loader
//!   for the roles overview
//! - **errors**: service error types and result alias

pub mod directory;
pub mod errors;
