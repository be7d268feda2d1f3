// Storage layer
//
// A single repository struct owns the connection pool and is passed down
// from main inside an Arc — no process-wide database handle.

pub mod models;
pub mod password;
mod repositories;

pub use repositories::{is_unique_violation, Database};
