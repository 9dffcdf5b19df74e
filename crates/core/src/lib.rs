//! Core types for productivity-coach
//!
//! Usage records, the coaching prompt, domain categorisation and the local
//! heuristic score. Shared by the LLM, HTTP and CLI crates.

mod config;
mod constants;
mod env_config;
mod error;
mod usage;

pub use config::*;
pub use constants::*;
pub use env_config::*;
pub use error::*;
pub use usage::*;
