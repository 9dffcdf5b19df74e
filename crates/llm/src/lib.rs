//! Chat-completion client for productivity coaching.
//!
//! One user message in, the first choice's text out. No retries: a failed
//! call is reported to the caller immediately.

mod ai_types;
mod analysis;
mod client;
pub mod error;

pub use client::LlmClient;
pub use error::LlmError;
