//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Text generation (Gemini `generateContent`, plus an offline mock)
//! - History storage (in-memory, mutex-guarded)
//! - The HTTP API and the dependency container

pub mod adapter;
pub mod api;

pub use adapter::*;
