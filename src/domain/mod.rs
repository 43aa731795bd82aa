//! # Domain Layer
//!
//! Core models, the bounded history log, and the error taxonomy.
//! This layer is independent of HTTP and runtime concerns.

mod error;
pub mod models;

pub use error::*;
pub use models::*;
