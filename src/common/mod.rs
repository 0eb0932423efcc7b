//! Common types and utilities shared across recordindex.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - The validated minimum degree

pub mod config;
pub mod error;
mod min_degree;

pub use error::{Error, Result};
pub use min_degree::MinDegree;
