//! Common utilities module
//!
//! This module contains shared utilities used across the ball pipeline.

pub mod error;

pub use error::{Result, TrackerError};
