//! Utility functions for URL processing.
//!
//! - [`destination`] - Destination list cleaning and validation

pub mod destination;
