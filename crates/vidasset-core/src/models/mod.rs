//! Data models for the descriptor library
//!
//! Each sub-module represents one feature area.

mod asset;

// Re-export all models for convenient imports
pub use asset::*;
