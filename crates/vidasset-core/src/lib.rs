//! Vidasset Core Library
//!
//! This crate provides the video asset descriptor model, dynamic attribute
//! access, change notification, and the error types shared across all
//! vidasset components.

pub mod error;
pub mod events;
pub mod models;

// Re-export commonly used types
pub use error::AssetError;
pub use events::{AssetChange, ChangeListener, NoOpChangeListener, ObservedAsset};
pub use models::{AssetField, AssetPatch, VideoAsset};
