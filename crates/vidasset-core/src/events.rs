//! Change notification for asset descriptors
//!
//! The descriptor itself stays a plain value type; applications that need
//! to observe mutation wrap it in [`ObservedAsset`] and register
//! listeners. The wrapper owns the record, so nothing can mutate it
//! behind the listeners' backs.

use std::sync::Arc;

use serde_json::Value as JsonValue;

use crate::error::AssetError;
use crate::models::{AssetField, AssetPatch, VideoAsset};

/// A single observed field mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetChange {
    pub field: AssetField,
    pub previous: JsonValue,
    pub current: JsonValue,
}

/// Receiver for descriptor mutations.
///
/// Listeners are shared via `Arc` and must be safe to call from whatever
/// thread holds the observed record.
pub trait ChangeListener: Send + Sync {
    fn on_change(&self, change: &AssetChange);
}

/// No-op implementation for callers that only want the record.
pub struct NoOpChangeListener;

impl ChangeListener for NoOpChangeListener {
    fn on_change(&self, _change: &AssetChange) {}
}

/// A descriptor plus its registered listeners.
///
/// Listeners fire once per field whose stored value actually changed,
/// after the write, in subscription order. Writes that leave a field
/// unchanged fire nothing.
pub struct ObservedAsset {
    asset: VideoAsset,
    listeners: Vec<Arc<dyn ChangeListener>>,
}

impl ObservedAsset {
    pub fn new(asset: VideoAsset) -> Self {
        ObservedAsset {
            asset,
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: Arc<dyn ChangeListener>) {
        self.listeners.push(listener);
    }

    /// Read access to the underlying record.
    pub fn asset(&self) -> &VideoAsset {
        &self.asset
    }

    pub fn into_inner(self) -> VideoAsset {
        self.asset
    }

    /// Apply a partial update, notifying listeners of each changed field.
    pub fn apply(&mut self, patch: AssetPatch) -> Vec<AssetChange> {
        let before = self.asset.clone();
        let changed = self.asset.apply(patch);
        let changes: Vec<AssetChange> = changed
            .into_iter()
            .map(|field| AssetChange {
                field,
                previous: before.attr(field),
                current: self.asset.attr(field),
            })
            .collect();
        self.notify(&changes);
        changes
    }

    /// Type-checked dynamic write with notification.
    pub fn set_attr(&mut self, field: AssetField, value: JsonValue) -> Result<bool, AssetError> {
        let previous = self.asset.attr(field);
        let changed = self.asset.set_attr(field, value)?;
        if changed {
            let change = AssetChange {
                field,
                previous,
                current: self.asset.attr(field),
            };
            self.notify(std::slice::from_ref(&change));
        }
        Ok(changed)
    }

    fn notify(&self, changes: &[AssetChange]) {
        for change in changes {
            for listener in &self.listeners {
                listener.on_change(change);
            }
        }
    }
}

impl From<VideoAsset> for ObservedAsset {
    fn from(asset: VideoAsset) -> Self {
        ObservedAsset::new(asset)
    }
}
