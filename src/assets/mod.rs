/// Asset decoding and the preload cache
///
/// - `loader.rs` reads and decodes asset files
/// - `animation.rs` holds decoded GIF frames and steps through them

pub mod animation;
pub mod loader;

use iced::widget::image::Handle;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

pub use animation::Animation;

/// A materialized, display-ready asset
#[derive(Debug, Clone)]
pub enum AssetHandle {
    Static(Handle),
    Animated(Animation),
}

impl AssetHandle {
    /// Handle to draw right now
    pub fn handle(&self) -> &Handle {
        match self {
            AssetHandle::Static(handle) => handle,
            AssetHandle::Animated(animation) => animation.handle(),
        }
    }

    /// Whether a timer should be driving this asset
    pub fn is_animated(&self) -> bool {
        matches!(self, AssetHandle::Animated(animation) if animation.is_animated())
    }

    pub fn advance(&mut self, dt: Duration) {
        if let AssetHandle::Animated(animation) = self {
            animation.advance(dt);
        }
    }
}

/// A cache entry: where it came from and what to draw
#[derive(Debug, Clone)]
pub struct CachedAsset {
    pub path: PathBuf,
    pub handle: AssetHandle,
}

/// Asset index → materialized handle
///
/// Filled once while loading; absent keys are assets that failed to load.
#[derive(Debug, Clone, Default)]
pub struct PreloadCache {
    entries: BTreeMap<usize, CachedAsset>,
}

impl PreloadCache {
    pub fn insert(&mut self, index: usize, asset: CachedAsset) {
        self.entries.insert(index, asset);
    }

    pub fn get(&self, index: usize) -> Option<&CachedAsset> {
        self.entries.get(&index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
