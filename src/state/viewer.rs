/// Ready-phase viewer state
///
/// Maps the slider position to an asset from the preload cache. Selections
/// are always served from the cache: an index that failed to preload leaves
/// whatever was on screen in place.

use std::path::Path;
use std::time::Duration;

use crate::assets::{CachedAsset, PreloadCache};
use crate::state::data::ASSET_COUNT;

/// The asset currently on screen
#[derive(Debug, Clone)]
struct Displayed {
    index: usize,
    asset: CachedAsset,
}

pub struct ViewerController {
    cache: PreloadCache,
    /// Last slider value
    selected_index: usize,
    /// What is actually drawn; lags `selected_index` when that asset is missing
    displayed: Option<Displayed>,
}

impl ViewerController {
    /// Take ownership of the populated cache and show asset 0 if it loaded
    pub fn new(cache: PreloadCache) -> Self {
        let mut viewer = Self {
            cache,
            selected_index: 0,
            displayed: None,
        };
        viewer.display(0);
        viewer
    }

    /// Slider moved to `value`
    ///
    /// Returns whether the displayed asset changed.
    pub fn on_slider_change(&mut self, value: u8) -> bool {
        let index = usize::from(value);
        if index >= ASSET_COUNT {
            log::debug!("Ignoring out-of-range slider value {}", value);
            return false;
        }

        self.selected_index = index;
        let changed = self.display(index);
        if changed {
            if let Some(source) = self.displayed_source() {
                log::debug!("Slider at {}: showing {}", index, source.display());
            }
        }
        changed
    }

    fn display(&mut self, index: usize) -> bool {
        if self.displayed.as_ref().is_some_and(|d| d.index == index) {
            return false;
        }

        let Some(asset) = self.cache.get(index) else {
            return false;
        };

        // Fresh clone, so animations start from their first frame
        self.displayed = Some(Displayed {
            index,
            asset: asset.clone(),
        });
        true
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Slider value as the widget expects it
    pub fn slider_value(&self) -> u8 {
        self.selected_index() as u8
    }

    /// Index of the asset on screen
    #[cfg(test)]
    pub fn displayed_index(&self) -> Option<usize> {
        self.displayed.as_ref().map(|d| d.index)
    }

    /// Path of the asset on screen
    pub fn displayed_source(&self) -> Option<&Path> {
        self.displayed.as_ref().map(|d| d.asset.path.as_path())
    }

    /// Image to draw, if any asset is on screen
    pub fn displayed_handle(&self) -> Option<&iced::widget::image::Handle> {
        self.displayed.as_ref().map(|d| d.asset.handle.handle())
    }

    /// Whether the animation timer is needed
    pub fn is_animating(&self) -> bool {
        self.displayed
            .as_ref()
            .is_some_and(|d| d.asset.handle.is_animated())
    }

    pub fn advance(&mut self, dt: Duration) {
        if let Some(displayed) = self.displayed.as_mut() {
            displayed.asset.handle.advance(dt);
        }
    }

    #[cfg(test)]
    pub fn cache(&self) -> &PreloadCache {
        &self.cache
    }

    /// Frame of the displayed animation (0 for stills)
    #[cfg(test)]
    pub fn displayed_frame(&self) -> Option<usize> {
        self.displayed.as_ref().map(|d| match &d.asset.handle {
            crate::assets::AssetHandle::Animated(animation) => animation.current_frame(),
            crate::assets::AssetHandle::Static(_) => 0,
        })
    }
}
