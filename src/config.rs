/// Application configuration
///
/// Everything here is compiled in: the app takes no flags and reads no files.
/// Tests build their own `Config` pointing at a temp directory.

use std::path::PathBuf;
use std::time::Duration;

/// Directory holding the loading animation and the seven view assets
const DEFAULT_ASSET_DIR: &str = "Assets";

/// File name of the looping animation shown while loading
const DEFAULT_LOADING_ANIMATION: &str = "Loading Animation.gif";

/// Sleep between progress increments (101 increments ≈ 5 s total)
const DEFAULT_PROGRESS_TICK: Duration = Duration::from_millis(50);

/// How often visible animations are advanced
const DEFAULT_ANIMATION_TICK: Duration = Duration::from_millis(20);

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Root of all asset paths
    pub asset_dir: PathBuf,
    /// Loading animation file name, relative to `asset_dir`
    pub loading_animation: String,
    /// Delay after each progress update
    pub progress_tick: Duration,
    /// Frame-advance interval for GIF playback
    pub animation_tick: Duration,
    /// Initial window size (width, height)
    pub window_size: (f32, f32),
    /// Window title
    pub title: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            loading_animation: DEFAULT_LOADING_ANIMATION.to_string(),
            progress_tick: DEFAULT_PROGRESS_TICK,
            animation_tick: DEFAULT_ANIMATION_TICK,
            window_size: (1024.0, 768.0),
            title: "UX to UI Slider",
        }
    }
}

impl Config {
    /// Config rooted at `asset_dir`, everything else default
    #[cfg(test)]
    pub fn with_asset_dir(asset_dir: impl AsRef<std::path::Path>) -> Self {
        Self {
            asset_dir: asset_dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Builder-style override of the progress tick
    #[cfg(test)]
    pub fn progress_tick(mut self, tick: Duration) -> Self {
        self.progress_tick = tick;
        self
    }

    /// Full path of the loading animation
    pub fn loading_animation_path(&self) -> PathBuf {
        self.asset_dir.join(&self.loading_animation)
    }

    /// Expected wall-clock length of the progress phase
    pub fn loading_duration(&self) -> Duration {
        self.progress_tick * crate::loading::PROGRESS_STEPS
    }
}
