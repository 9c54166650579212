/// Background loading sequence
///
/// Runs once on the executor: 101 progress steps with a fixed sleep between
/// them, then a blocking materialization of every asset, then `Ready`.
/// It never touches view state; everything goes out as `LoadingEvent`s and
/// the application applies them on the UI side.

use iced::futures::channel::mpsc;
use iced::futures::{SinkExt, Stream};
use std::time::Duration;

use crate::assets::loader::materialize_assets;
use crate::assets::PreloadCache;
use crate::config::Config;
use crate::state::data::{catalog, AssetEntry};

/// Number of progress updates (0%, 1%, …, 100%)
pub const PROGRESS_STEPS: u32 = 101;

/// Events sent from the loading task to the UI
#[derive(Debug, Clone)]
pub enum LoadingEvent {
    /// Progress bar value in [0, 1]
    Progress(f32),
    /// Materialization finished; the cache is final
    Ready(PreloadCache),
}

pub struct LoadingController {
    entries: Vec<AssetEntry>,
    tick: Duration,
}

impl LoadingController {
    pub fn new(config: &Config) -> Self {
        Self {
            entries: catalog(&config.asset_dir),
            tick: config.progress_tick,
        }
    }

    /// Drive the whole sequence, sending events to `output`
    ///
    /// Stops early only if the receiver is gone.
    pub async fn run(self, mut output: mpsc::Sender<LoadingEvent>) {
        log::info!(
            "⏳ Loading {} assets ({} progress steps)",
            self.entries.len(),
            PROGRESS_STEPS
        );

        for step in 0..PROGRESS_STEPS {
            let progress = step as f32 / (PROGRESS_STEPS - 1) as f32;
            if output.send(LoadingEvent::Progress(progress)).await.is_err() {
                log::debug!("Loading receiver dropped at {:.0}%", progress * 100.0);
                return;
            }
            tokio::time::sleep(self.tick).await;
        }

        let entries = self.entries;
        let cache = match tokio::task::spawn_blocking(move || materialize_assets(&entries)).await {
            Ok(cache) => cache,
            Err(err) => {
                log::error!("Asset materialization task failed: {}", err);
                PreloadCache::default()
            }
        };

        let _ = output.send(LoadingEvent::Ready(cache)).await;
    }

    /// The sequence as a stream, for `Task::run`
    pub fn into_stream(self) -> impl Stream<Item = LoadingEvent> {
        iced::stream::channel(1, move |output| self.run(output))
    }
}
