use iced::time::Instant;
use iced::{Element, Subscription, Task, Theme};
use std::time::Duration;

mod assets;
mod config;
mod error;
mod loading;
mod state;
mod ui;

#[cfg(test)]
mod test_utils;

use assets::Animation;
use config::Config;
use loading::{LoadingController, LoadingEvent};
use state::loading::{LoadingState, Phase};
use state::viewer::ViewerController;
use ui::Screen;

/// Longest stretch a single tick may advance animations by
const MAX_TICK_DELTA: Duration = Duration::from_secs(1);

/// Main application state
struct App {
    config: Config,
    /// Progress bar + phase
    loading: LoadingState,
    /// Looping animation on the loading screen (None until decoded, or if missing)
    loading_animation: Option<Animation>,
    /// Exists only once the phase is Ready
    viewer: Option<ViewerController>,
    /// Time of the previous animation tick (None right after the animation changed)
    last_tick: Option<Instant>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Progress or completion from the background loading task
    Loading(LoadingEvent),
    /// Loading-screen animation finished decoding
    LoadingAnimationDecoded(Option<Animation>),
    /// User moved the UX/UI slider
    SliderChanged(u8),
    /// Animation timer fired; advance by the real time since the last tick
    Tick(Instant),
}

impl App {
    /// Create the app and start the background loading task
    fn new(config: Config) -> (Self, Task<Message>) {
        log::debug!("Loading screen runs for {:?}", config.loading_duration());

        let loading = Task::run(
            LoadingController::new(&config).into_stream(),
            Message::Loading,
        );
        let animation = Task::perform(
            assets::loader::load_loading_animation(config.loading_animation_path()),
            Message::LoadingAnimationDecoded,
        );

        (
            App {
                config,
                loading: LoadingState::new(),
                loading_animation: None,
                viewer: None,
                last_tick: None,
            },
            Task::batch([animation, loading]),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Loading(LoadingEvent::Progress(progress)) => {
                self.loading.record_progress(progress);
            }
            Message::Loading(LoadingEvent::Ready(cache)) => match self.loading.finish() {
                Ok(()) => {
                    log::info!("🎨 Ready: {} assets available", cache.len());
                    // The loading screen is gone for good
                    self.loading_animation = None;
                    self.viewer = Some(ViewerController::new(cache));
                    self.last_tick = None;
                }
                Err(err) => log::error!("Ignoring loading completion: {}", err),
            },
            Message::LoadingAnimationDecoded(animation) => {
                if self.loading.phase() == Phase::Loading {
                    self.loading_animation = animation;
                }
            }
            Message::SliderChanged(value) => {
                // Slider only exists on the viewer screen
                if let Some(viewer) = self.viewer.as_mut() {
                    if viewer.on_slider_change(value) {
                        self.last_tick = None;
                    }
                }
            }
            Message::Tick(now) => {
                let dt = self.tick_delta(now);
                match self.viewer.as_mut() {
                    Some(viewer) => viewer.advance(dt),
                    None => {
                        if let Some(animation) = self.loading_animation.as_mut() {
                            animation.advance(dt);
                        }
                    }
                }
            }
        }

        Task::none()
    }

    /// Time to advance animations by for a tick at `now`
    ///
    /// The first tick after a change uses the nominal interval. Later ticks use
    /// the real elapsed time, so a stalled event loop doesn't slow playback.
    fn tick_delta(&mut self, now: Instant) -> Duration {
        let dt = match self.last_tick {
            Some(last) => now.saturating_duration_since(last),
            None => self.config.animation_tick,
        };
        self.last_tick = Some(now);
        dt.min(MAX_TICK_DELTA)
    }

    /// What is currently visible
    fn screen(&self) -> Screen<'_> {
        match (self.loading.phase(), self.viewer.as_ref()) {
            (Phase::Ready, Some(viewer)) => Screen::Viewer {
                image: viewer.displayed_handle(),
                slider: viewer.slider_value(),
            },
            _ => Screen::Loading {
                progress: self.loading.progress(),
                animation: self.loading_animation.as_ref().map(Animation::handle),
            },
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        ui::view(self.screen())
    }

    /// Animation timer, only while something on screen is animated
    fn subscription(&self) -> Subscription<Message> {
        let animating = match &self.viewer {
            Some(viewer) => viewer.is_animating(),
            None => self
                .loading_animation
                .as_ref()
                .is_some_and(Animation::is_animated),
        };

        if animating {
            iced::time::every(self.config.animation_tick).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::default();
    let title = config.title;
    let window_size = config.window_size;

    iced::application(title, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .window_size(window_size)
        .resizable(true)
        .centered()
        .run_with(move || App::new(config))
}
