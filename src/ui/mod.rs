/// View layer
///
/// `Screen` is the declarative description of what is visible; the two
/// submodules turn it into iced widgets. Exactly one screen is built per
/// frame, so the Loading → Ready switch never shows both (or neither).

pub mod loading;
pub mod viewer;

use iced::widget::{container, image::Handle};
use iced::{Background, Color, Element, Theme};

use crate::Message;

/// What the window shows
#[derive(Debug, Clone, Copy)]
pub enum Screen<'a> {
    Loading {
        progress: f32,
        animation: Option<&'a Handle>,
    },
    Viewer {
        image: Option<&'a Handle>,
        slider: u8,
    },
}

impl Screen<'_> {
    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        matches!(self, Screen::Loading { .. })
    }
}

/// Build the widget tree for `screen`
pub fn view(screen: Screen<'_>) -> Element<'_, Message> {
    match screen {
        Screen::Loading {
            progress,
            animation,
        } => loading::view(progress, animation),
        Screen::Viewer { image, slider } => viewer::view(image, slider),
    }
}

/// Plain white page background
pub fn page_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::WHITE)),
        ..container::Style::default()
    }
}
