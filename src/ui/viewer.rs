use iced::widget::image::Handle;
use iced::widget::{column, container, image, row, slider, text, Space};
use iced::{font, Alignment, ContentFit, Element, Font, Length, Padding};

use crate::state::data::ASSET_COUNT;
use crate::Message;

const LABEL_FONT: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Image on top, "UX" [slider] "UI" underneath
pub fn view(picture: Option<&Handle>, value: u8) -> Element<'_, Message> {
    let picture: Element<'_, Message> = match picture {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        // Nothing loaded for this slot yet
        None => Space::new(Length::Fill, Length::Fill).into(),
    };

    let picture = container(picture)
        .max_width(800.0)
        .max_height(500.0)
        .padding(Padding {
            bottom: 20.0,
            ..Padding::ZERO
        })
        .center_x(Length::Fill)
        .height(Length::Fill);

    let controls = container(slider_row(value))
        .max_width(800.0)
        .padding([20, 20])
        .center_x(Length::Fill);

    container(column![picture, controls].align_x(Alignment::Center))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(super::page_style)
        .into()
}

fn slider_row(value: u8) -> Element<'static, Message> {
    let max = (ASSET_COUNT - 1) as u8;

    row![
        label("UX"),
        container(slider(0..=max, value, Message::SliderChanged).step(1u8))
            .width(Length::Fill)
            .padding([0, 10]),
        container(text(readout(value)).size(14)).center_x(Length::Fixed(24.0)),
        label("UI"),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Current slider position, shown next to the slider
fn readout(value: u8) -> String {
    value.to_string()
}

fn label(content: &'static str) -> Element<'static, Message> {
    container(text(content).size(16).font(LABEL_FONT))
        .center_x(Length::Fixed(60.0))
        .into()
}
