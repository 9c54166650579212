use iced::widget::{container, image, progress_bar, Column, Space};
use iced::widget::image::Handle;
use iced::{Alignment, ContentFit, Element, Length};

use crate::Message;

/// Animation above an 800×20 progress bar, centered in the window
pub fn view(progress: f32, animation: Option<&Handle>) -> Element<'_, Message> {
    let mut content = Column::new().align_x(Alignment::Center);

    if let Some(handle) = animation {
        content = content
            .push(
                image(handle.clone())
                    .content_fit(ContentFit::Contain)
                    .width(Length::Fixed(400.0))
                    .height(Length::Fixed(400.0)),
            )
            .push(Space::with_height(Length::Fixed(40.0)));
    }

    content = content.push(
        progress_bar(0.0..=1.0, progress)
            .width(Length::Fixed(800.0))
            .height(Length::Fixed(20.0)),
    );

    container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(super::page_style)
        .into()
}
