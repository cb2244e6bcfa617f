use crate::app::Message;
use crate::ui::styles;
use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

pub fn view<'a>() -> Element<'a, Message> {
    let logo = container(text("🛡").size(56))
        .style(styles::badge_style(iced::Color { a: 0.2, ..iced::Color::WHITE }))
        .center(120);

    container(
        column![
            logo,
            text("SafeLink").size(48),
            text("Your Personal Safety Companion").size(20),
        ]
        .spacing(20)
        .align_x(Alignment::Center),
    )
    .style(styles::splash_style)
    .width(Length::Fill)
    .height(Length::Fill)
    .center(Length::Fill)
    .into()
}
