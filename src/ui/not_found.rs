use crate::app::Message;
use crate::route::Route;
use crate::ui::styles;
use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

pub fn view(path: &str) -> Element<'_, Message> {
    container(
        column![
            text("404").size(72),
            text("Oops! Page not found").size(24),
            text(path).size(14).color(styles::MUTED),
            button(text("Return to Home"))
                .on_press(Message::Navigate(Route::Landing))
                .padding([12, 28])
                .style(styles::primary_button_style()),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center(Length::Fill)
    .into()
}
