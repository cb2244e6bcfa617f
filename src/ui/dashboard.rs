use crate::app::Message;
use crate::route::Route;
use crate::ui::styles;
use crate::ui::widgets::wave_header;
use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};

fn feature_card<'a>(icon: &'a str, title: &'a str, description: &'a str, route: Route) -> Element<'a, Message> {
    let content = row![
        container(text(icon).size(26))
            .style(styles::badge_style(styles::BRAND))
            .center(56),
        column![text(title).size(20), text(description).size(15)].spacing(6),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    button(content)
        .on_press(Message::Navigate(route))
        .padding(24)
        .width(Length::Fill)
        .style(styles::feature_card_style())
        .into()
}

pub fn view<'a>() -> Element<'a, Message> {
    let header = wave_header(
        column![
            text("Hello, User 👋").size(36),
            text("Welcome back to your personal safety hub").size(18),
        ]
        .spacing(8),
    );

    let actions = column![
        text("Quick Actions").size(26),
        feature_card(
            "⌁",
            "Connect Device",
            "Pair your safety device via Bluetooth",
            Route::ConnectDevice,
        ),
        feature_card(
            "☎",
            "Emergency Contacts",
            "Manage your emergency contact list",
            Route::EmergencyContacts,
        ),
        feature_card(
            "⏱",
            "History",
            "View location and alert activity logs",
            Route::History,
        ),
    ]
    .spacing(16)
    .padding(32);

    scrollable(column![header, actions]).height(Length::Fill).into()
}
