use crate::app::Message;
use crate::route::Route;
use crate::ui::styles;
use crate::ui::widgets::card;
use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Alignment, Element, Length};

const STEPS: [(&str, &str, &str); 3] = [
    ("📱", "Connect Device", "Pair your safety device seamlessly via Bluetooth"),
    ("♥", "Add Contacts", "Set up trusted emergency contacts who can help"),
    ("🛡", "Stay Protected", "Send instant alerts and share location when needed"),
];

pub fn scroll_id() -> scrollable::Id {
    scrollable::Id::new("landing")
}

pub fn view<'a>() -> Element<'a, Message> {
    let hero = container(
        column![
            text("SAFElink").size(64),
            text("A Stylish Way to Stay Safe").size(28),
            text("Connect, Alert, and Protect").size(18),
            row![
                button(text("Get Started").size(18))
                    .on_press(Message::Navigate(Route::Login))
                    .padding([14, 32])
                    .style(styles::primary_button_style()),
                button(text("Learn More").size(18))
                    .on_press(Message::LearnMore)
                    .padding([14, 32])
                    .style(styles::outline_button_style()),
            ]
            .spacing(16),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .style(styles::wave_header_style)
    .padding([80, 32])
    .width(Length::Fill)
    .center_x(Length::Fill);

    let steps = row(STEPS.iter().map(|(icon, title, description)| {
        card(
            column![
                container(text(*icon).size(28))
                    .style(styles::badge_style(styles::BRAND))
                    .center(64),
                text(*title).size(20),
                text(*description).size(15),
            ]
            .spacing(12)
            .align_x(Alignment::Center),
        )
        .padding(28)
        .into()
    }))
    .spacing(24);

    let how_it_works = column![
        text("How It Works").size(36),
        text("Stay connected and protected with three simple steps").size(18),
        Space::with_height(16),
        steps,
        Space::with_height(16),
        button(text("Get Started Now").size(18))
            .on_press(Message::Navigate(Route::Login))
            .padding([14, 40])
            .style(styles::primary_button_style()),
    ]
    .spacing(12)
    .padding([64, 32])
    .align_x(Alignment::Center);

    let footer = container(text("SAFElink - Your Safety, Our Priority").size(14))
        .padding(24)
        .center_x(Length::Fill);

    scrollable(column![hero, how_it_works, footer].width(Length::Fill))
        .id(scroll_id())
        .height(Length::Fill)
        .into()
}
