use crate::app::Message;
use crate::form::Field;
use crate::login::LoginForm;
use crate::route::Route;
use crate::ui::styles;
use crate::ui::widgets::{card, labeled_input};
use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

pub fn view(form: &LoginForm) -> Element<'_, Message> {
    let fields = column![
        labeled_input(
            "Email *",
            "you@example.com",
            &form.email,
            Field::Email,
            &form.errors,
            Message::SubmitLogin,
        ),
        labeled_input(
            "Password *",
            "••••••••",
            &form.password,
            Field::Password,
            &form.errors,
            Message::SubmitLogin,
        ),
        button(text("Sign In").size(18).width(Length::Fill).align_x(Alignment::Center))
            .on_press(Message::SubmitLogin)
            .padding(14)
            .width(Length::Fill)
            .style(styles::primary_button_style()),
        button(text("← Back to Home"))
            .on_press(Message::Navigate(Route::Landing))
            .style(styles::link_button_style()),
    ]
    .spacing(18)
    .align_x(Alignment::Center);

    let content = column![
        text("Welcome Back").size(34),
        text("Sign in to your SafeLink account").size(16),
        card(fields).padding(28),
    ]
    .spacing(12)
    .max_width(440.0)
    .align_x(Alignment::Center);

    container(content)
        .padding(32)
        .width(Length::Fill)
        .height(Length::Fill)
        .center(Length::Fill)
        .into()
}
