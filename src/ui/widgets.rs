use crate::app::Message;
use crate::form::{Field, FieldErrors};
use crate::route::Route;
use crate::theme::ThemeMode;
use crate::toast::{ToastQueue, ToastVariant};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, column, container, horizontal_space, row, text, text_input};
use iced::{Alignment, Element, Length};

/// Top bar with the brand mark and the theme toggle
pub fn navbar<'a>(mode: ThemeMode) -> Element<'a, Message> {
    let brand = row![
        container(text("S").size(20))
            .style(styles::badge_style(styles::BRAND))
            .center(40),
        text("SafeLink").size(22),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let toggle = button(text(mode.toggle_label()))
        .on_press(Message::ToggleTheme)
        .padding(10)
        .style(styles::outline_button_style());

    container(row![brand, horizontal_space(), toggle].align_y(Alignment::Center))
        .padding([12, 24])
        .width(Length::Fill)
        .into()
}

/// Brand-colored band holding a screen's title
pub fn wave_header<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .style(styles::wave_header_style)
        .padding([28, 32])
        .width(Length::Fill)
        .into()
}

/// Header used by the inner screens: back link, icon badge, title and subtitle
pub fn screen_header<'a>(
    back: (&'a str, Route),
    icon: &'a str,
    title: &'a str,
    subtitle: &'a str,
) -> Element<'a, Message> {
    let (back_label, back_route) = back;
    let back_link = button(text(format!("← {}", back_label)))
        .on_press(Message::Navigate(back_route))
        .padding(0)
        .style(|_theme: &iced::Theme, status| button::Style {
            text_color: match status {
                button::Status::Hovered | button::Status::Pressed => iced::Color { a: 0.8, ..iced::Color::WHITE },
                _ => iced::Color::WHITE,
            },
            ..Default::default()
        });

    let heading = row![
        container(text(icon).size(28))
            .style(styles::badge_style(iced::Color { a: 0.2, ..iced::Color::WHITE }))
            .center(56),
        column![text(title).size(30), text(subtitle).size(16)].spacing(4),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    wave_header(column![back_link, heading].spacing(20))
}

/// Dismissable inline warning
pub fn notification_banner<'a>(message: &'a str, on_dismiss: Message) -> Element<'a, Message> {
    let dismiss = button(text("✕"))
        .on_press(on_dismiss)
        .padding([2, 8])
        .style(styles::link_button_style());

    container(
        row![text("⚠").size(18), text(message), horizontal_space(), dismiss]
            .spacing(12)
            .align_y(Alignment::Center),
    )
    .style(styles::warning_banner_style)
    .padding(12)
    .width(Length::Fill)
    .into()
}

/// Visible toasts, anchored to the bottom-right corner
pub fn toast_layer<'a>(toasts: &'a ToastQueue) -> Element<'a, Message> {
    let cards = toasts.iter().map(|toast| {
        let destructive = toast.variant == ToastVariant::Destructive;
        let close = button(text("✕"))
            .on_press(Message::DismissToast(toast.id))
            .padding([2, 8])
            .style(move |theme: &iced::Theme, status| {
                let mut style = styles::link_button_style()(theme, status);
                if destructive {
                    style.text_color = iced::Color::WHITE;
                }
                style
            });

        container(
            row![
                column![text(&toast.title).size(16), text(&toast.description).size(14)]
                    .spacing(4)
                    .width(Length::Fill),
                close,
            ]
            .spacing(12),
        )
        .style(styles::toast_style(destructive))
        .padding(16)
        .width(360)
        .into()
    });

    container(column(cards).spacing(8))
        .padding(24)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .into()
}

/// Labeled text input with its "is required" message underneath
pub fn labeled_input<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    field: Field,
    errors: &FieldErrors,
    on_submit: Message,
) -> Element<'a, Message> {
    let input = text_input(placeholder, value)
        .on_input(move |value| Message::FieldChanged(field, value))
        .on_submit(on_submit)
        .secure(field == Field::Password)
        .padding(12);

    let mut content = column![text(label).size(14), input].spacing(6);
    if errors.has(field) {
        content = content.push(text(field.required_message()).size(13).color(styles::DANGER));
    }
    content.into()
}

/// Rounded card around any content
pub fn card<'a>(content: impl Into<Element<'a, Message>>) -> container::Container<'a, Message> {
    container(content)
        .style(styles::card_style)
        .padding(20)
        .width(Length::Fill)
}
