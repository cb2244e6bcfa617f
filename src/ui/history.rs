use crate::app::Message;
use crate::history::{AlertRecord, DeliveryStatus, HistoryLog, HistoryTab, LocationRecord, TIMESTAMP_FORMAT};
use crate::route::Route;
use crate::ui::styles;
use crate::ui::widgets::{card, screen_header};
use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Alignment, Color, Element, Length};

fn tab_button(tab: HistoryTab, selected: HistoryTab) -> Element<'static, Message> {
    button(text(tab.title()).width(Length::Fill).align_x(Alignment::Center))
        .on_press(Message::SelectHistoryTab(tab))
        .padding(10)
        .width(Length::Fill)
        .style(styles::tab_button_style(tab == selected))
        .into()
}

fn location_row(record: &LocationRecord) -> Element<'_, Message> {
    card(
        row![
            container(text("⌖").size(22))
                .style(styles::badge_style(styles::BRAND))
                .center(48),
            column![
                text(&record.location).size(18),
                text(&record.coords).size(14).color(styles::MUTED),
                text(record.timestamp.format(TIMESTAMP_FORMAT).to_string()).size(13),
            ]
            .spacing(4),
        ]
        .spacing(16)
        .align_y(Alignment::Center),
    )
    .into()
}

fn status_color(status: DeliveryStatus) -> Color {
    match status {
        DeliveryStatus::Delivered => styles::SUCCESS,
        DeliveryStatus::Pending => styles::MUTED,
        DeliveryStatus::Failed => styles::DANGER,
    }
}

fn alert_row(record: &AlertRecord) -> Element<'_, Message> {
    card(
        row![
            container(text("⚠").size(22))
                .style(styles::badge_style(styles::DANGER))
                .center(48),
            column![
                row![
                    text(&record.kind).size(18),
                    text(record.status.to_string())
                        .size(13)
                        .color(status_color(record.status)),
                ]
                .spacing(12)
                .align_y(Alignment::Center),
                text(format!("Sent to: {}", record.recipients())).size(14),
                text(record.timestamp.format(TIMESTAMP_FORMAT).to_string())
                    .size(13)
                    .color(styles::MUTED),
            ]
            .spacing(4),
        ]
        .spacing(16)
        .align_y(Alignment::Center),
    )
    .into()
}

pub fn view(log: &HistoryLog) -> Element<'_, Message> {
    let header = screen_header(
        ("Back to Dashboard", Route::Dashboard),
        "⏱",
        "Activity History",
        "Track your location and alert records",
    );

    let tabs = row![
        tab_button(HistoryTab::Locations, log.tab),
        tab_button(HistoryTab::Alerts, log.tab),
    ]
    .spacing(8);

    let records: Element<'_, Message> = match log.tab {
        HistoryTab::Locations => column(log.locations().iter().map(location_row)).spacing(12).into(),
        HistoryTab::Alerts => column(log.alerts().iter().map(alert_row)).spacing(12).into(),
    };

    scrollable(column![header, column![tabs, records].spacing(20).padding(32)])
        .height(Length::Fill)
        .into()
}
