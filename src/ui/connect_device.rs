use crate::app::Message;
use crate::devices::{Device, DevicePanel};
use crate::route::Route;
use crate::ui::styles;
use crate::ui::widgets::{card, notification_banner, screen_header};
use iced::widget::{button, column, container, horizontal_space, row, scrollable, text, toggler};
use iced::{Alignment, Element, Length};

fn device_row<'a>(device: &'a Device, is_connected: bool) -> Element<'a, Message> {
    let action = if is_connected {
        button(text("Disconnect"))
            .on_press(Message::DisconnectDevice)
            .padding([10, 20])
            .style(styles::outline_button_style())
    } else {
        button(text("Connect"))
            .on_press(Message::ConnectDevice(device.id))
            .padding([10, 20])
            .style(styles::primary_button_style())
    };

    let badge_color = if is_connected { styles::SUCCESS } else { styles::BRAND };

    card(
        row![
            container(text("⌁").size(22))
                .style(styles::badge_style(badge_color))
                .center(48),
            column![
                text(&device.name).size(18),
                text(format!("{} · Signal: {}", device.status, device.signal))
                    .size(14)
                    .color(styles::MUTED),
            ]
            .spacing(4),
            horizontal_space(),
            action,
        ]
        .spacing(16)
        .align_y(Alignment::Center),
    )
    .into()
}

pub fn view(panel: &DevicePanel) -> Element<'_, Message> {
    let header = screen_header(
        ("Back to Dashboard", Route::Dashboard),
        "⌁",
        "Connect Device",
        "Pair your safety devices via Bluetooth",
    );

    let bluetooth_status = if panel.bluetooth_on {
        "Scanning for devices..."
    } else {
        "Turn on to find devices"
    };

    let bluetooth_card = card(
        row![
            column![
                text("Bluetooth").size(20),
                text(bluetooth_status).size(14).color(styles::MUTED),
            ]
            .spacing(4),
            horizontal_space(),
            toggler(panel.bluetooth_on).on_toggle(Message::BluetoothToggled),
        ]
        .align_y(Alignment::Center),
    );

    let mut body = column![].spacing(16).padding(32);

    if panel.show_banner() {
        body = body.push(notification_banner(
            "Please turn on Bluetooth to connect your device.",
            Message::DismissBanner,
        ));
    }

    body = body.push(bluetooth_card);

    if panel.bluetooth_on {
        body = body.push(text("Available Devices").size(24));
        if panel.scanning && panel.devices.is_empty() {
            body = body.push(text("Searching...").color(styles::MUTED));
        }
        for device in &panel.devices {
            body = body.push(device_row(device, panel.is_connected(device.id)));
        }
    }

    scrollable(column![header, body]).height(Length::Fill).into()
}
