use crate::app::Message;
use crate::contacts::{Contact, ContactBook};
use crate::route::Route;
use crate::ui::styles;
use crate::ui::widgets::{card, screen_header};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, column, container, horizontal_space, row, scrollable, stack, text};
use iced::{Alignment, Element, Length};

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect()
}

fn contact_row(contact: &Contact) -> Element<'_, Message> {
    // Editing is not supported; the button is shown disabled
    let edit = button(text("✎")).padding([8, 12]).style(styles::outline_button_style());
    let delete = button(text("🗑"))
        .on_press(Message::DeleteContact(contact.id))
        .padding([8, 12])
        .style(styles::danger_button_style());

    card(
        row![
            container(text(initials(&contact.name)).size(18))
                .style(styles::badge_style(styles::BRAND))
                .center(48),
            column![
                text(&contact.name).size(18),
                text(&contact.phone).size(15),
                text(&contact.relation).size(13).color(styles::MUTED),
            ]
            .spacing(2),
            horizontal_space(),
            row![edit, delete].spacing(8),
        ]
        .spacing(16)
        .align_y(Alignment::Center),
    )
    .into()
}

pub fn view(book: &ContactBook) -> Element<'_, Message> {
    let header = screen_header(
        ("Back to Dashboard", Route::Dashboard),
        "☎",
        "Emergency Contacts",
        "Manage your trusted contacts",
    );

    let list: Element<'_, Message> = if book.is_empty() {
        text("No emergency contacts yet. Tap + to add one.")
            .color(styles::MUTED)
            .into()
    } else {
        column![
            text(format!("{} contacts", book.len())).size(14).color(styles::MUTED),
            column(book.iter().map(contact_row)).spacing(12),
        ]
        .spacing(12)
        .into()
    };

    let page = scrollable(column![header, container(list).padding(32)]).height(Length::Fill);

    let add_button = container(
        button(text("+").size(32).align_x(Alignment::Center))
            .on_press(Message::Navigate(Route::AddContact))
            .width(64)
            .height(64)
            .style(styles::primary_button_style()),
    )
    .padding(32)
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Right)
    .align_y(Vertical::Bottom);

    stack![page, add_button].into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("John Doe"), "JD");
        assert_eq!(initials("Emergency Services Dept"), "ES");
        assert_eq!(initials("Ada"), "A");
    }
}
