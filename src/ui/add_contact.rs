use crate::app::Message;
use crate::contacts::ContactForm;
use crate::form::Field;
use crate::route::Route;
use crate::ui::styles;
use crate::ui::widgets::{card, labeled_input};
use iced::widget::{button, column, container, scrollable, text};
use iced::{Alignment, Element, Length};

pub fn view(form: &ContactForm) -> Element<'_, Message> {
    let back = button(text("← Back to Contacts"))
        .on_press(Message::Navigate(Route::EmergencyContacts))
        .padding(0)
        .style(styles::link_button_style());

    let fields = column![
        labeled_input(
            "Full Name *",
            "John Doe",
            &form.name,
            Field::Name,
            &form.errors,
            Message::SubmitContact,
        ),
        labeled_input(
            "Phone Number *",
            "+1 234 567 8900",
            &form.phone,
            Field::Phone,
            &form.errors,
            Message::SubmitContact,
        ),
        labeled_input(
            "Relation *",
            "Father, Mother, Friend, etc.",
            &form.relation,
            Field::Relation,
            &form.errors,
            Message::SubmitContact,
        ),
        button(text("Save Contact").size(18).width(Length::Fill).align_x(Alignment::Center))
            .on_press(Message::SubmitContact)
            .padding(14)
            .width(Length::Fill)
            .style(styles::primary_button_style()),
    ]
    .spacing(18);

    let content = column![
        back,
        text("Add Emergency Contact").size(32),
        text("Enter the details of your emergency contact").size(16),
        card(fields).padding(28),
    ]
    .spacing(14)
    .max_width(560.0);

    scrollable(container(content).padding(32).center_x(Length::Fill))
        .height(Length::Fill)
        .into()
}
