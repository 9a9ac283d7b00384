use iced::widget::{button, container, row, text, Space};
use iced::{Element, Length};

use crate::message::Message;
use crate::theme::{self, RendaTheme};

/// Error banner shown above the list when the product fetch failed.
pub fn view_error(message: &str) -> Element<'_, Message> {
    container(
        row![
            text(format!("Falha ao carregar produtos: {message}"))
                .size(14)
                .color(RendaTheme::ERROR),
            Space::with_width(Length::Fill),
            button(text("Tentar novamente").size(14))
                .padding([6.0, 12.0])
                .style(theme::Button::Page.style())
                .on_press(Message::RefreshProducts),
        ]
        .spacing(12)
        .align_y(iced::Alignment::Center),
    )
    .padding(16)
    .width(Length::Fill)
    .style(theme::Container::ErrorBox.style())
    .into()
}
