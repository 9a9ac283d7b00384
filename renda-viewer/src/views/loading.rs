use iced::widget::{container, text};
use iced::{Element, Length};

use crate::message::Message;
use crate::theme::RendaTheme;

pub fn view_loading() -> Element<'static, Message> {
    container(
        text("Carregando produtos...")
            .size(16)
            .color(RendaTheme::TEXT_SECONDARY),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}
