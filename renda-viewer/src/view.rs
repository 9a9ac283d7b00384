//! Root-level view composition

use iced::widget::{column, container, scrollable};
use iced::{Element, Length};

use crate::message::Message;
use crate::state::State;
use crate::views::{view_error, view_fixed_income, view_loading};

pub fn view(state: &State) -> Element<'_, Message> {
    if state.loading {
        return view_loading();
    }

    let mut content = column![].spacing(16).padding(24).max_width(960);

    if let Some(message) = &state.error_message {
        content = content.push(view_error(message));
    }

    content = content.push(view_fixed_income(state));

    scrollable(
        container(content)
            .width(Length::Fill)
            .center_x(Length::Fill),
    )
    .height(Length::Fill)
    .into()
}
