//! Numbered page buttons under the holdings list.

use iced::widget::{button, container, row, text};
use iced::{Element, Length};
use renda_model::prelude::page_count;

use crate::message::Message;
use crate::theme;

/// Render one button per page of the filtered collection.
///
/// `total_products` must be the post-filter count, so the button row
/// shrinks and grows with the search text. The emitted page number is
/// applied unconditionally by the update loop; no bounds validation
/// happens at this boundary.
pub fn pagination<'a>(
    products_per_page: usize,
    total_products: usize,
    current_page: usize,
) -> Element<'a, Message> {
    let total_pages = page_count(total_products, products_per_page);

    let mut pages = row![].spacing(8);
    for number in 1..=total_pages {
        let style = if number == current_page {
            theme::Button::PageActive
        } else {
            theme::Button::Page
        };
        pages = pages.push(
            button(text(number.to_string()).size(14))
                .padding([6.0, 12.0])
                .style(style.style())
                .on_press(Message::PageSelected(number)),
        );
    }

    container(pages)
        .padding(16)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}
