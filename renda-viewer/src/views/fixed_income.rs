//! The fixed-income holdings panel: heading, sort picker, search box,
//! striped product rows, and the pagination control.

use iced::widget::{
    column, container, keyed_column, pick_list, row, text, text_input, Space,
};
use iced::{Element, Length};
use renda_model::prelude::{SortKey, PRODUCTS_PER_PAGE};

use crate::message::Message;
use crate::state::State;
use crate::theme::{self, RendaTheme};
use crate::views::product_row::view_product_row;
use crate::widgets::pagination;

pub fn view_fixed_income(state: &State) -> Element<'_, Message> {
    let visible = state.visible_products();
    let total_products = state.filtered_count();

    // Background stripe alternates by position within the rendered
    // page, so stripes reset on every page change.
    let rows: Element<'_, Message> = if visible.is_empty() {
        view_empty()
    } else {
        keyed_column(visible.into_iter().enumerate().map(
            |(index, product)| {
                (
                    product.id().value(),
                    view_product_row(product, index % 2 == 1),
                )
            },
        ))
        .width(Length::Fill)
        .into()
    };

    container(
        column![
            view_controls(state),
            rows,
            pagination(PRODUCTS_PER_PAGE, total_products, state.current_page),
        ]
        .width(Length::Fill),
    )
    .width(Length::Fill)
    .style(theme::Container::Panel.style())
    .into()
}

/// Heading plus the sort picker and search input.
fn view_controls(state: &State) -> Element<'_, Message> {
    let heading = text("Minhas Rendas Fixas")
        .size(18)
        .color(RendaTheme::TEXT_SECONDARY);

    let sorter = pick_list(
        SortKey::all(),
        state.sort_by,
        Message::SortSelected,
    )
    .placeholder("Ordenar por")
    .text_size(14)
    .padding([8.0, 12.0]);

    let search = text_input("Buscar por título", &state.search_query)
        .on_input(Message::SearchChanged)
        .size(14)
        .padding([8.0, 12.0])
        .width(Length::Fixed(260.0))
        .style(theme::search_input);

    container(
        row![heading, Space::with_width(Length::Fill), sorter, search]
            .spacing(16)
            .align_y(iced::Alignment::Center),
    )
    .padding(24)
    .width(Length::Fill)
    .style(theme::Container::Header.style())
    .into()
}

fn view_empty() -> Element<'static, Message> {
    container(
        text("Nenhum produto encontrado")
            .size(14)
            .color(RendaTheme::TEXT_DIMMED),
    )
    .padding(24)
    .width(Length::Fill)
    .center_x(Length::Fill)
    .style(theme::Container::Row.style())
    .into()
}
