//! One holding rendered as three side-by-side sub-blocks: identity,
//! position figures, and due-date figures.

use iced::widget::{column, container, row, text};
use iced::{Color, Element, Length};
use renda_model::prelude::{
    format_brl, format_date, format_days, format_percent, Holding,
};

use crate::message::Message;
use crate::theme::{self, RendaTheme};

pub fn view_product_row(
    product: &Holding,
    highlighted: bool,
) -> Element<'_, Message> {
    let style = if highlighted {
        theme::Container::RowHighlight
    } else {
        theme::Container::Row
    };

    container(
        row![
            view_identity(product),
            view_position(product),
            view_due(product),
        ]
        .spacing(16),
    )
    .padding(24)
    .width(Length::Fill)
    .style(style.style())
    .into()
}

fn view_identity(product: &Holding) -> Element<'_, Message> {
    let identity = &product.fixed_income;
    column![
        text(identity.name.as_str())
            .size(15)
            .color(RendaTheme::TEXT_PRIMARY),
        labeled("Classe", identity.bond_type.clone(), None),
    ]
    .spacing(8)
    .width(Length::FillPortion(2))
    .into()
}

fn view_position(product: &Holding) -> Element<'_, Message> {
    let position = &product.position;
    let profit_color = if position.profitability < 0.0 {
        RendaTheme::ERROR
    } else {
        RendaTheme::SUCCESS
    };

    row![
        labeled("Valor Investido", format_brl(position.value_applied), None),
        labeled("Saldo Bruto", format_brl(position.equity), None),
        labeled(
            "Rentabilidade",
            format_percent(position.profitability),
            Some(profit_color),
        ),
        labeled("Indexador", position.indexer_display().to_string(), None),
        labeled(
            "% da Carteira",
            format_percent(position.portfolio_percentage),
            None,
        ),
    ]
    .spacing(16)
    .width(Length::FillPortion(3))
    .into()
}

fn view_due(product: &Holding) -> Element<'_, Message> {
    let due = &product.due;
    row![
        labeled("Data Venc.", format_date(due.date), None),
        labeled(
            "Dias até Vencimento",
            format_days(due.days_until_expiration),
            None,
        ),
    ]
    .spacing(16)
    .width(Length::FillPortion(2))
    .into()
}

fn labeled(
    label: &'static str,
    value: String,
    value_color: Option<Color>,
) -> Element<'static, Message> {
    column![
        text(label).size(12).color(RendaTheme::TEXT_DIMMED),
        text(value)
            .size(14)
            .color(value_color.unwrap_or(RendaTheme::TEXT_PRIMARY)),
    ]
    .spacing(4)
    .width(Length::Fill)
    .into()
}
