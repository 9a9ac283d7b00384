#![allow(dead_code)]

use renda_model::prelude::{Due, FixedIncome, Holding, Position, ProductId};
use renda_viewer::api_client::ApiClient;
use renda_viewer::state::State;

pub fn holding(id: u64, name: &str, value_applied: f64) -> Holding {
    holding_full(id, name, "CDB", value_applied, value_applied, 5.0, 365)
}

pub fn holding_full(
    id: u64,
    name: &str,
    bond_type: &str,
    value_applied: f64,
    equity: f64,
    profitability: f64,
    days: i64,
) -> Holding {
    Holding {
        fixed_income: FixedIncome {
            portfolio_product_id: ProductId::new(id),
            name: name.to_string(),
            bond_type: bond_type.to_string(),
        },
        position: Position {
            value_applied,
            equity,
            profitability,
            portfolio_percentage: 0.0,
            indexer_label: String::new(),
        },
        due: Due {
            date: 0,
            days_until_expiration: days,
        },
    }
}

pub fn state_with(products: Vec<Holding>) -> State {
    let mut state =
        State::new(ApiClient::new("http://localhost:3000".to_string()));
    state.products = products;
    state.loading = false;
    state
}

pub fn names(state: &State) -> Vec<String> {
    state
        .visible_products()
        .iter()
        .map(|p| p.fixed_income.name.clone())
        .collect()
}
