//! End-to-end checks of the filter -> sort -> paginate derivation.

mod common;

use common::{holding, holding_full, names, state_with};
use renda_model::prelude::SortKey;

fn sample_portfolio() -> Vec<renda_model::prelude::Holding> {
    vec![
        holding(1, "Tesouro Prefixado", 1000.0),
        holding(2, "CDB Banco X", 5000.0),
        holding(3, "LCI Imóveis", 2000.0),
    ]
}

#[test]
fn value_applied_sorts_largest_investment_first() {
    let mut state = state_with(sample_portfolio());
    state.sort_by = Some(SortKey::ValueApplied);

    assert_eq!(
        names(&state),
        vec!["CDB Banco X", "LCI Imóveis", "Tesouro Prefixado"]
    );
}

#[test]
fn search_narrows_regardless_of_sort_key() {
    let mut state = state_with(sample_portfolio());
    state.search_query = "tesouro".to_string();

    for key in SortKey::all() {
        state.sort_by = Some(*key);
        assert_eq!(names(&state), vec!["Tesouro Prefixado"]);
    }
}

#[test]
fn no_sort_key_preserves_source_order_exactly() {
    let mut state = state_with(vec![
        holding(1, "Zebra", 1.0),
        holding(2, "Alpha", 9.0),
        holding(3, "Meio", 5.0),
    ]);
    state.sort_by = None;

    assert_eq!(names(&state), vec!["Zebra", "Alpha", "Meio"]);
}

#[test]
fn twelve_products_paginate_as_five_five_two_zero() {
    let products = (1..=12)
        .map(|i| holding(i, &format!("Produto {i:02}"), i as f64))
        .collect();
    let mut state = state_with(products);

    state.current_page = 1;
    assert_eq!(state.visible_products().len(), 5);
    state.current_page = 2;
    assert_eq!(state.visible_products().len(), 5);
    state.current_page = 3;
    assert_eq!(state.visible_products().len(), 2);
    state.current_page = 4;
    assert!(state.visible_products().is_empty());
}

#[test]
fn pages_window_the_sorted_collection() {
    let products = (1..=12)
        .map(|i| holding(i, &format!("Produto {i:02}"), i as f64))
        .collect();
    let mut state = state_with(products);
    state.sort_by = Some(SortKey::ValueApplied);

    state.current_page = 1;
    assert_eq!(names(&state)[0], "Produto 12");
    state.current_page = 3;
    assert_eq!(names(&state), vec!["Produto 02", "Produto 01"]);
}

#[test]
fn total_products_reflects_the_filtered_count_under_any_sort() {
    let mut products: Vec<_> = (1..=9)
        .map(|i| holding_full(i, &format!("Fundo {i}"), "LCA", 10.0, 10.0, 1.0, 30))
        .collect();
    products.push(holding(10, "CDB Master", 100.0));
    products.push(holding(11, "CDB Plus", 200.0));
    products.push(holding(12, "CDB Pro", 300.0));

    let mut state = state_with(products);
    state.search_query = "cdb".to_string();

    assert_eq!(state.filtered_count(), 3);
    for key in SortKey::all() {
        state.sort_by = Some(*key);
        assert_eq!(state.filtered_count(), 3);
    }
}

#[test]
fn unmatched_search_renders_an_empty_page() {
    let mut state = state_with(sample_portfolio());
    state.search_query = "debênture".to_string();

    assert_eq!(state.filtered_count(), 0);
    assert!(state.visible_products().is_empty());
}

#[test]
fn stale_page_after_narrowing_search_is_empty_not_clamped() {
    let products = (1..=12)
        .map(|i| holding(i, &format!("Produto {i:02}"), i as f64))
        .collect();
    let mut state = state_with(products);
    state.current_page = 3;

    // Narrow down to a single match while sitting on page 3.
    state.search_query = "Produto 01".to_string();

    assert_eq!(state.current_page, 3);
    assert_eq!(state.filtered_count(), 1);
    assert!(state.visible_products().is_empty());
}

#[test]
fn derivations_never_mutate_the_source_list() {
    let mut state = state_with(sample_portfolio());
    state.sort_by = Some(SortKey::Name);
    state.search_query = "i".to_string();

    let before = state.products.clone();
    let _ = state.visible_products();
    let _ = state.filtered_count();
    assert_eq!(state.products, before);
}
