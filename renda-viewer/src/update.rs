use iced::Task;

use crate::api_client::ApiClient;
use crate::message::Message;
use crate::state::State;

/// Kick off a product-list fetch against the given client.
pub fn fetch_products(client: ApiClient) -> Task<Message> {
    Task::perform(
        async move {
            client
                .fetch_fixed_income()
                .await
                .map_err(|e| e.to_string())
        },
        Message::ProductsLoaded,
    )
}

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        Message::ProductsLoaded(result) => {
            state.loading = false;
            match result {
                Ok(products) => {
                    log::info!("Loaded {} fixed-income products", products.len());
                    state.products = products;
                    state.error_message = None;
                }
                Err(err) => {
                    log::error!("Failed to load products: {}", err);
                    state.error_message = Some(err);
                }
            }
            Task::none()
        }
        Message::RefreshProducts => {
            log::debug!("Refreshing product list");
            state.loading = true;
            fetch_products(state.api_client.clone())
        }
        Message::SearchChanged(query) => {
            // Page and sort key deliberately stay put; narrowing the
            // search while deep in the list can land on an empty page.
            state.search_query = query;
            Task::none()
        }
        Message::SortSelected(key) => {
            state.sort_by = Some(key);
            Task::none()
        }
        Message::PageSelected(page) => {
            // No bounds validation at this boundary; the pagination
            // control only offers pages derived from the filtered count.
            state.current_page = page;
            Task::none()
        }
    }
}
