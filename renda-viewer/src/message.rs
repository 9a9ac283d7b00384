use renda_model::prelude::{Holding, SortKey};

#[derive(Debug, Clone)]
pub enum Message {
    // Data loading
    ProductsLoaded(Result<Vec<Holding>, String>),
    RefreshProducts,

    // Filter / sort / pagination controls
    SearchChanged(String),
    SortSelected(SortKey),
    PageSelected(usize),
}
