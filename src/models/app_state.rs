use crate::api::CatalogClient;

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogClient,
}

impl AppState {
    pub fn new(catalog: CatalogClient) -> Self {
        Self { catalog }
    }
}
