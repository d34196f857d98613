use tracing::instrument;

use crate::{ApiClient, ApiError, Product, ProductId, Resource};

/// Read-only access to the product catalogue.
#[derive(Debug, Clone)]
pub struct ProductService {
    client: ApiClient,
}

impl ProductService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn get_all_products(&self) -> Result<Vec<Product>, ApiError> {
        self.client.get_resource(&Resource::Products).await
    }

    #[instrument(skip(self, product_id), fields(product_id = product_id.as_u64()))]
    pub async fn get_product_details(&self, product_id: ProductId) -> Result<Product, ApiError> {
        self.client.get_resource(&Resource::ProductDetails(product_id)).await
    }
}
