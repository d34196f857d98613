use tracing::instrument;

use crate::{ApiClient, ApiError, Resource, Service};

/// Service plans and their prices.
#[derive(Debug, Clone)]
pub struct PricingService {
    client: ApiClient,
}

impl PricingService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn get_pricing(&self) -> Result<Vec<Service>, ApiError> {
        self.client.get_resource(&Resource::Pricing).await
    }

    #[instrument(skip(self))]
    pub async fn get_services(&self) -> Result<Vec<Service>, ApiError> {
        self.client.get_resource(&Resource::Services).await
    }
}
