use tracing::{debug, instrument};

use crate::{ApiClient, ApiError, BackendOrder, Booking, BookingStatus, OrderDetails, OrderId, Resource};

/// Adapts the backend's order wire shape to the booking-list view model.
///
/// Implementations must be pure: the same order always maps to the same
/// booking. A backend with a different order shape supplies its own mapper via
/// [`OrderService::with_mapper`].
pub trait OrderMapper: Send + Sync {
    fn to_booking(&self, order: &BackendOrder) -> Booking;
}

/// The default mapping: a positive rating marks the pickup completed.
#[derive(Debug, Clone, Copy, Default)]
pub struct RatingStatusMapper;

impl OrderMapper for RatingStatusMapper {
    fn to_booking(&self, order: &BackendOrder) -> Booking {
        Booking {
            id: order.pickup_id.clone(),
            status: BookingStatus::from_rating(order.pickup_rating),
            date: order.pickup_date.clone(),
            time: order.pickup_time.clone(),
            address: order.user_location.clone(),
            service: order.waste_type.clone(),
        }
    }
}

impl<F> OrderMapper for F
where
    F: Fn(&BackendOrder) -> Booking + Send + Sync,
{
    fn to_booking(&self, order: &BackendOrder) -> Booking {
        self(order)
    }
}

/// Order lookups and the customer's booking list.
#[derive(Debug, Clone)]
pub struct OrderService<M = RatingStatusMapper> {
    client: ApiClient,
    mapper: M,
}

impl OrderService {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            mapper: RatingStatusMapper,
        }
    }
}

impl<M: OrderMapper> OrderService<M> {
    /// Replaces the mapping used by [`OrderService::get_all_orders`].
    pub fn with_mapper<N: OrderMapper>(self, mapper: N) -> OrderService<N> {
        OrderService {
            client: self.client,
            mapper,
        }
    }

    /// Fetches the details view of one order, returned exactly as received.
    #[instrument(skip(self, order_id), fields(order_id = %order_id))]
    pub async fn get_order_details(&self, order_id: &OrderId) -> Result<OrderDetails, ApiError> {
        self.client
            .get_resource(&Resource::OrderDetails(order_id.clone()))
            .await
    }

    /// Fetches every order and maps each one to a [`Booking`].
    ///
    /// The result has the same length and order as the backend's list.
    #[instrument(skip(self))]
    pub async fn get_all_orders(&self) -> Result<Vec<Booking>, ApiError> {
        let orders: Vec<BackendOrder> = self.client.get_resource(&Resource::Orders).await?;
        debug!(count = orders.len(), "Mapping backend orders to bookings");

        Ok(orders.iter().map(|order| self.mapper.to_booking(order)).collect())
    }

    /// Fetches one order in its raw wire shape, for callers that need fields
    /// the booking view drops (cost, notes, user and driver ids).
    #[instrument(skip(self, order_id), fields(order_id = %order_id))]
    pub async fn get_order_by_id(&self, order_id: &OrderId) -> Result<BackendOrder, ApiError> {
        self.client
            .get_resource(&Resource::OrderDetails(order_id.clone()))
            .await
    }
}
