//! Resource-scoped services.
//!
//! Each service wraps an [`crate::ApiClient`] and the registry paths for one
//! backend resource. Only [`OrderService`] reshapes data; the rest return the
//! decoded wire shape unchanged.

mod bookings;
mod orders;
mod pricing;
mod products;
mod users;

pub use bookings::{BookingService, BOOKING_FAILED_PREFIX};
pub use orders::{OrderMapper, OrderService, RatingStatusMapper};
pub use pricing::PricingService;
pub use products::ProductService;
pub use users::UserService;
