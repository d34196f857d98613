//! Typed client for the waste-pickup backend.
//!
//! This crate contains every model, identifier, endpoint path and error type
//! used to talk to the backend, together with the resource services presentation
//! code calls. The network itself sits behind the [`HttpTransport`] port;
//! infrastructure crates implement it, this crate never performs I/O.
//!
//! ## Architectural Layer
//!
//! **Domain + port definitions.** Request construction, header merging, error
//! message resolution and the order-to-booking mapping all live here so they
//! can be tested against a mocked transport.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype identifiers (`OrderId`, `ProductId`, etc.) |
//! | [`types`] | Value types (`PickupRating`, `BookingStatus`) |
//! | [`models`] | Wire shapes and view models |
//! | [`endpoints`] | Endpoint registry |
//! | [`config`] | Backend origin configuration |
//! | [`errors`] | `ApiError`, `TransportError`, message resolution |
//! | [`transport`] | The `HttpTransport` port and its request/response values |
//! | [`client`] | `ApiClient`, the transport wrapper |
//! | [`services`] | Orders, users, bookings, products, pricing |
//!
//! ## Example
//!
//! ```no_run
//! # async fn run(transport: std::sync::Arc<dyn pickup_api::HttpTransport>) -> Result<(), pickup_api::ApiError> {
//! use pickup_api::{ApiClient, ApiConfig};
//!
//! let client = ApiClient::new(ApiConfig::new("http://localhost:5000")?, transport);
//! for booking in client.orders().get_all_orders().await? {
//!     println!("{} {}", booking.id, booking.status);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod endpoints;
pub mod errors;
pub mod identifiers;
pub mod models;
pub mod services;
pub mod transport;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use client::{ApiClient, RequestOptions};
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use endpoints::Resource;
pub use errors::{ApiError, TransportError, UNKNOWN_ERROR_MESSAGE};
pub use identifiers::{DriverId, OrderId, ProductId, UserId};
pub use models::{
    BackendOrder, Booking, BookingResponse, CreateBookingData, CustomerInfo, DriverInfo,
    OrderDetails, PaymentInfo, PhotoAttachment, Product, Service, UserProfile,
};
pub use services::{
    BookingService, OrderMapper, OrderService, PricingService, ProductService, RatingStatusMapper,
    UserService,
};
#[cfg(any(test, feature = "testing"))]
pub use transport::MockHttpTransport;
pub use transport::{
    FormData, FormPart, Headers, HttpMethod, HttpRequest, HttpResponse, HttpTransport, RequestBody,
};
pub use types::{BookingStatus, PickupRating};
