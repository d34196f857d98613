//! Endpoint registry: logical resource names to request paths.
//!
//! Literal paths are `const`s; identifier-parameterised paths are functions
//! that interpolate the identifier verbatim as the final path segment. No path
//! carries a trailing slash, and every path is relative to
//! [`crate::ApiConfig::base_url`].

use crate::{OrderId, ProductId};

pub const ORDERS: &str = "/api/orders";
pub const CREATE_BOOKING: &str = "/api/bookings/create";
pub const USERS: &str = "/api/users";
pub const PROFILE: &str = "/api/profile";
pub const DRIVERS: &str = "/api/drivers";
pub const PRODUCTS: &str = "/api/products";
pub const PRICING: &str = "/api/pricing";
pub const SERVICES: &str = "/api/services";

/// `/api/orders/{orderId}`
pub fn order_details(order_id: &OrderId) -> String {
    format!("{ORDERS}/{order_id}")
}

/// `/api/products/{productId}`
pub fn product_details(product_id: ProductId) -> String {
    format!("{PRODUCTS}/{product_id}")
}

// ---------------------------------------------------------------------------
// Resource table
// ---------------------------------------------------------------------------

/// Every logical resource the backend exposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    Orders,
    OrderDetails(OrderId),
    CreateBooking,
    Users,
    Profile,
    Drivers,
    Products,
    ProductDetails(ProductId),
    Pricing,
    Services,
}

impl Resource {
    /// Returns the request path for this resource.
    pub fn path(&self) -> String {
        match self {
            Self::Orders => ORDERS.to_string(),
            Self::OrderDetails(id) => order_details(id),
            Self::CreateBooking => CREATE_BOOKING.to_string(),
            Self::Users => USERS.to_string(),
            Self::Profile => PROFILE.to_string(),
            Self::Drivers => DRIVERS.to_string(),
            Self::Products => PRODUCTS.to_string(),
            Self::ProductDetails(id) => product_details(*id),
            Self::Pricing => PRICING.to_string(),
            Self::Services => SERVICES.to_string(),
        }
    }

    /// Returns the registry's logical name for this resource.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Orders => "orders",
            Self::OrderDetails(_) => "orderDetails",
            Self::CreateBooking => "createBooking",
            Self::Users => "users",
            Self::Profile => "profile",
            Self::Drivers => "drivers",
            Self::Products => "products",
            Self::ProductDetails(_) => "productDetails",
            Self::Pricing => "pricing",
            Self::Services => "services",
        }
    }
}
