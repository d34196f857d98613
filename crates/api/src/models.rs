//! Wire shapes and view models exchanged with the pickup backend.
//!
//! Every record here is a transient request/response value. Field names follow
//! the backend's `camelCase` JSON. Fields the backend is known to omit are
//! `Option`s so a missing field decodes as `None` rather than failing.

use serde::{Deserialize, Serialize};

use crate::{BookingStatus, DriverId, OrderId, PickupRating, ProductId, UserId};

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

/// Full details of one order, as rendered on the order-details page.
///
/// The backend produces this shape directly; it is returned without mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    pub id: OrderId,
    /// Status label chosen by the backend.
    pub status: String,
    pub date: String,
    pub time: String,
    pub address: String,
    /// Service label (the kind of waste collected).
    pub service: String,
    pub driver: DriverInfo,
    pub payment: PaymentInfo,
    pub customer: CustomerInfo,
}

/// Driver assigned to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverInfo {
    pub name: String,
    pub phone: String,
    pub plate_no: String,
    pub location: String,
}

/// Payment recorded against an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    /// Display amount including the currency symbol, e.g. `"₹100.0"`.
    pub amount: String,
    pub method: String,
    pub transaction_id: String,
    pub status: String,
}

/// Customer who placed an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// An order exactly as the backend's order endpoints return it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendOrder {
    pub pickup_id: OrderId,
    pub waste_type: String,
    pub pickup_time: String,
    /// `YYYY-MM-DD`.
    pub pickup_date: String,
    pub user_location: String,
    /// Display cost including the currency symbol.
    pub cost: String,
    /// Absent or `null` means unrated.
    #[serde(default)]
    pub pickup_rating: PickupRating,
    pub notes: Option<String>,
    pub photo_filename: Option<String>,
    pub user_id: UserId,
    pub driver_id: DriverId,
}

/// A row in the customer's booking list, derived from a [`BackendOrder`].
///
/// Produced by an [`crate::OrderMapper`]; never sent back to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: OrderId,
    pub status: BookingStatus,
    pub date: String,
    pub time: String,
    pub address: String,
    pub service: String,
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub address: String,
}

// ---------------------------------------------------------------------------
// Bookings
// ---------------------------------------------------------------------------

/// Input for creating a new pickup booking.
///
/// Sent as a multipart form, so this type is not serialised with serde.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateBookingData {
    pub waste_type: String,
    pub address: String,
    /// Requested pickup time, e.g. `"2024-01-01T10:00"`.
    pub pickup_time: String,
    /// Free-text notes; omitted from the form when `None` or empty.
    pub notes: Option<String>,
    /// Photo of the waste; omitted from the form when `None`.
    pub photo: Option<PhotoAttachment>,
}

/// A binary file attached to a booking.
#[derive(Clone, PartialEq, Eq)]
pub struct PhotoAttachment {
    pub file_name: String,
    /// Media type such as `image/jpeg`. The transport decides when absent.
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for PhotoAttachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhotoAttachment")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub success: bool,
    pub booking_id: String,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Catalogue and pricing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: String,
    pub image: String,
    pub rating: f64,
}

/// A service plan offered on the pricing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub name: String,
    pub price: String,
    /// Billing period label, e.g. `"/month"`.
    pub period: String,
    pub description: String,
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}
