//! Shared value types for the pickup domain.
//!
//! Unlike the newtype identifiers in [`crate::identifiers`], these types carry
//! values that participate in domain decisions: the rating a customer left on
//! a pickup drives the status shown to them.

use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Rating
// ---------------------------------------------------------------------------

/// The rating a customer gave a completed pickup.
///
/// The backend stores this as a float defaulting to `0.0`; an unrated pickup
/// is one that has not happened yet. A `null` on the wire decodes as `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct PickupRating(f64);

impl<'de> Deserialize<'de> for PickupRating {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<f64>::deserialize(deserializer)?;
        Ok(Self(value.unwrap_or_default()))
    }
}

impl PickupRating {
    /// Creates a [`PickupRating`] from the raw wire value.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the underlying `f64` value.
    pub fn as_f64(self) -> f64 {
        self.0
    }

    /// Returns `true` if the rating is strictly greater than zero.
    ///
    /// `NaN` is never positive.
    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }
}

impl std::fmt::Display for PickupRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Booking status
// ---------------------------------------------------------------------------

/// Status label presented for a booking in the customer's order list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    /// The pickup happened and the customer rated it.
    Completed,
    /// The pickup is booked but has not been rated yet.
    Scheduled,
}

impl BookingStatus {
    /// Derives the status from a pickup rating: a positive rating means the
    /// pickup is complete, anything else (including zero) means scheduled.
    pub fn from_rating(rating: PickupRating) -> Self {
        if rating.is_positive() {
            Self::Completed
        } else {
            Self::Scheduled
        }
    }

    /// Returns the label exactly as it appears on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Scheduled => "Scheduled",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_ratings_are_completed() {
        for value in [0.1, 1.0, 4.5, 5.0] {
            assert_eq!(
                BookingStatus::from_rating(PickupRating::new(value)),
                BookingStatus::Completed,
                "rating {value}"
            );
        }
    }

    #[test]
    fn zero_negative_and_nan_ratings_are_scheduled() {
        for value in [0.0, -0.0, -1.0, f64::NAN] {
            assert_eq!(
                BookingStatus::from_rating(PickupRating::new(value)),
                BookingStatus::Scheduled,
                "rating {value}"
            );
        }
    }

    #[test]
    fn null_rating_decodes_as_zero() {
        let rating: PickupRating = serde_json::from_str("null").expect("decode");
        assert_eq!(rating.as_f64(), 0.0);
        assert_eq!(BookingStatus::from_rating(rating), BookingStatus::Scheduled);

        let rating: PickupRating = serde_json::from_str("4.5").expect("decode");
        assert_eq!(rating, PickupRating::new(4.5));
    }

    #[test]
    fn status_serialises_as_its_label() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::Completed).expect("serialise"),
            "\"Completed\""
        );
        assert_eq!(BookingStatus::Scheduled.to_string(), "Scheduled");
    }
}
