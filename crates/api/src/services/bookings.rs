use tracing::{error, info, instrument};

use crate::{endpoints, ApiClient, ApiError, BookingResponse, CreateBookingData, FormData};

/// Prefix for the last-resort message of a failed booking.
pub const BOOKING_FAILED_PREFIX: &str = "Booking failed";

/// Creates pickup bookings.
#[derive(Debug, Clone)]
pub struct BookingService {
    client: ApiClient,
}

impl BookingService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Submits a booking as a multipart form.
    ///
    /// `wasteType`, `address` and `pickupTime` are always sent. `notes` is sent
    /// only when present and non-empty and `photo` only when present; absent
    /// fields are left out of the form entirely.
    ///
    /// # Errors
    ///
    /// As [`ApiClient::fetch_json`], except the last-resort message for a
    /// non-2xx response is `"Booking failed: {status text}"`.
    #[instrument(skip_all)]
    pub async fn create_booking(&self, data: CreateBookingData) -> Result<BookingResponse, ApiError> {
        info!(
            waste_type = %data.waste_type,
            address = %data.address,
            pickup_time = %data.pickup_time,
            has_notes = data.notes.as_deref().is_some_and(|n| !n.is_empty()),
            has_photo = data.photo.is_some(),
            "Sending booking request"
        );

        let form = booking_form(data);

        match self
            .client
            .post_form::<BookingResponse>(endpoints::CREATE_BOOKING, form, BOOKING_FAILED_PREFIX)
            .await
        {
            Ok(response) => {
                info!(booking_id = %response.booking_id, message = %response.message, "Booking successful");
                Ok(response)
            }
            Err(err) => {
                error!(error = %err, "Booking failed");
                Err(err)
            }
        }
    }
}

fn booking_form(data: CreateBookingData) -> FormData {
    let mut form = FormData::new();

    form.append_text("wasteType", data.waste_type);
    form.append_text("address", data.address);
    form.append_text("pickupTime", data.pickup_time);

    if let Some(notes) = data.notes.filter(|n| !n.is_empty()) {
        form.append_text("notes", notes);
    }

    if let Some(photo) = data.photo {
        form.append_file("photo", photo);
    }

    form
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use serde_json::json;

    use super::*;
    use crate::{ApiConfig, HttpMethod, HttpRequest, HttpResponse, MockHttpTransport, PhotoAttachment, RequestBody};

    fn required_only() -> CreateBookingData {
        CreateBookingData {
            waste_type: "e-waste".into(),
            address: "12 Elm St".into(),
            pickup_time: "2024-01-01T10:00".into(),
            notes: None,
            photo: None,
        }
    }

    fn success_body() -> String {
        json!({
            "success": true,
            "bookingId": "1704103200",
            "message": "Booking created successfully!"
        })
        .to_string()
    }

    /// Returns a service whose transport answers once with `response` and
    /// records the request it was given.
    fn recording_service(response: HttpResponse) -> (BookingService, Arc<Mutex<Option<HttpRequest>>>) {
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);

        let mut transport = MockHttpTransport::new();
        transport.expect_send().times(1).returning(move |req| {
            *sink.lock().expect("lock") = Some(req);
            Ok(response.clone())
        });

        let client = ApiClient::new(ApiConfig::default(), Arc::new(transport));
        (client.bookings(), seen)
    }

    fn submitted_form(seen: &Mutex<Option<HttpRequest>>) -> (HttpRequest, FormData) {
        let request = seen.lock().expect("lock").clone().expect("request sent");
        let form = match &request.body {
            RequestBody::Multipart(form) => form.clone(),
            other => panic!("expected multipart body, got {other:?}"),
        };
        (request, form)
    }

    #[tokio::test]
    async fn required_fields_only_when_optionals_are_absent() {
        let (service, seen) = recording_service(HttpResponse::new(200, "OK", success_body()));

        let response = service.create_booking(required_only()).await.expect("ok");
        assert!(response.success);
        assert_eq!(response.booking_id, "1704103200");

        let (request, form) = submitted_form(&seen);
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "http://localhost:5000/api/bookings/create");
        assert_eq!(form.field_names(), vec!["wasteType", "address", "pickupTime"]);
        assert_eq!(form.text("wasteType"), Some("e-waste"));
        assert_eq!(form.text("address"), Some("12 Elm St"));
        assert_eq!(form.text("pickupTime"), Some("2024-01-01T10:00"));
    }

    #[tokio::test]
    async fn empty_notes_are_not_sent() {
        let (service, seen) = recording_service(HttpResponse::new(200, "OK", success_body()));

        let data = CreateBookingData {
            notes: Some(String::new()),
            ..required_only()
        };
        service.create_booking(data).await.expect("ok");

        let (_, form) = submitted_form(&seen);
        assert_eq!(form.text("notes"), None);
        assert_eq!(form.parts().len(), 3);
    }

    #[tokio::test]
    async fn photo_and_notes_are_included_without_content_type() {
        let (service, seen) = recording_service(HttpResponse::new(200, "OK", success_body()));

        let data = CreateBookingData {
            notes: Some("Two old monitors".into()),
            photo: Some(PhotoAttachment {
                file_name: "monitors.jpg".into(),
                content_type: Some("image/jpeg".into()),
                bytes: vec![0xff, 0xd8, 0xff],
            }),
            ..required_only()
        };
        service.create_booking(data).await.expect("ok");

        let (request, form) = submitted_form(&seen);
        assert!(request.headers.get("content-type").is_none());
        assert!(request.headers.is_empty());
        assert_eq!(
            form.field_names(),
            vec!["wasteType", "address", "pickupTime", "notes", "photo"]
        );
        assert_eq!(form.text("notes"), Some("Two old monitors"));

        let photo = form.file("photo").expect("photo part");
        assert_eq!(photo.file_name, "monitors.jpg");
        assert_eq!(photo.bytes, vec![0xff, 0xd8, 0xff]);
    }

    #[tokio::test]
    async fn backend_error_message_is_surfaced() {
        let body = json!({"error": "Missing field: pickupTime"}).to_string();
        let (service, _) = recording_service(HttpResponse::new(400, "Bad Request", body));

        let err = service.create_booking(required_only()).await.expect_err("should fail");
        assert_eq!(err.to_string(), "Missing field: pickupTime");
    }

    #[tokio::test]
    async fn unparsable_error_body_falls_back_to_unknown_error() {
        let (service, _) = recording_service(HttpResponse::new(502, "Bad Gateway", "upstream timeout"));

        let err = service.create_booking(required_only()).await.expect_err("should fail");
        assert_eq!(err.to_string(), "Unknown error");
    }

    #[tokio::test]
    async fn json_error_without_message_uses_booking_prefix() {
        let (service, _) = recording_service(HttpResponse::new(500, "Internal Server Error", "{}"));

        let err = service.create_booking(required_only()).await.expect_err("should fail");
        assert_eq!(err.to_string(), "Booking failed: Internal Server Error");
    }
}
