use tracing::instrument;

use crate::{ApiClient, ApiError, Resource, UserProfile};

#[derive(Debug, Clone)]
pub struct UserService {
    client: ApiClient,
}

impl UserService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetches the signed-in customer's profile.
    #[instrument(skip(self))]
    pub async fn get_profile(&self) -> Result<UserProfile, ApiError> {
        self.client.get_resource(&Resource::Profile).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::{ApiConfig, HttpResponse, MockHttpTransport};

    #[tokio::test]
    async fn profile_is_passed_through() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .withf(|req| req.url == "http://localhost:5000/api/profile")
            .times(1)
            .returning(|_| {
                let body = json!({
                    "name": "Asha",
                    "email": "asha@example.com",
                    "phone": "+91 91234 56789",
                    "city": "",
                    "address": "12 Elm St"
                });
                Ok(HttpResponse::new(200, "OK", body.to_string()))
            });

        let profile = ApiClient::new(ApiConfig::default(), Arc::new(transport))
            .users()
            .get_profile()
            .await
            .expect("ok");

        assert_eq!(
            profile,
            UserProfile {
                name: "Asha".into(),
                email: "asha@example.com".into(),
                phone: "+91 91234 56789".into(),
                city: String::new(),
                address: "12 Elm St".into(),
            }
        );
    }
}
