use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::client::RegistrationApi;
use crate::error::{IdeatexError, IdeatexResult};
use crate::models::{
    api::{AddTeamData, JoinTeamData, MembersData, UserData},
    ApiResponse, MemberRecord, PaymentOrder, UserProfile, VerificationOutcome,
    VerificationRequest,
};

/// HTTP client for the registration backend. Carries the bearer token in the
/// default headers so every request is authorized the same way.
#[derive(Clone)]
pub struct RegistrationClient {
    client: reqwest::Client,
    base_url: String,
}

impl RegistrationClient {
    pub fn new(base_url: String, token: String) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))
                .expect("Invalid access token format"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, base_url }
    }

    async fn post_envelope<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Value,
    ) -> IdeatexResult<ApiResponse<T>> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(&url).json(&body).send().await?;
        Self::decode(response).await
    }

    async fn get_envelope<T: DeserializeOwned>(&self, path: &str) -> IdeatexResult<ApiResponse<T>> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;
        Self::decode(response).await
    }

    /// The backend reports application failures as `{success:false, message}`
    /// with a non-2xx status; the message must survive decoding so it can be
    /// shown verbatim.
    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> IdeatexResult<ApiResponse<T>> {
        let status = response.status();
        let bytes = response.bytes().await?;

        match serde_json::from_slice::<ApiResponse<T>>(&bytes) {
            Ok(envelope) => Ok(envelope),
            Err(_) if !status.is_success() => Err(IdeatexError::RequestFailed(format!(
                "HTTP error: {}",
                status
            ))),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl RegistrationApi for RegistrationClient {
    async fn team_members(&self, team_id: &str) -> IdeatexResult<Vec<MemberRecord>> {
        let envelope: ApiResponse<MembersData> = self
            .post_envelope("/api/v1/team/members", json!({ "teamId": team_id }))
            .await?;
        Ok(envelope.into_data("Failed to fetch team members")?.members)
    }

    async fn user_profile(&self, user_id: &str) -> IdeatexResult<UserProfile> {
        let envelope: ApiResponse<UserData> = self
            .get_envelope(&format!("/api/v1/user/{}", user_id))
            .await?;
        Ok(envelope.into_data("Failed to fetch user profile")?.user)
    }

    async fn join_team(&self, team_code: &str) -> IdeatexResult<JoinTeamData> {
        let envelope: ApiResponse<JoinTeamData> = self
            .post_envelope("/api/v1/joinTeam", json!({ "teamCode": team_code }))
            .await?;
        envelope.into_data("Failed to join team")
    }

    async fn create_team(&self, team_name: &str) -> IdeatexResult<AddTeamData> {
        let envelope: ApiResponse<AddTeamData> = self
            .post_envelope("/api/v1/addTeam", json!({ "teamName": team_name }))
            .await?;
        envelope.into_data("Failed to create team")
    }

    async fn create_order(&self, team_id: &str, amount: u64) -> IdeatexResult<PaymentOrder> {
        let envelope: ApiResponse<PaymentOrder> = self
            .post_envelope(
                "/api/v1/payment/create-order",
                json!({ "teamId": team_id, "amount": amount }),
            )
            .await?;

        if !envelope.success {
            return Err(IdeatexError::OrderCreationFailed(
                envelope
                    .message
                    .unwrap_or_else(|| "Failed to create payment order".to_string()),
            ));
        }
        envelope.data.ok_or_else(|| {
            IdeatexError::OrderCreationFailed("Failed to create payment order".to_string())
        })
    }

    async fn verify_payment(
        &self,
        request: &VerificationRequest,
    ) -> IdeatexResult<VerificationOutcome> {
        let url = format!("{}/api/v1/payment/verify-payment", self.base_url);
        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        match serde_json::from_slice::<VerificationOutcome>(&bytes) {
            Ok(outcome) => Ok(outcome),
            Err(_) if !status.is_success() => Err(IdeatexError::RequestFailed(format!(
                "HTTP error: {}",
                status
            ))),
            Err(e) => Err(e.into()),
        }
    }
}
