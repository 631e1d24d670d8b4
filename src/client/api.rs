use async_trait::async_trait;

use crate::error::IdeatexResult;
use crate::models::{
    AddTeamData, JoinTeamData, MemberRecord, PaymentOrder, UserProfile, VerificationOutcome,
    VerificationRequest,
};

/// Backend surface the dashboard and payment flow call through. Production
/// code uses [`crate::client::RegistrationClient`]; tests substitute fakes.
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    async fn team_members(&self, team_id: &str) -> IdeatexResult<Vec<MemberRecord>>;

    async fn user_profile(&self, user_id: &str) -> IdeatexResult<UserProfile>;

    async fn join_team(&self, team_code: &str) -> IdeatexResult<JoinTeamData>;

    async fn create_team(&self, team_name: &str) -> IdeatexResult<AddTeamData>;

    /// Create a payment order for `amount` minor units (paise).
    async fn create_order(&self, team_id: &str, amount: u64) -> IdeatexResult<PaymentOrder>;

    /// Submit the checkout proof for authoritative confirmation. Application
    /// failures come back as a `success:false` outcome, not an `Err`; only
    /// transport failures error.
    async fn verify_payment(
        &self,
        request: &VerificationRequest,
    ) -> IdeatexResult<VerificationOutcome>;
}
