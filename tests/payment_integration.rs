// End-to-end exercise of the payment workflow against in-memory doubles:
// order creation, checkout hand-off, verification, and session update.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use ideatex_cli::checkout::{CheckoutOutcome, CheckoutRequest, Gateway, Prefill};
use ideatex_cli::config::{save_config_to, Config};
use ideatex_cli::error::{IdeatexError, IdeatexResult};
use ideatex_cli::models::api::{AddTeamData, JoinTeamData};
use ideatex_cli::models::{
    CheckoutProof, MemberRecord, PaymentOrder, UserProfile, VerificationOutcome,
    VerificationRequest,
};
use ideatex_cli::payment::{apply_confirmation, PaymentFlow};
use ideatex_cli::{RegistrationApi, Session};

#[derive(Clone, Default)]
struct FakeBackend;

#[async_trait]
impl RegistrationApi for FakeBackend {
    async fn team_members(&self, _team_id: &str) -> IdeatexResult<Vec<MemberRecord>> {
        Ok(Vec::new())
    }

    async fn user_profile(&self, _user_id: &str) -> IdeatexResult<UserProfile> {
        Ok(UserProfile::default())
    }

    async fn join_team(&self, _team_code: &str) -> IdeatexResult<JoinTeamData> {
        Err(IdeatexError::RequestFailed("not under test".to_string()))
    }

    async fn create_team(&self, _team_name: &str) -> IdeatexResult<AddTeamData> {
        Err(IdeatexError::RequestFailed("not under test".to_string()))
    }

    async fn create_order(&self, team_id: &str, amount: u64) -> IdeatexResult<PaymentOrder> {
        assert_eq!(team_id, "team-1");
        assert_eq!(amount, 10000);
        Ok(PaymentOrder {
            order_id: Some("ord_1".to_string()),
            razorpay_order_id: "order_rzp_1".to_string(),
            amount,
            currency: Some("INR".to_string()),
            key: "rzp_test_key".to_string(),
        })
    }

    async fn verify_payment(
        &self,
        request: &VerificationRequest,
    ) -> IdeatexResult<VerificationOutcome> {
        assert_eq!(request.order_id, "ord_1");
        assert_eq!(request.razorpay_payment_id, "pay_777");
        Ok(VerificationOutcome {
            success: true,
            message: None,
            data: Some(json!({
                "team": { "_id": "team-1", "leaderId": "leader-1" }
            })),
        })
    }
}

#[derive(Default)]
struct RecordingGateway {
    opened: Mutex<Vec<CheckoutRequest>>,
}

#[async_trait]
impl Gateway for RecordingGateway {
    async fn ensure_ready(&self) -> IdeatexResult<()> {
        Ok(())
    }

    async fn open(&self, request: &CheckoutRequest) -> IdeatexResult<()> {
        self.opened.lock().unwrap().push(request.clone());
        Ok(())
    }
}

#[tokio::test]
async fn full_payment_workflow_updates_the_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    save_config_to(
        &Config {
            api_base: None,
            token: Some("tkn".to_string()),
            team_id: Some("team-1".to_string()),
            user_id: None,
        },
        &path,
    )
    .expect("seed config");
    let mut session = Session::load_from(path.clone());

    let api = FakeBackend;
    let gateway = RecordingGateway::default();
    let flow = PaymentFlow::new(&api, &gateway, &session);

    let pending = flow
        .begin("Rustaceans", 10000, Prefill::default())
        .await
        .expect("order created and checkout opened");

    assert_eq!(gateway.opened.lock().unwrap().len(), 1);
    assert_eq!(
        gateway.opened.lock().unwrap()[0].description,
        "Team registration - Rustaceans"
    );

    let confirmation = flow
        .resolve(
            &pending,
            CheckoutOutcome::Completed(CheckoutProof {
                razorpay_payment_id: "pay_777".to_string(),
                razorpay_order_id: "order_rzp_1".to_string(),
                razorpay_signature: "sig_777".to_string(),
            }),
        )
        .await
        .expect("verification succeeds")
        .expect("confirmation present");

    assert!(confirmation.payment_verified);
    assert_eq!(confirmation.transaction_id, "pay_777");

    apply_confirmation(&mut session, &confirmation).expect("session updated");

    let reloaded = Session::load_from(path);
    assert_eq!(reloaded.team_id(), Some("team-1"));
    assert_eq!(reloaded.user_id(), Some("leader-1"));
}
