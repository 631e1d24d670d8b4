use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;
use tempfile::TempDir;

use crate::checkout::{CheckoutRequest, Gateway};
use crate::client::RegistrationApi;
use crate::config::{save_config_to, Config};
use crate::error::{IdeatexError, IdeatexResult};
use crate::models::{
    api::{AddTeamData, CreatedTeam, JoinTeamData, TeamRef},
    MemberRecord, PaymentOrder, UserProfile, VerificationOutcome, VerificationRequest,
};
use crate::session::Session;

/// In-memory backend double. Canned responses per endpoint, plus a call log
/// so tests can assert which requests went out (and which never did).
#[derive(Clone, Default)]
pub struct StubApi {
    inner: Arc<StubApiInner>,
}

#[derive(Default)]
struct StubApiInner {
    calls: Mutex<Vec<String>>,
    members: Mutex<Option<Result<Vec<MemberRecord>, String>>>,
    profiles: Mutex<HashMap<String, UserProfile>>,
    failing_profiles: Mutex<HashSet<String>>,
    join: Mutex<Option<Result<JoinTeamData, String>>>,
    create: Mutex<Option<Result<AddTeamData, String>>>,
    order: Mutex<Option<Result<PaymentOrder, String>>>,
    verify: Mutex<Option<VerifyBehavior>>,
    verify_requests: Mutex<Vec<VerificationRequest>>,
}

#[derive(Clone)]
pub enum VerifyBehavior {
    Respond(VerificationOutcome),
    TransportError,
}

impl StubApi {
    pub fn calls(&self) -> Vec<String> {
        self.inner.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, name: &str) -> usize {
        self.inner
            .calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.as_str() == name)
            .count()
    }

    pub fn verify_requests(&self) -> Vec<VerificationRequest> {
        self.inner.verify_requests.lock().unwrap().clone()
    }

    pub fn with_members(self, members: Vec<MemberRecord>) -> Self {
        *self.inner.members.lock().unwrap() = Some(Ok(members));
        self
    }

    pub fn with_members_error(self, message: &str) -> Self {
        *self.inner.members.lock().unwrap() = Some(Err(message.to_string()));
        self
    }

    pub fn with_profile(self, user_id: &str, profile: UserProfile) -> Self {
        self.inner
            .profiles
            .lock()
            .unwrap()
            .insert(user_id.to_string(), profile);
        self
    }

    pub fn with_failing_profile(self, user_id: &str) -> Self {
        self.inner
            .failing_profiles
            .lock()
            .unwrap()
            .insert(user_id.to_string());
        self
    }

    pub fn with_join(self, team_id: &str, user_id: &str) -> Self {
        *self.inner.join.lock().unwrap() = Some(Ok(JoinTeamData {
            team: TeamRef {
                id: team_id.to_string(),
            },
            user_id: user_id.to_string(),
        }));
        self
    }

    pub fn with_join_error(self, message: &str) -> Self {
        *self.inner.join.lock().unwrap() = Some(Err(message.to_string()));
        self
    }

    pub fn with_create(self, team_id: &str, leader_id: &str) -> Self {
        *self.inner.create.lock().unwrap() = Some(Ok(AddTeamData {
            team: CreatedTeam {
                id: team_id.to_string(),
                leader_id: Some(leader_id.to_string()),
            },
        }));
        self
    }

    pub fn with_create_error(self, message: &str) -> Self {
        *self.inner.create.lock().unwrap() = Some(Err(message.to_string()));
        self
    }

    pub fn with_order(self, order: PaymentOrder) -> Self {
        *self.inner.order.lock().unwrap() = Some(Ok(order));
        self
    }

    pub fn with_order_error(self, message: &str) -> Self {
        *self.inner.order.lock().unwrap() = Some(Err(message.to_string()));
        self
    }

    pub fn with_verify(self, behavior: VerifyBehavior) -> Self {
        *self.inner.verify.lock().unwrap() = Some(behavior);
        self
    }

    fn record(&self, name: &str) {
        self.inner.calls.lock().unwrap().push(name.to_string());
    }
}

#[async_trait]
impl RegistrationApi for StubApi {
    async fn team_members(&self, _team_id: &str) -> IdeatexResult<Vec<MemberRecord>> {
        self.record("team_members");
        match self.inner.members.lock().unwrap().clone() {
            Some(Ok(members)) => Ok(members),
            Some(Err(message)) => Err(IdeatexError::RequestFailed(message)),
            None => Ok(Vec::new()),
        }
    }

    async fn user_profile(&self, user_id: &str) -> IdeatexResult<UserProfile> {
        self.record("user_profile");
        if self.inner.failing_profiles.lock().unwrap().contains(user_id) {
            return Err(IdeatexError::RequestFailed("profile unavailable".to_string()));
        }
        self.inner
            .profiles
            .lock()
            .unwrap()
            .get(user_id)
            .cloned()
            .ok_or_else(|| IdeatexError::RequestFailed("no such user".to_string()))
    }

    async fn join_team(&self, _team_code: &str) -> IdeatexResult<JoinTeamData> {
        self.record("join_team");
        match self.inner.join.lock().unwrap().clone() {
            Some(Ok(data)) => Ok(data),
            Some(Err(message)) => Err(IdeatexError::RequestFailed(message)),
            None => Err(IdeatexError::RequestFailed("join not stubbed".to_string())),
        }
    }

    async fn create_team(&self, _team_name: &str) -> IdeatexResult<AddTeamData> {
        self.record("create_team");
        match self.inner.create.lock().unwrap().clone() {
            Some(Ok(data)) => Ok(data),
            Some(Err(message)) => Err(IdeatexError::RequestFailed(message)),
            None => Err(IdeatexError::RequestFailed("create not stubbed".to_string())),
        }
    }

    async fn create_order(&self, _team_id: &str, _amount: u64) -> IdeatexResult<PaymentOrder> {
        self.record("create_order");
        match self.inner.order.lock().unwrap().clone() {
            Some(Ok(order)) => Ok(order),
            Some(Err(message)) => Err(IdeatexError::OrderCreationFailed(message)),
            None => Err(IdeatexError::OrderCreationFailed(
                "order not stubbed".to_string(),
            )),
        }
    }

    async fn verify_payment(
        &self,
        request: &VerificationRequest,
    ) -> IdeatexResult<VerificationOutcome> {
        self.record("verify_payment");
        self.inner
            .verify_requests
            .lock()
            .unwrap()
            .push(request.clone());
        match self.inner.verify.lock().unwrap().clone() {
            Some(VerifyBehavior::Respond(outcome)) => Ok(outcome),
            Some(VerifyBehavior::TransportError) => Err(IdeatexError::RequestFailed(
                "connection reset by peer".to_string(),
            )),
            None => Err(IdeatexError::RequestFailed("verify not stubbed".to_string())),
        }
    }
}

/// Gateway double: readiness is configurable, opens are recorded.
#[derive(Default)]
pub struct StubGateway {
    fail_ready: AtomicBool,
    open_calls: Mutex<Vec<CheckoutRequest>>,
}

impl StubGateway {
    pub fn unavailable() -> Self {
        let gateway = Self::default();
        gateway.fail_ready.store(true, Ordering::Relaxed);
        gateway
    }

    pub fn open_calls(&self) -> Vec<CheckoutRequest> {
        self.open_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Gateway for StubGateway {
    async fn ensure_ready(&self) -> IdeatexResult<()> {
        if self.fail_ready.load(Ordering::Relaxed) {
            Err(IdeatexError::GatewayUnavailable)
        } else {
            Ok(())
        }
    }

    async fn open(&self, request: &CheckoutRequest) -> IdeatexResult<()> {
        self.open_calls.lock().unwrap().push(request.clone());
        Ok(())
    }
}

/// Session backed by a throwaway config file. Keep the TempDir alive for the
/// duration of the test.
pub fn temp_session(team_id: Option<&str>) -> (TempDir, Session) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    let config = Config {
        api_base: None,
        token: Some("token-123".to_string()),
        team_id: team_id.map(|s| s.to_string()),
        user_id: Some("user-1".to_string()),
    };
    save_config_to(&config, &path).expect("seed config");
    (dir, Session::load_from(path))
}

/// Session with no token at all.
pub fn unauthenticated_session() -> (TempDir, Session) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    (dir, Session::load_from(path))
}

pub fn member_record(id: &str, user_id: &str, role: &str, pending: bool) -> MemberRecord {
    MemberRecord {
        id: id.to_string(),
        user_id: user_id.to_string(),
        role: role.to_string(),
        team_id: Some("team-1".to_string()),
        team_name: Some("Rustaceans".to_string()),
        team_code: Some("QWERTY".to_string()),
        is_pending_payment: pending,
    }
}

pub fn profile(name: &str) -> UserProfile {
    UserProfile {
        name: Some(name.to_string()),
        phone: Some("9000000001".to_string()),
        lib_id: Some("LIB-1".to_string()),
        gender: Some("M".to_string()),
        email: Some(format!("{}@example.com", name.to_lowercase())),
        roll_no: Some("2100290".to_string()),
        college: Some("KIET".to_string()),
    }
}

pub fn order(amount: u64) -> PaymentOrder {
    PaymentOrder {
        order_id: Some("ord_internal_1".to_string()),
        razorpay_order_id: "order_rzp_1".to_string(),
        amount,
        currency: None,
        key: "rzp_test_key".to_string(),
    }
}

pub fn verified_outcome(team_id: &str, leader_id: &str) -> VerificationOutcome {
    VerificationOutcome {
        success: true,
        message: None,
        data: Some(json!({
            "team": { "_id": team_id, "leaderId": leader_id }
        })),
    }
}
