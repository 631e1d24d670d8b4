use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Server-issued order pair plus the credential the checkout needs.
/// Created per payment attempt and consumed exactly once.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOrder {
    pub order_id: Option<String>,
    pub razorpay_order_id: String,
    pub amount: u64,
    pub currency: Option<String>,
    pub key: String,
}

impl PaymentOrder {
    /// The internal order id, falling back to the gateway order id the way
    /// the backend accepts either.
    pub fn internal_id(&self) -> &str {
        self.order_id.as_deref().unwrap_or(&self.razorpay_order_id)
    }
}

/// Proof artifact the checkout hands back on completion.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutProof {
    pub razorpay_payment_id: String,
    pub razorpay_order_id: String,
    pub razorpay_signature: String,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    pub order_id: String,
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
}

/// The verify-payment envelope, kept loose: the team payload's key names
/// vary, so extraction goes through the fallback helpers below.
#[derive(Debug, Deserialize, Clone)]
pub struct VerificationOutcome {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

impl VerificationOutcome {
    pub fn team(&self) -> Option<&Value> {
        self.data.as_ref().and_then(|d| d.get("team"))
    }

    pub fn team_id(&self) -> Option<String> {
        let team = self.team()?;
        string_at(team, &["_id", "teamId", "id"])
    }

    pub fn leader_id(&self) -> Option<String> {
        let team = self.team()?;
        string_at(team, &["leaderId", "leader"])
    }
}

fn string_at(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| value.get(k))
        .find_map(|v| v.as_str().map(|s| s.to_string()))
}

/// Normalized result handed to the dashboard once verification succeeds.
#[derive(Debug, Clone)]
pub struct PaymentConfirmation {
    pub transaction_id: String,
    pub team_name: String,
    pub payment_verified: bool,
    pub backend_response: VerificationOutcome,
}
