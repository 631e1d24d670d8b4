pub mod hosted;

pub use hosted::HostedCheckout;

use async_trait::async_trait;

use crate::error::IdeatexResult;
use crate::models::CheckoutProof;

/// Prefill fields the checkout shows the payer.
#[derive(Debug, Clone, Default)]
pub struct Prefill {
    pub name: String,
    pub email: String,
    pub contact: String,
}

/// Everything the external checkout is opened with.
#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    pub key: String,
    pub amount: u64,
    pub currency: String,
    pub display_name: String,
    pub description: String,
    pub order_id: String,
    pub prefill: Prefill,
    pub theme_color: String,
}

/// One-shot result of a checkout attempt. The widget calls back exactly once;
/// cancelling or failing never reaches verification.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    Completed(CheckoutProof),
    Cancelled,
    Failed(String),
}

/// The external checkout capability. `ensure_ready` is the load step: it runs
/// once per process and its result sticks. `open` hands the order off to the
/// externally-controlled widget; completion arrives later, user-driven, as a
/// [`CheckoutOutcome`] fed back into the payment flow.
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn ensure_ready(&self) -> IdeatexResult<()>;

    async fn open(&self, request: &CheckoutRequest) -> IdeatexResult<()>;
}
