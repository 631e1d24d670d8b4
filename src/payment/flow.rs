use crate::checkout::{CheckoutOutcome, CheckoutRequest, Gateway, Prefill};
use crate::client::RegistrationApi;
use crate::constants::{checkout_description, CHECKOUT_DISPLAY_NAME, CHECKOUT_THEME_COLOR};
use crate::error::{IdeatexError, IdeatexResult};
use crate::models::{PaymentConfirmation, PaymentOrder, VerificationRequest};
use crate::session::Session;

/// One payment attempt in flight: the order has been created and the checkout
/// opened; verification is waiting on the widget's completion.
#[derive(Debug, Clone)]
pub struct PendingPayment {
    pub order: PaymentOrder,
    pub team_name: String,
}

/// Drives a single payment attempt to completion or to a reported failure.
/// No retries; a failed attempt is restarted only by the user invoking pay
/// again.
pub struct PaymentFlow<'a, C, G> {
    api: &'a C,
    gateway: &'a G,
    session: &'a Session,
}

impl<'a, C, G> PaymentFlow<'a, C, G>
where
    C: RegistrationApi,
    G: Gateway,
{
    pub fn new(api: &'a C, gateway: &'a G, session: &'a Session) -> Self {
        Self {
            api,
            gateway,
            session,
        }
    }

    /// Steps 1-3: precondition checks, gateway readiness, order creation, and
    /// opening the external checkout. Fails before any backend call when no
    /// team id is stored.
    pub async fn begin(
        &self,
        team_name: &str,
        amount_minor: u64,
        prefill: Prefill,
    ) -> IdeatexResult<PendingPayment> {
        if team_name.trim().is_empty() {
            return Err(IdeatexError::InvalidInput(
                "Please provide a team name before proceeding.".to_string(),
            ));
        }
        let team_id = self.session.require_team()?.to_string();

        self.gateway.ensure_ready().await?;

        let order = self.api.create_order(&team_id, amount_minor).await?;

        let request = CheckoutRequest {
            key: order.key.clone(),
            amount: order.amount,
            currency: order.currency.clone().unwrap_or_else(|| "INR".to_string()),
            display_name: CHECKOUT_DISPLAY_NAME.to_string(),
            description: checkout_description(team_name),
            order_id: order.razorpay_order_id.clone(),
            prefill,
            theme_color: CHECKOUT_THEME_COLOR.to_string(),
        };
        self.gateway.open(&request).await?;

        Ok(PendingPayment {
            order,
            team_name: team_name.to_string(),
        })
    }

    /// Steps 4-5: the widget completed (or didn't); verify server-side and
    /// build the normalized confirmation. `Ok(None)` means the user cancelled
    /// and nothing was verified.
    pub async fn resolve(
        &self,
        pending: &PendingPayment,
        outcome: CheckoutOutcome,
    ) -> IdeatexResult<Option<PaymentConfirmation>> {
        let proof = match outcome {
            CheckoutOutcome::Completed(proof) => proof,
            CheckoutOutcome::Cancelled => return Ok(None),
            CheckoutOutcome::Failed(reason) => {
                return Err(IdeatexError::RequestFailed(reason));
            }
        };

        let request = VerificationRequest {
            order_id: pending.order.internal_id().to_string(),
            razorpay_order_id: proof.razorpay_order_id.clone(),
            razorpay_payment_id: proof.razorpay_payment_id.clone(),
            razorpay_signature: proof.razorpay_signature.clone(),
        };

        let response = self
            .api
            .verify_payment(&request)
            .await
            .map_err(|_| IdeatexError::VerificationFailed("Payment verification failed".to_string()))?;

        if !response.success {
            return Err(IdeatexError::VerificationFailed(
                response
                    .message
                    .unwrap_or_else(|| "Payment verification failed".to_string()),
            ));
        }

        Ok(Some(PaymentConfirmation {
            transaction_id: proof.razorpay_payment_id,
            team_name: pending.team_name.clone(),
            payment_verified: true,
            backend_response: response,
        }))
    }
}
