pub mod flow;

pub use flow::{PaymentFlow, PendingPayment};

use crate::error::{IdeatexError, IdeatexResult};
use crate::models::PaymentConfirmation;
use crate::session::Session;

/// Persist the identifiers a verified payment hands back, then let the caller
/// re-fetch membership as the source of truth. Only acts on a confirmation
/// that is both gateway-verified and server-acknowledged.
pub fn apply_confirmation(
    session: &mut Session,
    confirmation: &PaymentConfirmation,
) -> IdeatexResult<()> {
    if !(confirmation.payment_verified && confirmation.backend_response.success) {
        return Err(IdeatexError::RequestFailed(
            confirmation
                .backend_response
                .message
                .clone()
                .unwrap_or_else(|| "Failed to create team".to_string()),
        ));
    }

    let team_id = confirmation.backend_response.team_id();
    let leader_id = confirmation.backend_response.leader_id();
    session.set_team(team_id, leader_id)?;
    Ok(())
}
