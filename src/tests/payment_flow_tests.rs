use crate::checkout::{CheckoutOutcome, Prefill};
use crate::error::IdeatexError;
use crate::models::{CheckoutProof, VerificationOutcome};
use crate::payment::PaymentFlow;
use crate::tests::support::{order, temp_session, verified_outcome, StubApi, StubGateway, VerifyBehavior};

fn proof() -> CheckoutProof {
    CheckoutProof {
        razorpay_payment_id: "pay_ABC123".to_string(),
        razorpay_order_id: "order_rzp_1".to_string(),
        razorpay_signature: "sig_deadbeef".to_string(),
    }
}

#[tokio::test]
async fn missing_team_id_fails_without_any_network_call() {
    let (_dir, session) = temp_session(None);
    let api = StubApi::default().with_order(order(10000));
    let gateway = StubGateway::default();
    let flow = PaymentFlow::new(&api, &gateway, &session);

    let result = flow.begin("Alpha", 10000, Prefill::default()).await;

    assert!(matches!(result, Err(IdeatexError::MissingTeamContext)));
    assert!(api.calls().is_empty());
    assert!(gateway.open_calls().is_empty());
}

#[tokio::test]
async fn empty_team_name_fails_before_preconditions() {
    let (_dir, session) = temp_session(Some("team-1"));
    let api = StubApi::default();
    let gateway = StubGateway::default();
    let flow = PaymentFlow::new(&api, &gateway, &session);

    let result = flow.begin("   ", 10000, Prefill::default()).await;

    assert!(matches!(result, Err(IdeatexError::InvalidInput(_))));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn gateway_load_failure_aborts_before_order_creation() {
    let (_dir, session) = temp_session(Some("team-1"));
    let api = StubApi::default().with_order(order(10000));
    let gateway = StubGateway::unavailable();
    let flow = PaymentFlow::new(&api, &gateway, &session);

    let result = flow.begin("Alpha", 10000, Prefill::default()).await;

    assert!(matches!(result, Err(IdeatexError::GatewayUnavailable)));
    assert_eq!(api.call_count("create_order"), 0);
}

#[tokio::test]
async fn order_failure_surfaces_server_message_and_never_opens_checkout() {
    let (_dir, session) = temp_session(Some("team-1"));
    let api = StubApi::default().with_order_error("Registration window closed");
    let gateway = StubGateway::default();
    let flow = PaymentFlow::new(&api, &gateway, &session);

    let result = flow.begin("Alpha", 10000, Prefill::default()).await;

    match result {
        Err(IdeatexError::OrderCreationFailed(message)) => {
            assert_eq!(message, "Registration window closed");
        }
        other => panic!("expected OrderCreationFailed, got {:?}", other.map(|_| ())),
    }
    assert!(gateway.open_calls().is_empty());
}

#[tokio::test]
async fn begin_opens_checkout_with_order_credentials() {
    let (_dir, session) = temp_session(Some("team-1"));
    let api = StubApi::default().with_order(order(10000));
    let gateway = StubGateway::default();
    let flow = PaymentFlow::new(&api, &gateway, &session);

    let pending = flow
        .begin("Alpha", 10000, Prefill::default())
        .await
        .expect("begin succeeds");

    let opens = gateway.open_calls();
    assert_eq!(opens.len(), 1);
    assert_eq!(opens[0].key, "rzp_test_key");
    assert_eq!(opens[0].order_id, "order_rzp_1");
    assert_eq!(opens[0].currency, "INR");
    assert_eq!(opens[0].description, "Team registration - Alpha");
    assert_eq!(pending.team_name, "Alpha");
}

#[tokio::test]
async fn verification_success_yields_confirmation_with_gateway_payment_id() {
    let (_dir, session) = temp_session(Some("team-1"));
    let api = StubApi::default()
        .with_order(order(10000))
        .with_verify(VerifyBehavior::Respond(verified_outcome("team-1", "user-1")));
    let gateway = StubGateway::default();
    let flow = PaymentFlow::new(&api, &gateway, &session);

    let pending = flow
        .begin("Alpha", 10000, Prefill::default())
        .await
        .expect("begin succeeds");
    let confirmation = flow
        .resolve(&pending, CheckoutOutcome::Completed(proof()))
        .await
        .expect("resolve succeeds")
        .expect("confirmation present");

    assert!(confirmation.payment_verified);
    assert_eq!(confirmation.transaction_id, "pay_ABC123");
    assert_eq!(confirmation.team_name, "Alpha");
    assert!(confirmation.backend_response.success);

    // The internal order id goes out, not the gateway one.
    let requests = api.verify_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].order_id, "ord_internal_1");
    assert_eq!(requests[0].razorpay_payment_id, "pay_ABC123");
    assert_eq!(requests[0].razorpay_signature, "sig_deadbeef");
}

#[tokio::test]
async fn verification_transport_error_reads_payment_verification_failed() {
    let (_dir, session) = temp_session(Some("team-1"));
    let api = StubApi::default()
        .with_order(order(10000))
        .with_verify(VerifyBehavior::TransportError);
    let gateway = StubGateway::default();
    let flow = PaymentFlow::new(&api, &gateway, &session);

    let pending = flow
        .begin("Alpha", 10000, Prefill::default())
        .await
        .expect("begin succeeds");
    let result = flow
        .resolve(&pending, CheckoutOutcome::Completed(proof()))
        .await;

    match result {
        Err(e @ IdeatexError::VerificationFailed(_)) => {
            assert_eq!(e.to_string(), "Payment verification failed");
        }
        other => panic!("expected VerificationFailed, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn verification_rejection_passes_server_message_through() {
    let (_dir, session) = temp_session(Some("team-1"));
    let api = StubApi::default()
        .with_order(order(10000))
        .with_verify(VerifyBehavior::Respond(VerificationOutcome {
            success: false,
            message: Some("Signature mismatch".to_string()),
            data: None,
        }));
    let gateway = StubGateway::default();
    let flow = PaymentFlow::new(&api, &gateway, &session);

    let pending = flow
        .begin("Alpha", 10000, Prefill::default())
        .await
        .expect("begin succeeds");
    let result = flow
        .resolve(&pending, CheckoutOutcome::Completed(proof()))
        .await;

    match result {
        Err(IdeatexError::VerificationFailed(message)) => {
            assert_eq!(message, "Signature mismatch");
        }
        other => panic!("expected VerificationFailed, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn cancelled_checkout_skips_verification() {
    let (_dir, session) = temp_session(Some("team-1"));
    let api = StubApi::default().with_order(order(10000));
    let gateway = StubGateway::default();
    let flow = PaymentFlow::new(&api, &gateway, &session);

    let pending = flow
        .begin("Alpha", 10000, Prefill::default())
        .await
        .expect("begin succeeds");
    let result = flow
        .resolve(&pending, CheckoutOutcome::Cancelled)
        .await
        .expect("resolve succeeds");

    assert!(result.is_none());
    assert_eq!(api.call_count("verify_payment"), 0);
}
