use crate::error::{ErrorContext, IdeatexError};
use crate::ideatex_error;

#[test]
fn test_error_context_on_result() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "file not found",
    ));

    let ideatex_result = result.context("Failed to read config file");
    assert!(ideatex_result.is_err());

    match ideatex_result {
        Err(IdeatexError::Unknown(msg)) => {
            assert!(msg.contains("Failed to read config file"));
            assert!(msg.contains("file not found"));
        }
        _ => panic!("Expected IdeatexError::Unknown"),
    }
}

#[test]
fn test_error_context_on_option() {
    let option: Option<String> = None;
    let result = option.context("Access token not found");

    assert!(result.is_err());
    match result {
        Err(IdeatexError::Unknown(msg)) => {
            assert_eq!(msg, "Access token not found");
        }
        _ => panic!("Expected IdeatexError::Unknown"),
    }
}

#[test]
fn test_error_context_with_closure() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "access denied",
    ));

    let ideatex_result =
        result.with_context(|| format!("Failed to access file at path: {}", "/tmp/test.txt"));

    assert!(ideatex_result.is_err());
    match ideatex_result {
        Err(IdeatexError::Unknown(msg)) => {
            assert!(msg.contains("Failed to access file at path: /tmp/test.txt"));
            assert!(msg.contains("access denied"));
        }
        _ => panic!("Expected IdeatexError::Unknown"),
    }
}

#[test]
fn test_ideatex_error_macro() {
    let error = ideatex_error!(RequestFailed, "Request failed");
    match error {
        IdeatexError::RequestFailed(msg) => assert_eq!(msg, "Request failed"),
        _ => panic!("Expected IdeatexError::RequestFailed"),
    }

    let error = ideatex_error!(InvalidInput, "Invalid code: {}", "AB");
    match error {
        IdeatexError::InvalidInput(msg) => assert_eq!(msg, "Invalid code: AB"),
        _ => panic!("Expected IdeatexError::InvalidInput"),
    }
}

#[test]
fn user_facing_messages_are_stable() {
    assert_eq!(
        IdeatexError::GatewayUnavailable.to_string(),
        "Failed to load payment gateway. Try again later."
    );
    assert_eq!(
        IdeatexError::VerificationFailed("Payment verification failed".to_string()).to_string(),
        "Payment verification failed"
    );
}
