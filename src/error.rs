use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdeatexError {
    #[error("Access token not found. Please run 'ideatex auth' to configure.")]
    TokenNotFound,

    #[error("No team selected. Create or join a team before paying.")]
    MissingTeamContext,

    #[error("Failed to load payment gateway. Try again later.")]
    GatewayUnavailable,

    #[error("{0}")]
    OrderCreationFailed(String),

    #[error("{0}")]
    VerificationFailed(String),

    #[error("{0}")]
    RequestFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type IdeatexResult<T> = Result<T, IdeatexError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> IdeatexResult<T>;
    fn with_context<F>(self, f: F) -> IdeatexResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> IdeatexResult<T> {
        self.map_err(|e| IdeatexError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> IdeatexResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| IdeatexError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> IdeatexResult<T> {
        self.ok_or_else(|| IdeatexError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> IdeatexResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| IdeatexError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! ideatex_error {
    ($error_type:ident, $msg:expr) => {
        IdeatexError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        IdeatexError::$error_type(format!($fmt, $($arg)*))
    };
}
