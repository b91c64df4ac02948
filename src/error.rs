use thiserror::Error;

/// Reasons a `PaymentRequestBuilder` refuses to build.
///
/// Checked in declaration order; the first failing rule wins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("amount must not be negative")]
    NegativeAmount,
    #[error("currency must not be empty")]
    EmptyCurrency,
    #[error("currency must be three uppercase letters, got '{0}'")]
    InvalidCurrencyFormat(String),
}

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("unsupported payment provider: {provider} (supported: {supported})")]
    UnsupportedProvider { provider: String, supported: String },
    #[error("invalid payment request: {0}")]
    Validation(#[from] ValidationError),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
