use crate::domain::status::PaymentStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    ConfigError(#[from] toml::de::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Unknown payment {0}")]
    UnknownPayment(u32),
    #[error("Duplicate payment {0}")]
    DuplicatePayment(u32),
    #[error("Payment {payment} cannot move from {from} to {to}")]
    InvalidTransition {
        payment: u32,
        from: PaymentStatus,
        to: PaymentStatus,
    },
}

pub type Result<T> = std::result::Result<T, PaymentError>;
