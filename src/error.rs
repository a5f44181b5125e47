use crate::domain::order::PaymentMethod;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Not authorized")]
    NotAuthorized,
    #[error("{method} payments do not support {channel} code authorization")]
    UnsupportedAuthorizationMethod {
        method: PaymentMethod,
        channel: &'static str,
    },
    #[error("unknown payment type: {0}")]
    UnknownPaymentType(String),
    #[error(
        "line item sequences differ in length: {items} items, {quantities} quantities, {prices} prices"
    )]
    MismatchedLineItems {
        items: usize,
        quantities: usize,
        prices: usize,
    },
    #[error("{0} payments require an authorizer")]
    MissingAuthorizer(PaymentMethod),
    #[error("Invalid line item: {0}")]
    InvalidLineItem(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
