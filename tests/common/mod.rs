#![allow(dead_code)]

use solid_payments::domain::order::Order;
use solid_payments::domain::ports::AuthorizerHandle;
use solid_payments::infrastructure::authorizers::{GoogleAuthorizer, SmsAuthorizer};
use std::sync::Arc;

pub const SECURITY_CODE: &str = "1234567";
pub const PAYPAL_EMAIL: &str = "payment@example.com";

pub fn valid_order() -> Order {
    Order::with_items(
        vec!["Keyboard".to_string(), "Monitor".to_string()],
        vec![1, 2],
        vec![50, 65],
    )
    .expect("parallel sequences have equal length")
}

pub fn empty_order() -> Order {
    Order::new()
}

/// One fresh, unverified authorizer of each variant.
pub fn authorizers() -> Vec<AuthorizerHandle> {
    vec![
        Arc::new(SmsAuthorizer::new()),
        Arc::new(GoogleAuthorizer::new()),
    ]
}
