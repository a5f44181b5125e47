use super::authorization::AuthorizationState;
use super::order::{Order, PaymentMethod};
use crate::error::Result;
use std::sync::Arc;

/// Tracks whether a secondary verification step has succeeded.
pub trait Authorizer: Send + Sync {
    /// Human-readable label of the verification channel, e.g. "SMS".
    fn channel(&self) -> &'static str;

    /// Accepts any code and marks the caller as authorized.
    fn verify_code(&self, code: &str);

    fn state(&self) -> AuthorizationState;

    fn is_authorized(&self) -> bool {
        self.state() == AuthorizationState::Authorized
    }
}

/// Attempts to move an [`Order`] to paid with one payment method.
///
/// On success the order is marked paid. On failure the order is left
/// untouched and the error is returned to the caller.
pub trait PaymentProcessor: Send + Sync {
    fn method(&self) -> PaymentMethod;

    fn pay(&self, order: &mut Order) -> Result<()>;
}

pub type AuthorizerHandle = Arc<dyn Authorizer>;
pub type PaymentProcessorBox = Box<dyn PaymentProcessor>;
