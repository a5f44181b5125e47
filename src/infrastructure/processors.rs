use crate::domain::order::{Order, PaymentMethod};
use crate::domain::ports::{AuthorizerHandle, PaymentProcessor};
use crate::error::{PaymentError, Result};

fn ensure_authorized(authorizer: &AuthorizerHandle) -> Result<()> {
    if authorizer.is_authorized() {
        Ok(())
    } else {
        Err(PaymentError::NotAuthorized)
    }
}

/// Processes payments with debit cards. Requires a verified authorizer.
pub struct DebitPaymentProcessor {
    security_code: String,
    authorizer: AuthorizerHandle,
}

impl DebitPaymentProcessor {
    pub fn new(security_code: impl Into<String>, authorizer: AuthorizerHandle) -> Self {
        Self {
            security_code: security_code.into(),
            authorizer,
        }
    }

    pub fn authorizer(&self) -> &AuthorizerHandle {
        &self.authorizer
    }
}

impl PaymentProcessor for DebitPaymentProcessor {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Debit
    }

    fn pay(&self, order: &mut Order) -> Result<()> {
        ensure_authorized(&self.authorizer)?;
        tracing::info!("Processing debit payment type");
        tracing::debug!(security_code = %self.security_code, "Verifying security code");
        order.mark_paid();
        Ok(())
    }
}

/// Processes payments with credit cards. Needs no second factor.
pub struct CreditPaymentProcessor {
    security_code: String,
}

impl CreditPaymentProcessor {
    pub fn new(security_code: impl Into<String>) -> Self {
        Self {
            security_code: security_code.into(),
        }
    }
}

impl PaymentProcessor for CreditPaymentProcessor {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Credit
    }

    fn pay(&self, order: &mut Order) -> Result<()> {
        tracing::info!("Processing credit payment type");
        tracing::debug!(security_code = %self.security_code, "Verifying security code");
        order.mark_paid();
        Ok(())
    }
}

/// Processes payments with a PayPal account. Requires a verified authorizer.
pub struct PaypalPaymentProcessor {
    email_address: String,
    authorizer: AuthorizerHandle,
}

impl PaypalPaymentProcessor {
    pub fn new(email_address: impl Into<String>, authorizer: AuthorizerHandle) -> Self {
        Self {
            email_address: email_address.into(),
            authorizer,
        }
    }

    pub fn authorizer(&self) -> &AuthorizerHandle {
        &self.authorizer
    }
}

impl PaymentProcessor for PaypalPaymentProcessor {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Paypal
    }

    fn pay(&self, order: &mut Order) -> Result<()> {
        ensure_authorized(&self.authorizer)?;
        tracing::info!("Processing paypal payment type");
        tracing::debug!(email_address = %self.email_address, "Using email address");
        order.mark_paid();
        Ok(())
    }
}
