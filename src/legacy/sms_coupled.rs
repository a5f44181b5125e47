//! Payment processors that all carry an SMS verification method.
//!
//! Credit cards have no SMS step, yet the trait makes them implement one that
//! can only fail. Since `pay` still checks the verified flag, a credit
//! processor built this way can never pay. Injecting an
//! [`crate::domain::ports::Authorizer`] only where it is needed removes both
//! problems.

use crate::domain::order::{Order, PaymentMethod};
use crate::error::{PaymentError, Result};

pub trait SmsPaymentProcessor {
    fn auth_sms(&mut self, code: &str) -> Result<()>;

    fn pay(&self, order: &mut Order) -> Result<()>;
}

fn ensure_verified(verified: bool) -> Result<()> {
    if verified {
        Ok(())
    } else {
        Err(PaymentError::NotAuthorized)
    }
}

#[derive(Debug)]
pub struct SmsDebitProcessor {
    security_code: String,
    verified: bool,
}

impl SmsDebitProcessor {
    pub fn new(security_code: impl Into<String>) -> Self {
        Self {
            security_code: security_code.into(),
            verified: false,
        }
    }
}

impl SmsPaymentProcessor for SmsDebitProcessor {
    fn auth_sms(&mut self, code: &str) -> Result<()> {
        tracing::info!(code, "Verifying SMS code");
        self.verified = true;
        Ok(())
    }

    fn pay(&self, order: &mut Order) -> Result<()> {
        ensure_verified(self.verified)?;
        tracing::debug!(security_code = %self.security_code, "Processing debit payment type");
        order.mark_paid();
        Ok(())
    }
}

#[derive(Debug)]
pub struct SmsCreditProcessor {
    security_code: String,
    verified: bool,
}

impl SmsCreditProcessor {
    pub fn new(security_code: impl Into<String>) -> Self {
        Self {
            security_code: security_code.into(),
            verified: false,
        }
    }
}

impl SmsPaymentProcessor for SmsCreditProcessor {
    fn auth_sms(&mut self, _code: &str) -> Result<()> {
        Err(PaymentError::UnsupportedAuthorizationMethod {
            method: PaymentMethod::Credit,
            channel: "SMS",
        })
    }

    fn pay(&self, order: &mut Order) -> Result<()> {
        ensure_verified(self.verified)?;
        tracing::debug!(security_code = %self.security_code, "Processing credit payment type");
        order.mark_paid();
        Ok(())
    }
}

#[derive(Debug)]
pub struct SmsPaypalProcessor {
    email_address: String,
    verified: bool,
}

impl SmsPaypalProcessor {
    pub fn new(email_address: impl Into<String>) -> Self {
        Self {
            email_address: email_address.into(),
            verified: false,
        }
    }
}

impl SmsPaymentProcessor for SmsPaypalProcessor {
    fn auth_sms(&mut self, code: &str) -> Result<()> {
        tracing::info!(code, "Verifying SMS code");
        self.verified = true;
        Ok(())
    }

    fn pay(&self, order: &mut Order) -> Result<()> {
        ensure_verified(self.verified)?;
        tracing::debug!(email_address = %self.email_address, "Processing paypal payment type");
        order.mark_paid();
        Ok(())
    }
}
