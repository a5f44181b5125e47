//! A closed payment processor that switches on a string tag.
//!
//! Every new payment method means editing this type, and callers can pass
//! tags it has never heard of. [`crate::domain::ports::PaymentProcessor`]
//! replaces it with one implementation per method.

use crate::domain::order::Order;
use crate::error::{PaymentError, Result};

#[derive(Debug, Default, Clone, Copy)]
pub struct ClosedPaymentProcessor;

impl ClosedPaymentProcessor {
    pub fn new() -> Self {
        Self
    }

    pub fn pay_debit(&self, order: &mut Order, security_code: &str) {
        tracing::info!("Processing debit payment type");
        tracing::debug!(security_code, "Verifying security code");
        order.mark_paid();
    }

    pub fn pay_credit(&self, order: &mut Order, security_code: &str) {
        tracing::info!("Processing credit payment type");
        tracing::debug!(security_code, "Verifying security code");
        order.mark_paid();
    }

    /// Dispatches on `payment_type`. Only "debit" and "credit" are known.
    pub fn pay(&self, order: &mut Order, payment_type: &str, security_code: &str) -> Result<()> {
        match payment_type {
            "debit" => self.pay_debit(order, security_code),
            "credit" => self.pay_credit(order, security_code),
            other => return Err(PaymentError::UnknownPaymentType(other.to_string())),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderStatus;

    #[test]
    fn test_known_tags_pay() {
        let processor = ClosedPaymentProcessor::new();
        for tag in ["debit", "credit"] {
            let mut order = Order::new();
            processor.pay(&mut order, tag, "1234567").unwrap();
            assert_eq!(order.status(), OrderStatus::Paid);
        }
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let processor = ClosedPaymentProcessor::new();
        let mut order = Order::new();
        let err = processor
            .pay(&mut order, "paypal", "payment@example.com")
            .unwrap_err();
        assert_eq!(err.to_string(), "unknown payment type: paypal");
        assert_eq!(order.status(), OrderStatus::Open);
    }
}
