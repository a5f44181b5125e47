use crate::domain::order::{Order, OrderStatus, PaymentMethod};
use crate::domain::ports::{AuthorizerHandle, PaymentProcessor, PaymentProcessorBox};
use crate::error::{PaymentError, Result};
use crate::infrastructure::processors::{
    CreditPaymentProcessor, DebitPaymentProcessor, PaypalPaymentProcessor,
};
use serde::Serialize;

/// Summary of a settled order.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct Receipt {
    pub method: PaymentMethod,
    pub items: usize,
    pub total: u64,
    pub status: OrderStatus,
}

/// Builds the processor for `method`, injecting `authorizer` where the method needs one.
///
/// # Arguments
///
/// * `method` - The payment method to build.
/// * `credential` - Security code for cards, email address for PayPal.
/// * `authorizer` - Second-factor authorizer. Required for debit and PayPal,
///   ignored for credit.
pub fn build_processor(
    method: PaymentMethod,
    credential: impl Into<String>,
    authorizer: Option<AuthorizerHandle>,
) -> Result<PaymentProcessorBox> {
    let credential = credential.into();
    let processor: PaymentProcessorBox = match (method, authorizer) {
        (PaymentMethod::Credit, _) => Box::new(CreditPaymentProcessor::new(credential)),
        (PaymentMethod::Debit, Some(authorizer)) => {
            Box::new(DebitPaymentProcessor::new(credential, authorizer))
        }
        (PaymentMethod::Paypal, Some(authorizer)) => {
            Box::new(PaypalPaymentProcessor::new(credential, authorizer))
        }
        (method, None) => return Err(PaymentError::MissingAuthorizer(method)),
    };
    Ok(processor)
}

/// Pays `order` with `processor` and returns its receipt.
///
/// The order is left unchanged when the payment fails.
pub fn settle(processor: &dyn PaymentProcessor, order: &mut Order) -> Result<Receipt> {
    processor.pay(order)?;
    Ok(Receipt {
        method: processor.method(),
        items: order.len(),
        total: order.total_price(),
        status: order.status(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::authorizers::{GoogleAuthorizer, SmsAuthorizer};
    use std::sync::Arc;

    #[test]
    fn test_build_processor_requires_authorizer() {
        let result = build_processor(PaymentMethod::Debit, "1234567", None);
        assert!(matches!(
            result,
            Err(PaymentError::MissingAuthorizer(PaymentMethod::Debit))
        ));

        let result = build_processor(PaymentMethod::Paypal, "payment@example.com", None);
        assert!(matches!(
            result,
            Err(PaymentError::MissingAuthorizer(PaymentMethod::Paypal))
        ));
    }

    #[test]
    fn test_credit_ignores_authorizer() {
        let authorizer: AuthorizerHandle = Arc::new(SmsAuthorizer::new());
        let processor =
            build_processor(PaymentMethod::Credit, "1234567", Some(authorizer)).unwrap();
        let mut order = Order::new();
        let receipt = settle(processor.as_ref(), &mut order).unwrap();
        assert_eq!(receipt.method, PaymentMethod::Credit);
        assert_eq!(receipt.status, OrderStatus::Paid);
    }

    #[test]
    fn test_settle_builds_receipt() {
        let authorizer: AuthorizerHandle = Arc::new(GoogleAuthorizer::new());
        authorizer.verify_code("123456");
        let processor =
            build_processor(PaymentMethod::Paypal, "payment@example.com", Some(authorizer))
                .unwrap();

        let mut order = Order::new();
        order.add_item("Keyboard", 1, 50);
        order.add_item("Monitor", 2, 65);

        let receipt = settle(processor.as_ref(), &mut order).unwrap();
        assert_eq!(
            receipt,
            Receipt {
                method: PaymentMethod::Paypal,
                items: 2,
                total: 180,
                status: OrderStatus::Paid,
            }
        );
    }

    #[test]
    fn test_settle_failure_leaves_order_open() {
        let authorizer: AuthorizerHandle = Arc::new(SmsAuthorizer::new());
        let processor = build_processor(PaymentMethod::Debit, "1234567", Some(authorizer)).unwrap();
        let mut order = Order::new();
        order.add_item("Mouse", 1, 25);

        assert!(matches!(
            settle(processor.as_ref(), &mut order),
            Err(PaymentError::NotAuthorized)
        ));
        assert_eq!(order.status(), OrderStatus::Open);
    }
}
