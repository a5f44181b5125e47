//! Superseded processor designs, kept alongside the trait-based ones they were
//! refactored into. They are the only source of
//! [`crate::error::PaymentError::UnsupportedAuthorizationMethod`].

pub mod sms_coupled;
pub mod tag_switched;
