//! Application layer composing orders, authorizers and payment processors.
//!
//! Nothing here owns an order or an authorizer: the caller constructs both and
//! hands them in, and `checkout` only wires the requested processor around them.

pub mod checkout;
