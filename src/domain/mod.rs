//! Domain layer: the order aggregate and the capability traits that payment
//! methods and second-factor authorizers implement.

pub mod authorization;
pub mod order;
pub mod ports;
