pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
pub mod legacy;

#[cfg(test)]
pub(crate) mod test_support;
