//! Signature primitives, one module per algorithm family

pub(crate) mod ecdsa;
pub(crate) mod hmac;
pub(crate) mod rsa;
