//! Domain layer: the uniform payment contract, provider identities and the
//! validated payment request.

pub mod ports;
pub mod provider;
pub mod request;
