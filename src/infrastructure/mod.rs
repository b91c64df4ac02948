//! Concrete payment backends behind the `PaymentProcessor` port.

pub mod paypal;
pub mod stripe;
