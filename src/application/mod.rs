//! Application layer: provider resolution and the batch checkout flow built
//! on top of it.

pub mod checkout;
pub mod resolver;
