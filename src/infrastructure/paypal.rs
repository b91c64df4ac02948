use crate::domain::ports::PaymentProcessor;
use rust_decimal::Decimal;
use tracing::debug;

/// PayPal backend. It already takes major units, so no translation is needed.
#[derive(Debug, Default, Clone)]
pub struct PaypalProcessor;

impl PaypalProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentProcessor for PaypalProcessor {
    fn process_payment(&self, amount: Decimal) -> bool {
        let success = amount > Decimal::ZERO;
        debug!(%amount, success, "paypal charge");
        success
    }
}
