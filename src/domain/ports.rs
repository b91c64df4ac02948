use rust_decimal::Decimal;

/// The uniform payment contract every backend exposes to callers.
///
/// Amounts are in major currency units. A declined or impossible charge is
/// reported as `false`, not as an error.
pub trait PaymentProcessor: Send + Sync {
    fn process_payment(&self, amount: Decimal) -> bool;
}

pub type PaymentProcessorBox = Box<dyn PaymentProcessor>;

/// Builds a fresh processor on every call.
pub type ProcessorFactory = fn() -> PaymentProcessorBox;
