use crate::domain::ports::PaymentProcessor;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

/// Stand-in for the Stripe SDK client.
///
/// Charges are expressed in minor units (cents) and the SDK answers with the
/// amount it accepted. This stub accepts everything and echoes it back.
#[derive(Debug, Default, Clone)]
pub struct StripeGateway;

impl StripeGateway {
    pub fn new() -> Self {
        Self
    }

    /// Returns the amount actually charged, in minor units.
    pub fn charge(&self, amount_minor: i64) -> i64 {
        amount_minor
    }
}

/// Adapts `StripeGateway` to the uniform `PaymentProcessor` contract.
///
/// Converts major units to cents, delegates to the gateway, and turns the
/// echoed amount into a success flag.
#[derive(Debug, Default, Clone)]
pub struct StripeAdapter {
    gateway: StripeGateway,
}

impl StripeAdapter {
    pub fn new(gateway: StripeGateway) -> Self {
        Self { gateway }
    }
}

impl PaymentProcessor for StripeAdapter {
    fn process_payment(&self, amount: Decimal) -> bool {
        let Some(requested) = to_minor_units(amount) else {
            debug!(%amount, "amount does not fit in minor units");
            return false;
        };

        let charged = self.gateway.charge(requested);
        // A zero charge counts as a failure, matching the native processors.
        let success = charged == requested && charged > 0;
        debug!(%amount, requested, charged, success, "stripe charge");
        success
    }
}

/// Converts major units to minor units, rounding half away from zero.
pub fn to_minor_units(amount: Decimal) -> Option<i64> {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_gateway_echoes_amount() {
        let gateway = StripeGateway::new();
        assert_eq!(gateway.charge(1050), 1050);
        assert_eq!(gateway.charge(0), 0);
    }

    #[test]
    fn test_minor_unit_rounding() {
        assert_eq!(to_minor_units(dec!(10.505)), Some(1051));
        assert_eq!(to_minor_units(dec!(10.50)), Some(1050));
        assert_eq!(to_minor_units(dec!(10.504)), Some(1050));
        assert_eq!(to_minor_units(dec!(0.005)), Some(1));
        assert_eq!(to_minor_units(dec!(0.004)), Some(0));
        assert_eq!(to_minor_units(dec!(-0.005)), Some(-1));
    }

    #[test]
    fn test_minor_unit_overflow() {
        assert_eq!(to_minor_units(Decimal::MAX), None);
    }

    #[test]
    fn test_adapter_success() {
        let adapter = StripeAdapter::new(StripeGateway::new());
        assert!(adapter.process_payment(dec!(10.50)));
        assert!(adapter.process_payment(dec!(0.005)));
    }

    #[test]
    fn test_adapter_rejects_zero_and_negative() {
        let adapter = StripeAdapter::default();
        assert!(!adapter.process_payment(Decimal::ZERO));
        assert!(!adapter.process_payment(dec!(0.004)));
        assert!(!adapter.process_payment(dec!(-5.00)));
    }

    #[test]
    fn test_adapter_rejects_unrepresentable_amount() {
        let adapter = StripeAdapter::default();
        assert!(!adapter.process_payment(Decimal::MAX));
    }
}
