use crate::application::resolver;
use crate::domain::provider::Provider;
use crate::domain::request::{DEFAULT_CURRENCY, PaymentRequestBuilder};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// One charge instruction as read from the input.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct ChargeRecord {
    pub provider: Option<String>,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: Option<String>,
    pub description: Option<String>,
    pub customer_id: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ChargeStatus {
    /// The processor accepted the charge.
    Charged,
    /// The processor returned `false`.
    Declined,
    /// The request failed validation and was never sent.
    Invalid,
    /// No processor exists for the requested provider.
    Unsupported,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct ChargeOutcome {
    pub provider: String,
    pub amount: Decimal,
    pub currency: String,
    pub customer_id: Option<String>,
    pub status: ChargeStatus,
}

/// Runs charge records through the request builder and the resolved
/// processor, one at a time.
///
/// A single builder is reused across records and reset before each one.
pub struct Checkout {
    builder: PaymentRequestBuilder,
    default_provider: Option<Provider>,
}

impl Default for Checkout {
    fn default() -> Self {
        Self::new()
    }
}

impl Checkout {
    pub fn new() -> Self {
        Self {
            builder: PaymentRequestBuilder::new(),
            default_provider: None,
        }
    }

    /// Uses `provider` for records that do not name one.
    pub fn with_default_provider(provider: Provider) -> Self {
        Self {
            builder: PaymentRequestBuilder::new(),
            default_provider: Some(provider),
        }
    }

    pub fn process(&mut self, record: ChargeRecord) -> ChargeOutcome {
        let provider = record
            .provider
            .clone()
            .or_else(|| self.default_provider.map(|p| p.as_str().to_string()))
            .unwrap_or_default();

        let mut outcome = ChargeOutcome {
            provider: provider.to_ascii_uppercase(),
            amount: record.amount,
            currency: record
                .currency
                .clone()
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            customer_id: record.customer_id.clone(),
            status: ChargeStatus::Invalid,
        };

        self.builder.reset().amount(record.amount);
        if let Some(currency) = record.currency {
            self.builder.currency(currency);
        }
        if let Some(description) = record.description {
            self.builder.description(description);
        }
        if let Some(customer_id) = record.customer_id {
            self.builder.customer_id(customer_id);
        }

        let request = match self.builder.build() {
            Ok(request) => request,
            Err(e) => {
                warn!(provider = %outcome.provider, error = %e, "rejected payment request");
                return outcome;
            }
        };

        let processor = match resolver::resolve(&provider) {
            Ok(processor) => processor,
            Err(e) => {
                warn!(error = %e, "no processor for payment request");
                outcome.status = ChargeStatus::Unsupported;
                return outcome;
            }
        };

        outcome.status = if processor.process_payment(request.amount()) {
            ChargeStatus::Charged
        } else {
            ChargeStatus::Declined
        };
        info!(
            provider = %outcome.provider,
            amount = %request.amount(),
            currency = request.currency(),
            status = ?outcome.status,
            "processed charge"
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(provider: Option<&str>, amount: Decimal, currency: Option<&str>) -> ChargeRecord {
        ChargeRecord {
            provider: provider.map(str::to_string),
            amount,
            currency: currency.map(str::to_string),
            description: None,
            customer_id: Some("cus_1".to_string()),
        }
    }

    #[test]
    fn test_charged_through_stripe() {
        let mut checkout = Checkout::new();
        let outcome = checkout.process(record(Some("stripe"), dec!(10.50), Some("EUR")));
        assert_eq!(outcome.status, ChargeStatus::Charged);
        assert_eq!(outcome.provider, "STRIPE");
        assert_eq!(outcome.currency, "EUR");
        assert_eq!(outcome.customer_id.as_deref(), Some("cus_1"));
    }

    #[test]
    fn test_zero_amount_declined() {
        let mut checkout = Checkout::new();
        let outcome = checkout.process(record(Some("paypal"), Decimal::ZERO, None));
        assert_eq!(outcome.status, ChargeStatus::Declined);
        assert_eq!(outcome.currency, "USD");
    }

    #[test]
    fn test_negative_amount_invalid() {
        let mut checkout = Checkout::new();
        let outcome = checkout.process(record(Some("paypal"), dec!(-5.00), None));
        assert_eq!(outcome.status, ChargeStatus::Invalid);
    }

    #[test]
    fn test_lowercase_currency_invalid() {
        let mut checkout = Checkout::new();
        let outcome = checkout.process(record(Some("stripe"), dec!(1), Some("usd")));
        assert_eq!(outcome.status, ChargeStatus::Invalid);
    }

    #[test]
    fn test_unknown_provider_unsupported() {
        let mut checkout = Checkout::new();
        let outcome = checkout.process(record(Some("square"), dec!(1), None));
        assert_eq!(outcome.status, ChargeStatus::Unsupported);
        assert_eq!(outcome.provider, "SQUARE");
    }

    #[test]
    fn test_missing_provider_without_default() {
        let mut checkout = Checkout::new();
        let outcome = checkout.process(record(None, dec!(1), None));
        assert_eq!(outcome.status, ChargeStatus::Unsupported);
    }

    #[test]
    fn test_default_provider_fills_gap() {
        let mut checkout = Checkout::with_default_provider(Provider::Paypal);
        let outcome = checkout.process(record(None, dec!(1), None));
        assert_eq!(outcome.status, ChargeStatus::Charged);
        assert_eq!(outcome.provider, "PAYPAL");
    }

    #[test]
    fn test_row_provider_overrides_default() {
        let mut checkout = Checkout::with_default_provider(Provider::Paypal);
        // 0.004 rounds to zero cents on Stripe but is positive for PayPal.
        let outcome = checkout.process(record(Some("stripe"), dec!(0.004), None));
        assert_eq!(outcome.provider, "STRIPE");
        assert_eq!(outcome.status, ChargeStatus::Declined);
    }

    #[test]
    fn test_previous_record_does_not_leak() {
        let mut checkout = Checkout::new();
        checkout.process(record(Some("stripe"), dec!(1), Some("usd")));
        // Currency is unset here, so the reset builder must fall back to USD.
        let outcome = checkout.process(record(Some("stripe"), dec!(1), None));
        assert_eq!(outcome.status, ChargeStatus::Charged);
    }
}
