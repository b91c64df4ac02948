use crate::domain::ports::{PaymentProcessorBox, ProcessorFactory};
use crate::domain::provider::Provider;
use crate::error::Result;
use crate::infrastructure::paypal::PaypalProcessor;
use crate::infrastructure::stripe::{StripeAdapter, StripeGateway};
use tracing::debug;

/// Returns the constructor for a provider's processor.
pub fn factory(provider: Provider) -> ProcessorFactory {
    match provider {
        Provider::Stripe => || -> PaymentProcessorBox {
            Box::new(StripeAdapter::new(StripeGateway::new()))
        },
        Provider::Paypal => || -> PaymentProcessorBox { Box::new(PaypalProcessor::new()) },
    }
}

impl Provider {
    /// Builds a fresh processor for this provider.
    pub fn processor(self) -> PaymentProcessorBox {
        factory(self)()
    }
}

/// Resolves a provider name (case-insensitive) to a fresh processor.
///
/// Every call builds new instances; nothing is cached or shared.
pub fn resolve(name: &str) -> Result<PaymentProcessorBox> {
    let provider: Provider = name.parse()?;
    debug!(%provider, "resolved payment provider");
    Ok(provider.processor())
}

/// Canonical provider tokens in declaration order.
pub fn list_supported() -> Vec<&'static str> {
    Provider::ALL.iter().map(Provider::as_str).collect()
}

pub fn is_supported(name: &str) -> bool {
    name.parse::<Provider>().is_ok()
}
