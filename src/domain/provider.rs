use std::fmt;
use std::str::FromStr;

use crate::error::PaymentError;

/// The fixed set of payment providers this crate can dispatch to.
///
/// Names are matched case-insensitively; the canonical token is uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Stripe,
    Paypal,
}

impl Provider {
    /// Every provider, in declaration order.
    pub const ALL: [Provider; 2] = [Provider::Stripe, Provider::Paypal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Stripe => "STRIPE",
            Provider::Paypal => "PAYPAL",
        }
    }

    /// Comma-separated canonical tokens, in declaration order.
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(Provider::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|provider| provider.as_str() == normalized)
            .ok_or_else(|| PaymentError::UnsupportedProvider {
                provider: normalized,
                supported: Self::supported_list(),
            })
    }
}

impl TryFrom<&str> for Provider {
    type Error = PaymentError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
