use crate::error::ValidationError;
use regex::Regex;
use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::OnceLock;

pub const DEFAULT_CURRENCY: &str = "USD";

pub type Metadata = HashMap<String, Value>;

/// A validated payment request.
///
/// Only `PaymentRequestBuilder::build` produces one, so every instance has a
/// non-negative amount and a three-letter uppercase currency code.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    amount: Decimal,
    currency: String,
    description: Option<String>,
    customer_id: Option<String>,
    metadata: Option<Metadata>,
}

impl PaymentRequest {
    /// Amount in major currency units.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn customer_id(&self) -> Option<&str> {
        self.customer_id.as_deref()
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    /// Flattens the request into a JSON object.
    ///
    /// The keys `amount`, `currency`, `description`, `customerId` and
    /// `metadata` are always present; unset values are `null`.
    pub fn to_plain_record(&self) -> Value {
        serde_json::json!({
            "amount": self.amount,
            "currency": self.currency,
            "description": self.description,
            "customerId": self.customer_id,
            "metadata": self.metadata,
        })
    }
}

/// Accumulates payment attributes and validates them as a group.
///
/// Setters accept anything; all checks happen in [`build`](Self::build).
/// Building leaves the builder untouched so it can be tweaked and built again;
/// only [`reset`](Self::reset) restores the defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequestBuilder {
    amount: Decimal,
    currency: String,
    description: Option<String>,
    customer_id: Option<String>,
    metadata: Option<Metadata>,
}

impl Default for PaymentRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentRequestBuilder {
    pub fn new() -> Self {
        Self {
            amount: Decimal::ZERO,
            currency: DEFAULT_CURRENCY.to_string(),
            description: None,
            customer_id: None,
            metadata: None,
        }
    }

    pub fn amount(&mut self, amount: Decimal) -> &mut Self {
        self.amount = amount;
        self
    }

    /// Stored verbatim; lowercase codes are rejected at build time, not
    /// normalized.
    pub fn currency(&mut self, currency: impl Into<String>) -> &mut Self {
        self.currency = currency.into();
        self
    }

    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn customer_id(&mut self, customer_id: impl Into<String>) -> &mut Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    pub fn metadata(&mut self, metadata: Metadata) -> &mut Self {
        self.metadata = Some(metadata);
        self
    }

    /// Validates the current fields and snapshots them into a request.
    pub fn build(&self) -> Result<PaymentRequest, ValidationError> {
        if self.amount < Decimal::ZERO {
            return Err(ValidationError::NegativeAmount);
        }
        if self.currency.is_empty() {
            return Err(ValidationError::EmptyCurrency);
        }
        if !currency_pattern().is_match(&self.currency) {
            return Err(ValidationError::InvalidCurrencyFormat(
                self.currency.clone(),
            ));
        }

        Ok(PaymentRequest {
            amount: self.amount,
            currency: self.currency.clone(),
            description: self.description.clone(),
            customer_id: self.customer_id.clone(),
            metadata: self.metadata.clone(),
        })
    }

    pub fn reset(&mut self) -> &mut Self {
        *self = Self::new();
        self
    }
}

fn currency_pattern() -> &'static Regex {
    static CURRENCY_REGEX: OnceLock<Regex> = OnceLock::new();
    CURRENCY_REGEX.get_or_init(|| Regex::new(r"^[A-Z]{3}$").expect("valid currency regex"))
}
