//! Provider-agnostic payment processing.
//!
//! Callers pick a backend by name through [`application::resolver`], charge it
//! through the uniform [`domain::ports::PaymentProcessor`] contract, and build
//! validated requests with [`domain::request::PaymentRequestBuilder`].

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;

pub use application::resolver::{is_supported, list_supported, resolve};
pub use domain::ports::{PaymentProcessor, PaymentProcessorBox};
pub use domain::provider::Provider;
pub use domain::request::{PaymentRequest, PaymentRequestBuilder};
pub use error::{PaymentError, Result, ValidationError};
