//! Types shared between the framework and provider implementations

use masking::Secret;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    enums::{Currency, PaymentStatus},
    errors::PaymentProviderError,
};

/// Amount in the lowest denomination of a currency, as transmitted to
/// gateways (cents for two-decimal currencies).
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
pub struct MinorUnit(i64);

impl MinorUnit {
    /// forms a new minor unit amount
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// returns the inner amount
    pub fn get_amount_as_i64(self) -> i64 {
        self.0
    }

    /// converts to a major unit amount, two-decimal convention
    pub fn to_major_unit(self) -> FloatMajorUnit {
        FloatMajorUnit::new(self.0 as f64 / 100.0)
    }
}

impl std::fmt::Display for MinorUnit {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(fmt, "{}", self.0)
    }
}

/// Amount in major denomination units as handled on the framework side
/// (rands, not cents).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FloatMajorUnit(f64);

impl FloatMajorUnit {
    /// forms a new major unit amount
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// returns the inner amount
    pub fn get_amount_as_f64(self) -> f64 {
        self.0
    }

    /// converts to an integer minor unit amount, two-decimal convention
    pub fn to_minor_unit(self) -> Result<MinorUnit, PaymentProviderError> {
        let minor = (self.0 * 100.0).round();
        if !minor.is_finite() || minor < i64::MIN as f64 || minor > i64::MAX as f64 {
            return Err(PaymentProviderError::AmountConversionFailed);
        }
        Ok(MinorUnit::new(minor as i64))
    }
}

/// Customer details forwarded by the framework on payment initiation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CustomerDetails {
    /// Framework-side customer identifier
    pub id: Option<String>,
    /// Customer email
    pub email: Option<Secret<String>>,
}

/// The call context the framework attaches to initiate and update
/// operations. Which of these fields is populated depends on the call site;
/// providers must not assume any single one is present.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PaymentContext {
    /// Explicit idempotency key supplied by the caller
    pub idempotency_key: Option<String>,
    /// Identifier of the cart the payment session belongs to
    pub cart_id: Option<String>,
    /// Generic identifier of the payment session
    pub reference_id: Option<String>,
    /// Identifier of the resource an update call is scoped to
    pub resource_id: Option<String>,
    /// Customer attached to the session
    pub customer: Option<CustomerDetails>,
}

/// Provider-owned state the framework persists between calls on behalf of
/// the provider. Fields the provider does not model are preserved verbatim
/// in `extra` across round trips.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentData {
    /// Gateway checkout identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout_id: Option<String>,
    /// Correlation key tying the gateway checkout to the host session
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// URL the customer is redirected to in order to complete the checkout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    /// Gateway payment identifier, linked once the checkout completes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    /// Gateway refund identifier, set after a refund call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_id: Option<String>,
    /// When the framework considered the payment captured
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub captured_at: Option<OffsetDateTime>,
    /// When the framework considered the payment cancelled
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub cancelled_at: Option<OffsetDateTime>,
    /// Unmodelled fields, carried through unchanged
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Input to [`crate::api::PaymentProvider::initiate_payment`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InitiatePaymentInput {
    /// Amount in major units
    pub amount: FloatMajorUnit,
    /// Currency of the amount
    pub currency: Currency,
    /// Call context
    #[serde(default)]
    pub context: PaymentContext,
}

/// Output of [`crate::api::PaymentProvider::initiate_payment`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InitiatePaymentOutput {
    /// Status of the freshly created payment session
    pub status: PaymentStatus,
    /// Provider state to persist
    pub data: PaymentData,
}

/// Input to [`crate::api::PaymentProvider::update_payment`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdatePaymentInput {
    /// New amount in major units
    pub amount: FloatMajorUnit,
    /// Currency of the amount
    pub currency: Currency,
    /// Call context
    #[serde(default)]
    pub context: PaymentContext,
    /// Previously persisted provider state
    pub data: PaymentData,
}

/// Output of [`crate::api::PaymentProvider::update_payment`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdatePaymentOutput {
    /// Merged provider state to persist
    pub data: PaymentData,
}

/// Output of [`crate::api::PaymentProvider::authorize_payment`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthorizePaymentOutput {
    /// Mapped status of the gateway checkout
    pub status: PaymentStatus,
    /// Provider state to persist
    pub data: PaymentData,
}
