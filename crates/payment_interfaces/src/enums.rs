use serde::{Deserialize, Serialize};

/// The status of a payment attempt as tracked by the framework.
///
/// Provider implementations translate whatever lifecycle their gateway
/// exposes into this vocabulary.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentStatus {
    /// The payment has been started but not yet confirmed by the gateway
    #[default]
    Pending,
    /// Funds are reserved and the payment can be captured
    Authorized,
    /// Funds have been captured
    Captured,
    /// The payment was cancelled before capture
    Canceled,
    /// The gateway reported a terminal failure
    Failed,
}

/// The action the framework should take in response to a provider webhook.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WebhookAction {
    /// Mark the referenced payment session as authorized
    Authorized,
    /// The event does not map to any framework action and is ignored
    NotSupported,
}

/// The currency of a payment amount, ISO 4217 alpha-3.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Currency {
    /// Euro
    Eur,
    /// Pound sterling
    Gbp,
    /// United States dollar
    Usd,
    /// South African rand
    Zar,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Authorized).unwrap(),
            r#""authorized""#
        );
        assert_eq!(PaymentStatus::Canceled.to_string(), "canceled");
    }

    #[test]
    fn webhook_action_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&WebhookAction::NotSupported).unwrap(),
            r#""not_supported""#
        );
    }

    #[test]
    fn currency_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Currency::Zar).unwrap(), r#""ZAR""#);
        assert_eq!(Currency::Zar.to_string(), "ZAR");
    }
}
