//! Errors and error specific types for the provider contract

/// Custom Result
/// A custom datatype that wraps the error variant <E> into a report, allowing
/// error_stack::Report<E> specific extendability
///
/// Effectively, equivalent to `Result<T, error_stack::Report<E>>`
pub type CustomResult<T, E> = error_stack::Result<T, E>;

/// Errors a payment provider implementation can surface to the framework.
#[derive(Debug, thiserror::Error)]
pub enum PaymentProviderError {
    /// The provider was constructed with an invalid options bundle. The
    /// message aggregates every failing field.
    #[error("Invalid provider configuration: {message}")]
    InvalidConfiguration {
        /// Human readable list of every invalid field
        message: String,
    },
    /// The gateway answered with a non-success HTTP status. Carries the
    /// gateway's own error code and message verbatim.
    #[error("Gateway error [{code}] (HTTP {status_code}): {message}")]
    Gateway {
        /// HTTP status code of the gateway response
        status_code: u16,
        /// Error code reported by the gateway
        code: String,
        /// Error message reported by the gateway
        message: String,
    },
    /// The request never produced a usable response: connection or DNS
    /// failure, interrupted body, or a body that is not valid JSON
    #[error("Failed to reach the payment gateway")]
    Network,
    /// The outgoing request body could not be serialized
    #[error("Failed to encode the gateway request")]
    RequestEncodingFailed,
    /// A field required by the operation is absent from the input
    #[error("Missing required field: {field_name}")]
    MissingRequiredField {
        /// Name of the absent field
        field_name: &'static str,
    },
    /// A major-unit amount could not be converted to gateway minor units
    #[error("Failed to convert the amount to minor units")]
    AmountConversionFailed,
}
