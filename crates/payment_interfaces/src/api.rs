//! Provider interface

use crate::{
    enums::PaymentStatus,
    errors::{CustomResult, PaymentProviderError},
    types::{
        AuthorizePaymentOutput, FloatMajorUnit, InitiatePaymentInput, InitiatePaymentOutput,
        PaymentData, UpdatePaymentInput, UpdatePaymentOutput,
    },
    webhooks::{WebhookActionAndData, WebhookEvent},
};

/// The fixed capability contract a payment provider plugin implements.
///
/// The framework constructs one provider per container and may invoke the
/// operations concurrently for different payment sessions; implementations
/// must not rely on cross-call state beyond the configuration captured at
/// construction.
#[async_trait::async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Start a payment session with the gateway.
    async fn initiate_payment(
        &self,
        input: InitiatePaymentInput,
    ) -> CustomResult<InitiatePaymentOutput, PaymentProviderError>;

    /// Reflect an amount change of the host session at the gateway.
    async fn update_payment(
        &self,
        input: UpdatePaymentInput,
    ) -> CustomResult<UpdatePaymentOutput, PaymentProviderError>;

    /// Dispose of the provider state for a session that is being removed.
    async fn delete_payment(
        &self,
        data: PaymentData,
    ) -> CustomResult<PaymentData, PaymentProviderError>;

    /// Report the current status of the payment.
    async fn get_payment_status(
        &self,
        data: &PaymentData,
    ) -> CustomResult<PaymentStatus, PaymentProviderError>;

    /// Check whether the payment can be considered authorized.
    async fn authorize_payment(
        &self,
        data: PaymentData,
    ) -> CustomResult<AuthorizePaymentOutput, PaymentProviderError>;

    /// Mark the payment as captured.
    async fn capture_payment(
        &self,
        data: PaymentData,
    ) -> CustomResult<PaymentData, PaymentProviderError>;

    /// Refund a captured payment, fully or partially.
    async fn refund_payment(
        &self,
        data: PaymentData,
        amount: Option<FloatMajorUnit>,
    ) -> CustomResult<PaymentData, PaymentProviderError>;

    /// Mark the payment as cancelled.
    async fn cancel_payment(
        &self,
        data: PaymentData,
    ) -> CustomResult<PaymentData, PaymentProviderError>;

    /// Fetch the latest gateway view of the payment.
    async fn retrieve_payment(
        &self,
        data: PaymentData,
    ) -> CustomResult<PaymentData, PaymentProviderError>;

    /// Translate a gateway webhook event into a framework action.
    async fn get_webhook_action_and_data(
        &self,
        event: WebhookEvent,
    ) -> CustomResult<WebhookActionAndData, PaymentProviderError>;
}
