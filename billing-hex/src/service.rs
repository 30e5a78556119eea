//! Payment Processing Service
//!
//! Validates the seller, classifies each payment against its billing and
//! hands it to the channel matching its status.
//! Contains NO infrastructure logic - pure business orchestration.

use tracing::{error, info, warn};

use billing_types::{
    Billing, ChannelConfig, DispatchMode, JsonPaymentEncoder, LookupRepository, MessagePublisher,
    Payment, PaymentBatch, PaymentEncoder, PaymentStatus, ProcessingError,
};

/// Application service for payment batches.
///
/// Generic over the lookup store `R` and the publisher `P` - adapters are
/// injected at compile time. The encoder is swappable at runtime.
///
/// Batches are not transactional: a failure stops the batch, and messages
/// already published for earlier payments stay published.
pub struct PaymentService<R: LookupRepository, P: MessagePublisher> {
    repo: R,
    publisher: P,
    channels: ChannelConfig,
    encoder: Box<dyn PaymentEncoder>,
    mode: DispatchMode,
}

impl<R: LookupRepository, P: MessagePublisher> PaymentService<R, P> {
    /// Creates a new service publishing JSON payloads in fail-fast mode.
    pub fn new(repo: R, publisher: P, channels: ChannelConfig) -> Self {
        Self {
            repo,
            publisher,
            channels,
            encoder: Box::new(JsonPaymentEncoder),
            mode: DispatchMode::default(),
        }
    }

    /// Replaces the payload encoder.
    pub fn with_encoder(mut self, encoder: impl PaymentEncoder) -> Self {
        self.encoder = Box::new(encoder);
        self
    }

    /// Sets how batches are walked.
    pub fn with_dispatch_mode(mut self, mode: DispatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns a reference to the underlying lookup store.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Returns a reference to the underlying publisher.
    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    pub fn channels(&self) -> &ChannelConfig {
        &self.channels
    }

    pub fn dispatch_mode(&self) -> DispatchMode {
        self.mode
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Batch processing
    // ─────────────────────────────────────────────────────────────────────────────

    /// Processes one seller's batch and returns it with every status set.
    ///
    /// The seller is checked before any payment is touched. Payments are
    /// handled in order; each classified payment is published exactly once.
    #[tracing::instrument(
        skip(self, batch),
        fields(seller_code = %batch.seller_code, payments = batch.payments.len(), mode = ?self.mode)
    )]
    pub async fn process_payments(
        &self,
        mut batch: PaymentBatch,
    ) -> Result<PaymentBatch, ProcessingError> {
        self.ensure_seller(&batch.seller_code).await?;

        match self.mode {
            DispatchMode::FailFast => {
                for payment in batch.payments.iter_mut() {
                    let billing = self.resolve_billing(&payment.billing_code).await?;
                    self.dispatch(payment, &billing).await?;
                }
            }
            DispatchMode::ValidateFirst => {
                let mut billings = Vec::with_capacity(batch.payments.len());
                for payment in &batch.payments {
                    billings.push(self.resolve_billing(&payment.billing_code).await?);
                }
                for (payment, billing) in batch.payments.iter_mut().zip(billings) {
                    self.dispatch(payment, &billing).await?;
                }
            }
        }

        info!("Processed {} payments", batch.payments.len());
        Ok(batch)
    }

    async fn ensure_seller(&self, seller_code: &str) -> Result<(), ProcessingError> {
        match self.repo.find_seller(seller_code).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => {
                warn!("Rejecting batch: seller {} not found", seller_code);
                Err(ProcessingError::SellerNotFound(seller_code.to_string()))
            }
            Err(e) => {
                error!("Seller lookup failed: {}", e);
                Err(e.into())
            }
        }
    }

    async fn resolve_billing(&self, billing_code: &str) -> Result<Billing, ProcessingError> {
        match self.repo.find_billing(billing_code).await {
            Ok(Some(billing)) => Ok(billing),
            Ok(None) => {
                warn!("Stopping batch: billing code {} not found", billing_code);
                Err(ProcessingError::BillingNotFound(billing_code.to_string()))
            }
            Err(e) => {
                error!("Billing lookup failed for {}: {}", billing_code, e);
                Err(e.into())
            }
        }
    }

    /// Classifies one payment in place, then encodes and publishes it.
    async fn dispatch(
        &self,
        payment: &mut Payment,
        billing: &Billing,
    ) -> Result<(), ProcessingError> {
        let status = PaymentStatus::classify(payment.amount, billing.original_amount);
        payment.status = Some(status);

        let payload =
            self.encoder
                .encode(payment)
                .map_err(|source| ProcessingError::SerializationFailure {
                    billing_code: payment.billing_code.clone(),
                    source,
                })?;

        let channel = self.channels.channel_for(status);
        if let Err(source) = self.publisher.publish(channel, payload).await {
            error!(
                "Publishing {} to {} failed: {}",
                payment.billing_code, channel, source
            );
            return Err(ProcessingError::PublishFailure {
                channel: channel.to_string(),
                source,
            });
        }

        info!(
            billing_code = %payment.billing_code,
            amount = %payment.amount,
            %status,
            channel,
            "Payment published"
        );
        Ok(())
    }
}
