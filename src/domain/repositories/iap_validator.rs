use async_trait::async_trait;

use crate::{domain::entities::validation_result::ValidationResult, errors::RokuIapError};

#[async_trait]
pub trait IapValidator: Send + Sync {
    /// Validates a transaction against Roku's transaction service.
    ///
    /// transaction_id:
    ///   The identifier of the purchase or subscription event, as reported to
    ///   the channel. Passed through as-is.
    async fn verify(&self, transaction_id: &str) -> Result<ValidationResult, RokuIapError>;
}
