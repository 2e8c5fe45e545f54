use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, error, instrument, warn};

use crate::{
    constants::VALIDATE_TRANSACTION_PATH,
    data::models::transaction_service::{
        error_response_model::ErrorResponseModel,
        validate_transaction_response_model::ValidateTransactionResponseModel,
    },
    errors::{RokuIapError, ValidationError},
};

use super::utils::decode_first_json_value;

#[async_trait]
pub(crate) trait TransactionServiceDatasource: Send + Sync {
    /// Validate Transaction:
    /// GET /listen/transaction-service.svc/validate-transaction/{partnerAPIKey}/{transactionId}
    ///
    /// transactionId:
    ///   The identifier of the purchase or subscription event to validate.
    async fn validate_transaction(
        &self,
        transaction_id: &str,
    ) -> Result<ValidateTransactionResponseModel, RokuIapError>;
}

pub(crate) struct TransactionServiceDatasourceImpl {
    client: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) developer_token: String,
    pub(crate) timeout: Duration,
}

#[async_trait]
impl TransactionServiceDatasource for TransactionServiceDatasourceImpl {
    #[instrument(skip(self))]
    async fn validate_transaction(
        &self,
        transaction_id: &str,
    ) -> Result<ValidateTransactionResponseModel, RokuIapError> {
        let url = self.validate_transaction_url(transaction_id);
        debug!(timeout = ?self.timeout, "Calling Roku transaction service");

        // Transport errors are stripped of the URL, since it embeds the token.
        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Roku transaction service request failed");
                RokuIapError::Transport(e.without_url())
            })?;
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!(error = %e, "Failed to read Roku transaction service response");
            RokuIapError::Transport(e.without_url())
        })?;

        if !status.is_success() {
            // A body that can't be parsed still yields a validation error
            // (with an empty message), so the failed status is never lost.
            let model: ErrorResponseModel = decode_first_json_value(&body).unwrap_or_else(|e| {
                warn!(status = %status, error = %e, "Unparseable error body from Roku transaction service");
                ErrorResponseModel::default()
            });
            warn!(
                status = %status,
                error_code = %model.error_code,
                error_message = %model.error_message,
                "Roku transaction service returned error"
            );
            return Err(ValidationError {
                http_status: status.as_u16(),
                status: model.status,
                message: model.error_message,
                error_details: model.error_details,
                error_code: model.error_code,
            }
            .into());
        }

        let model: ValidateTransactionResponseModel =
            decode_first_json_value(&body).map_err(|e| {
                error!(error = %e, "Failed to parse Roku transaction service response");
                RokuIapError::Decode(e)
            })?;
        debug!(status = %model.status, product_id = %model.product_id, "Transaction validated");
        Ok(model)
    }
}

impl TransactionServiceDatasourceImpl {
    pub(crate) fn new(base_url: String, developer_token: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            developer_token,
            timeout,
        }
    }

    /// The developer token is part of the URL, so the URL must not be logged.
    fn validate_transaction_url(&self, transaction_id: &str) -> String {
        format!(
            "{}{}/{}/{}",
            self.base_url, VALIDATE_TRANSACTION_PATH, self.developer_token, transaction_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_transaction_url() {
        let datasource = TransactionServiceDatasourceImpl::new(
            "https://apipub.roku.com".to_owned(),
            "devToken".to_owned(),
            Duration::from_secs(5),
        );
        assert_eq!(
            datasource.validate_transaction_url("abc-123"),
            "https://apipub.roku.com/listen/transaction-service.svc/validate-transaction/devToken/abc-123"
        );
    }

    #[test]
    fn test_trailing_slash_is_trimmed_from_base_url() {
        let datasource = TransactionServiceDatasourceImpl::new(
            "http://localhost:8080/".to_owned(),
            "devToken".to_owned(),
            Duration::from_secs(5),
        );
        assert_eq!(datasource.base_url, "http://localhost:8080");
        assert_eq!(
            datasource.validate_transaction_url("abc"),
            "http://localhost:8080/listen/transaction-service.svc/validate-transaction/devToken/abc"
        );
    }
}
