use std::time::Duration;

use async_trait::async_trait;

use crate::{
    constants::PRODUCTION_URL,
    data::{
        datasources::transaction_service_datasource::TransactionServiceDatasourceImpl,
        repositories::iap_validator_impl::IapValidatorImpl,
    },
    domain::{
        entities::{client_config::ClientConfig, validation_result::ValidationResult},
        repositories::iap_validator::IapValidator,
    },
    errors::RokuIapError,
};

/// Client for validating Roku in-app purchases.
///
/// Holds no mutable state, so a single instance can be shared between tasks
/// (e.g. behind an `Arc`). Code that should be testable without network access
/// can depend on [`IapValidator`] instead, which this type implements.
pub struct IapUtil {
    iap_validator: IapValidatorImpl<TransactionServiceDatasourceImpl>,
}

impl IapUtil {
    /// Client for the production endpoint, with a 5 second timeout.
    pub fn new(developer_token: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::new(developer_token))
    }

    /// Client for the production endpoint, regardless of
    /// `config.is_production`. A missing or zero timeout falls back to 5
    /// seconds.
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            iap_validator: IapValidatorImpl::new(PRODUCTION_URL, &config),
        }
    }

    /// Sends requests to a different host instead, such as a proxy or a local
    /// test server.
    pub fn with_base_url(self, base_url: impl Into<String>) -> Self {
        let d = self.iap_validator.transaction_service_datasource;
        Self {
            iap_validator: IapValidatorImpl {
                transaction_service_datasource: TransactionServiceDatasourceImpl::new(
                    base_url.into(),
                    d.developer_token,
                    d.timeout,
                ),
            },
        }
    }

    pub fn base_url(&self) -> &str {
        &self.iap_validator.transaction_service_datasource.base_url
    }

    pub fn developer_token(&self) -> &str {
        &self
            .iap_validator
            .transaction_service_datasource
            .developer_token
    }

    pub fn timeout(&self) -> Duration {
        self.iap_validator.transaction_service_datasource.timeout
    }

    /// Validates a transaction. See [`IapValidator::verify`].
    pub async fn verify(&self, transaction_id: &str) -> Result<ValidationResult, RokuIapError> {
        self.iap_validator.verify(transaction_id).await
    }
}

#[async_trait]
impl IapValidator for IapUtil {
    async fn verify(&self, transaction_id: &str) -> Result<ValidationResult, RokuIapError> {
        self.iap_validator.verify(transaction_id).await
    }
}

impl std::fmt::Debug for IapUtil {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IapUtil")
            .field("base_url", &self.base_url())
            .field("developer_token", &"<redacted>")
            .field("timeout", &self.timeout())
            .finish()
    }
}
