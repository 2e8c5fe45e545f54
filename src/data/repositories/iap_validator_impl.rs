use async_trait::async_trait;

use crate::{
    data::{
        datasources::transaction_service_datasource::{
            TransactionServiceDatasource, TransactionServiceDatasourceImpl,
        },
        models::transaction_service::validate_transaction_response_model::ValidateTransactionResponseModel,
    },
    domain::{
        entities::{client_config::ClientConfig, validation_result::ValidationResult},
        repositories::iap_validator::IapValidator,
    },
    errors::RokuIapError,
};

pub(crate) struct IapValidatorImpl<D: TransactionServiceDatasource> {
    pub(crate) transaction_service_datasource: D,
}

#[async_trait]
impl<D: TransactionServiceDatasource> IapValidator for IapValidatorImpl<D> {
    async fn verify(&self, transaction_id: &str) -> Result<ValidationResult, RokuIapError> {
        let m = self
            .transaction_service_datasource
            .validate_transaction(transaction_id)
            .await?;
        Ok(ValidationResult::from_transaction_service(m))
    }
}

impl IapValidatorImpl<TransactionServiceDatasourceImpl> {
    pub(crate) fn new(base_url: &str, config: &ClientConfig) -> Self {
        Self {
            transaction_service_datasource: TransactionServiceDatasourceImpl::new(
                base_url.to_owned(),
                config.developer_token.clone(),
                config.resolved_timeout(),
            ),
        }
    }
}

// Entity conversions:
// ----------------------------

impl ValidationResult {
    fn from_transaction_service(m: ValidateTransactionResponseModel) -> Self {
        Self {
            transaction_id: m.transaction_id,
            purchase_date: m.purchase_date,
            channel_name: m.channel_name,
            product_name: m.product_name,
            product_id: m.product_id,
            amount: m.amount,
            currency: m.currency,
            quantity: m.quantity,
            expiration_date: m.expiration_date,
            original_purchase_date: m.original_purchase_date,
            status: m.status,
            error_message: m.error_message,
        }
    }
}
