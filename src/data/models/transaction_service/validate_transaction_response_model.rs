use serde::Deserialize;
use serde_with::{serde_as, DefaultOnNull};

/// Data structure returned by Roku's transaction service when a transaction
/// was validated (2xx status).
///
/// Any field may be missing or null, in which case it is left at its zero
/// value.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct ValidateTransactionResponseModel {
    /// The transaction ID that was validated.
    #[serde_as(as = "DefaultOnNull")]
    pub(crate) transaction_id: String,
    /// The date of the purchase.
    #[serde_as(as = "DefaultOnNull")]
    pub(crate) purchase_date: String,
    /// The name of the channel the product was purchased in.
    #[serde_as(as = "DefaultOnNull")]
    pub(crate) channel_name: String,
    /// The display name of the product.
    #[serde_as(as = "DefaultOnNull")]
    pub(crate) product_name: String,
    /// The product identifier, as configured in the developer dashboard.
    #[serde_as(as = "DefaultOnNull")]
    pub(crate) product_id: String,
    /// The amount charged for the purchase.
    #[serde_as(as = "DefaultOnNull")]
    pub(crate) amount: f64,
    /// The currency of the amount.
    #[serde_as(as = "DefaultOnNull")]
    pub(crate) currency: String,
    /// The number of units purchased.
    #[serde_as(as = "DefaultOnNull")]
    pub(crate) quantity: i64,
    /// For subscriptions, the date the current period ends.
    #[serde_as(as = "DefaultOnNull")]
    pub(crate) expiration_date: String,
    /// For subscriptions, the date of the first purchase in the series.
    #[serde_as(as = "DefaultOnNull")]
    pub(crate) original_purchase_date: String,
    /// "Success" or "Failure".
    #[serde_as(as = "DefaultOnNull")]
    pub(crate) status: String,
    #[serde_as(as = "DefaultOnNull")]
    pub(crate) error_message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_response() {
        let m: ValidateTransactionResponseModel = serde_json::from_str(
            r#"{"transactionId":"{transactionid}","purchaseDate":"2012-07-22T14:59:50","channelName":"123Video","productName":"123Video Monthly Subscription","productId":"NETMONTH","amount":9.99,"currency":"USD","quantity":1,"expirationDate":"2012-08-22T14:59:50", "originalPurchaseDate":"2010-08-22T14:59:50", "status":"Success", "errorMessage":"error_message"}"#,
        )
        .unwrap();
        assert_eq!(m.transaction_id, "{transactionid}");
        assert_eq!(m.product_id, "NETMONTH");
        assert_eq!(m.amount, 9.99);
        assert_eq!(m.quantity, 1);
        assert_eq!(m.original_purchase_date, "2010-08-22T14:59:50");
        assert_eq!(m.error_message, "error_message");
    }

    #[test]
    fn test_missing_and_null_fields_take_zero_values() {
        let m: ValidateTransactionResponseModel = serde_json::from_str(
            r#"{"transactionId":"abc","amount":null,"expirationDate":null,"unknownField":42}"#,
        )
        .unwrap();
        assert_eq!(m.transaction_id, "abc");
        assert_eq!(m.amount, 0.0);
        assert_eq!(m.quantity, 0);
        assert_eq!(m.expiration_date, "");
        assert_eq!(m.status, "");
    }

    #[test]
    fn test_parse_quantity_beyond_32_bits() {
        let m: ValidateTransactionResponseModel =
            serde_json::from_str(r#"{"productId":"NETMONTH","quantity":3000000000}"#).unwrap();
        assert_eq!(m.quantity, 3_000_000_000);
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        assert!(
            serde_json::from_str::<ValidateTransactionResponseModel>(r#"{"quantity":"one"}"#)
                .is_err()
        );
    }
}
