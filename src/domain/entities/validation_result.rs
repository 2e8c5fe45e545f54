use chrono::{DateTime, NaiveDateTime, Utc};

/// Details of a validated purchase, as reported by Roku's transaction service.
///
/// String fields are kept exactly as received. Fields missing from the response
/// are left empty (or zero).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    pub transaction_id: String,
    pub purchase_date: String,
    pub channel_name: String,
    pub product_name: String,
    pub product_id: String,
    pub amount: f64,
    pub currency: String,
    pub quantity: i64,
    pub expiration_date: String,
    pub original_purchase_date: String,
    /// Status reported by the service, typically "Success".
    pub status: String,
    pub error_message: String,
}

impl ValidationResult {
    pub fn is_success(&self) -> bool {
        self.status == "Success"
    }

    pub fn purchase_time(&self) -> Option<DateTime<Utc>> {
        parse_roku_date(&self.purchase_date)
    }

    /// Only present for subscriptions.
    pub fn expiration_time(&self) -> Option<DateTime<Utc>> {
        parse_roku_date(&self.expiration_date)
    }

    pub fn original_purchase_time(&self) -> Option<DateTime<Utc>> {
        parse_roku_date(&self.original_purchase_date)
    }
}

/// Roku reports dates without an offset (e.g. "2012-07-22T14:59:50"), which
/// are taken to be UTC. Dates with an explicit offset are also accepted.
///
/// Accepted formats:
/// - RFC 3339: `YYYY-MM-DDTHH:MM:SS[.fff](Z|+HH:MM|-HH:MM)`
/// - naive: `YYYY-MM-DDTHH:MM:SS[.fff]`, read as UTC
///
/// Anything else (including an empty string) yields `None`.
fn parse_roku_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date.with_timezone(&Utc));
    }
    value
        .parse::<NaiveDateTime>()
        .ok()
        .map(|naive| naive.and_utc())
}
