use std::time::Duration;

/// Roku's public API host. Only the production host is known, so sandbox
/// transactions are validated against it as well.
pub const PRODUCTION_URL: &str = "https://apipub.roku.com";

/// Path of the transaction validation endpoint, relative to the base URL. The
/// developer token and transaction ID follow as two further path segments.
pub const VALIDATE_TRANSACTION_PATH: &str = "/listen/transaction-service.svc/validate-transaction";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
