use serde::Deserialize;
use serde_with::{serde_as, DefaultOnError, DefaultOnNull};

/// Data structure returned by Roku's transaction service alongside a non-2xx
/// status.
///
/// Fields of an unexpected type are left empty rather than failing the whole
/// decode, so the error message survives e.g. a numeric error code.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct ErrorResponseModel {
    /// Usually "Failure".
    #[serde_as(as = "DefaultOnError<DefaultOnNull>")]
    pub(crate) status: String,
    /// Human-readable description of the error.
    #[serde_as(as = "DefaultOnError<DefaultOnNull>")]
    pub(crate) error_message: String,
    #[serde_as(as = "DefaultOnError<DefaultOnNull>")]
    pub(crate) error_details: String,
    #[serde_as(as = "DefaultOnError<DefaultOnNull>")]
    pub(crate) error_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_error_body() {
        let m: ErrorResponseModel = serde_json::from_str(
            r#"{"errorMessage":"Purchase token/app user mismatch","status":"Failure"}"#,
        )
        .unwrap();
        assert_eq!(m.status, "Failure");
        assert_eq!(m.error_message, "Purchase token/app user mismatch");
        assert_eq!(m.error_details, "");
        assert_eq!(m.error_code, "");
    }

    #[test]
    fn test_field_of_wrong_type_is_left_empty() {
        let m: ErrorResponseModel = serde_json::from_str(
            r#"{"errorMessage":"Purchase token/app user mismatch","status":"Failure","errorCode":1001}"#,
        )
        .unwrap();
        assert_eq!(m.error_message, "Purchase token/app user mismatch");
        assert_eq!(m.status, "Failure");
        assert_eq!(m.error_code, "");
    }
}
