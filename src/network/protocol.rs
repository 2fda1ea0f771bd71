//! Dictionary service wire format
//!
//! `GET /validate-word/{word}` answers `200 OK` with `{"exists": bool}`.

use serde::{Deserialize, Serialize};

/// Route prefix for word validation
pub const VALIDATE_PATH: &str = "validate-word";

/// Body of a successful validation response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResponse {
    pub exists: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_json_shape() {
        let json = serde_json::to_string(&ValidationResponse { exists: true }).unwrap();
        assert_eq!(json, r#"{"exists":true}"#);
    }

    #[test]
    fn test_response_ignores_extra_fields() {
        let parsed: ValidationResponse =
            serde_json::from_str(r#"{"exists":false,"word":"KISSA"}"#).unwrap();
        assert!(!parsed.exists);
    }

    #[test]
    fn test_response_requires_exists() {
        assert!(serde_json::from_str::<ValidationResponse>("{}").is_err());
    }
}
