//! Error conversions - framework integrations for [`AppError`]

use super::app_error::AppError;

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Mining responses never carry an error body
        (status, ()).into_response()
    }
}

#[cfg(all(test, feature = "axum"))]
mod tests {
    use super::*;
    use crate::error::kind::ErrorKind;
    use axum::response::IntoResponse;

    #[test]
    fn test_into_response_has_status_only() {
        let response = AppError::new(ErrorKind::RequestTimeout, "deadline").into_response();
        assert_eq!(response.status().as_u16(), 408);
    }
}
