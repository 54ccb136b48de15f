//! Health endpoint reporting process status and wall-clock time.

use actix_web::{get, web};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Health check payload.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Health {
    /// Fixed status marker.
    #[schema(example = "OK")]
    pub status: String,
    /// Server wall-clock time when the check was answered.
    pub timestamp: DateTime<Utc>,
}

/// Health check.
///
/// Always reports `OK` together with the current server time; there are no
/// dependencies whose readiness could vary.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = Health)
    ),
    tags = ["health"],
    operation_id = "health"
)]
#[get("/health")]
pub async fn health() -> web::Json<Health> {
    web::Json(Health {
        status: "OK".to_owned(),
        timestamp: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test as actix_test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn health_reports_ok_with_current_timestamp() {
        let app = actix_test::init_service(App::new().service(health)).await;
        let before = Utc::now();
        let request = actix_test::TestRequest::get().uri("/health").to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body.get("status").and_then(Value::as_str), Some("OK"));

        let timestamp = body
            .get("timestamp")
            .and_then(Value::as_str)
            .expect("timestamp string");
        let timestamp = DateTime::parse_from_rfc3339(timestamp)
            .expect("RFC 3339 timestamp")
            .with_timezone(&Utc);
        assert!(timestamp >= before);
        assert!(timestamp <= Utc::now());
    }
}
