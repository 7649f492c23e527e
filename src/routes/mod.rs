//! # 라우트 구성
//!
//! 모든 HTTP 경로를 한곳에서 등록합니다.
//!
//! ```text
//! /health
//! /api/users
//! ├── POST   ""                          사용자 등록
//! ├── GET    ""                          전체 조회
//! ├── GET    /check-email?email=         이메일 가용성
//! ├── GET    /check-username/{username}  사용자명 가용성
//! ├── GET    /username/{username}        사용자명 조회
//! └── GET    /{id}                       ID 조회 (마지막에 등록)
//! ```
//!
//! 고정 경로가 `/{id}`보다 먼저 등록되어야 `check-email` 같은 세그먼트가
//! ID로 매칭되지 않습니다.

use actix_web::{error, web, HttpRequest};
use serde_json::json;
use crate::core::errors::AppError;
use crate::handlers;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());
    cfg.service(health_check);

    configure_user_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .service(handlers::users::create_user)
            .service(handlers::users::get_all_users)
            .service(handlers::users::check_email_availability)
            .service(handlers::users::check_username_availability)
            .service(handlers::users::get_user_by_username)
            .service(handlers::users::get_user_by_id)
    );
}

/// 잘못된 JSON 본문을 `{"error": "Validation failed: ..."}` 400 응답으로 바꿉니다.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| {
        AppError::InvalidUserData(format!("Validation failed: {}", err)).into()
    })
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_registration_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "user_registration_service");
    }
}
