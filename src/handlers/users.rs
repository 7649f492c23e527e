//! # 사용자 HTTP 핸들러
//!
//! 사용자 등록/조회 REST API 엔드포인트입니다.
//! Spring의 `@RestController`에 해당하며, 서비스 결과를 HTTP 응답으로 옮기는 역할만 합니다.
//!
//! ## 엔드포인트
//!
//! | Method | Path | 성공 | 실패 |
//! |--------|------|------|------|
//! | POST | `/api/users` | 201 `UserResponse` | 400 |
//! | GET | `/api/users` | 200 `[UserResponse]` | |
//! | GET | `/api/users/{id}` | 200 `UserResponse` | 404 |
//! | GET | `/api/users/username/{username}` | 200 `UserResponse` | 404 |
//! | GET | `/api/users/check-username/{username}` | 200 `{"available": bool}` | |
//! | GET | `/api/users/check-email?email=` | 200 `{"available": bool}` | |
//!
//! 오류 응답 본문은 항상 `{"error": "<사유>"}`이며, 상태 코드 매핑은
//! [`AppError`]의 `ResponseError` 구현이 담당합니다.
//!
//! ## 요청 예제
//!
//! ```bash
//! curl -X POST http://127.0.0.1:8080/api/users \
//!   -H 'Content-Type: application/json' \
//!   -d '{"username":"alice_01","email":"Alice@Example.COM","firstName":" Alice ","lastName":"Doe"}'
//! ```

use actix_web::{get, post, web, HttpResponse};
use log::debug;
use crate::core::errors::AppError;
use crate::domain::dto::users::request::{CreateUserRequest, EmailAvailabilityQuery};
use crate::domain::dto::users::response::{AvailabilityResponse, UserResponse};
use crate::services::users::user_service::UserService;

/// 사용자 등록
///
/// 본문이 JSON `null`이면 `"User data cannot be null"`로 거부됩니다.
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<Option<CreateUserRequest>>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner();
    let user = service.create_user(request.as_ref()).await?;

    debug!("사용자 생성: id={}, username={}", user.id, user.username);

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

#[get("")]
pub async fn get_all_users(
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let users: Vec<UserResponse> = service
        .find_all_users()
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(users))
}

/// 이메일 사용 가능 여부
///
/// `/{id}`보다 먼저 등록되어야 `check-email`이 ID로 해석되지 않습니다.
#[get("/check-email")]
pub async fn check_email_availability(
    service: web::Data<UserService>,
    query: web::Query<EmailAvailabilityQuery>,
) -> Result<HttpResponse, AppError> {
    let available = service.is_email_available(&query.email).await?;

    Ok(HttpResponse::Ok().json(AvailabilityResponse::from(available)))
}

#[get("/check-username/{username}")]
pub async fn check_username_availability(
    service: web::Data<UserService>,
    username: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let available = service.is_username_available(&username).await?;

    Ok(HttpResponse::Ok().json(AvailabilityResponse::from(available)))
}

#[get("/username/{username}")]
pub async fn get_user_by_username(
    service: web::Data<UserService>,
    username: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.find_by_username(&username).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// ID로 사용자 조회
///
/// 숫자가 아닌 ID는 존재하지 않는 사용자로 취급합니다 (404).
#[get("/{user_id}")]
pub async fn get_user_by_id(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let raw_id = user_id.into_inner();
    let id = raw_id.parse::<i64>().map_err(|_| {
        debug!("숫자가 아닌 사용자 ID: {}", raw_id);
        AppError::UserNotFound(format!("User not found with ID: {}", raw_id))
    })?;

    let user = service.find_by_id(id).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
