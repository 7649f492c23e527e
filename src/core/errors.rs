//! # Application Error Handling System
//!
//! 사용자 등록 서비스의 통합 에러 처리 시스템입니다.
//! 서비스 계층이 만들어내는 분류된 실패(검증 실패, 중복, 조회 실패)와
//! 그 외의 분류되지 않은 실패(저장소, 캐시, 내부 오류)를 하나의 열거형으로 표현하고,
//! `actix_web::ResponseError` 구현을 통해 HTTP 응답으로 변환합니다.
//!
//! ## 설계 철학
//!
//! ### 1. 단일 결과 타입 디스패치
//! - 서비스는 항상 `AppResult<T>`를 반환합니다
//! - 예외 타입별 핸들러 대신, 경계 계층에서 한 번의 `match`로 상태 코드를 결정합니다
//!
//! ### 2. 분류된 실패는 사유를 그대로 전달
//! - `InvalidUserData`, `DuplicateUser`, `UserNotFound`의 `Display`는 사유 문자열 그 자체입니다
//! - 클라이언트는 `{"error": "<사유>"}` 형태로 받습니다
//!
//! ### 3. 분류되지 않은 실패는 숨김
//! - 저장소/캐시/내부 오류의 세부 내용은 서버 로그에만 남깁니다
//! - 클라이언트에는 일반 메시지만 노출합니다
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `InvalidUserData` | 400 Bad Request | 정규화/형식/길이/문자셋 규칙 위반 |
//! | `DuplicateUser` | 400 Bad Request | 사용자명 또는 이메일 중복 |
//! | `UserNotFound` | 404 Not Found | ID 또는 사용자명 조회 실패 |
//! | `DatabaseError` | 500 Internal Server Error | 저장소 오류 |
//! | `CacheError` | 500 Internal Server Error | Redis 캐시 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn find_by_id(&self, id: i64) -> AppResult<User> {
//!     self.user_repo
//!         .find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::UserNotFound(format!("User not found with ID: {}", id)))
//! }
//! ```

use thiserror::Error;

/// 클라이언트에 노출되는 내부 오류 메시지
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// 애플리케이션 전역 에러 타입
///
/// 앞의 세 변형은 서비스 계층이 분류한 실패이고,
/// 나머지는 협력자(저장소, 캐시)나 시스템에서 올라온 분류되지 않은 실패입니다.
/// 서비스는 분류되지 않은 실패를 잡거나 다른 변형으로 바꾸지 않습니다.
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// // MongoDB 에러 변환
/// collection.find_one(filter).await
///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
///
/// // Redis 에러 변환
/// redis_client.get::<User>("user:1").await
///     .map_err(|e| AppError::CacheError(e.to_string()))?;
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 실패 (400 Bad Request)
    ///
    /// 위반한 규칙과 필드를 설명하는 사람이 읽을 수 있는 사유를 담습니다.
    /// 검증은 첫 번째 위반에서 즉시 중단되므로 사유는 항상 하나입니다.
    ///
    /// ```rust,ignore
    /// return Err(AppError::InvalidUserData("Invalid email format".to_string()));
    /// ```
    #[error("{0}")]
    InvalidUserData(String),

    /// 사용자명 또는 이메일 중복 (400 Bad Request)
    ///
    /// 사유에는 충돌한 값이 포함됩니다.
    /// 두 키가 모두 충돌하면 사용자명 충돌이 보고됩니다.
    #[error("{0}")]
    DuplicateUser(String),

    /// 조회 대상 없음 (404 Not Found)
    ///
    /// 사유에는 조회에 사용한 키(ID 또는 사용자명)가 포함됩니다.
    #[error("{0}")]
    UserNotFound(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    ///
    /// 연결 실패, 쿼리 실패, 저장 시점의 유니크 인덱스 위반 등
    /// 저장소가 보고한 모든 실패가 여기에 해당합니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러 (500 Internal Server Error)
    #[error("Cache error: {0}")]
    CacheError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 서비스 계층이 분류한 실패인지 확인합니다.
    pub fn is_classified(&self) -> bool {
        matches!(
            self,
            AppError::InvalidUserData(_) | AppError::DuplicateUser(_) | AppError::UserNotFound(_)
        )
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::InvalidUserData(_) | AppError::DuplicateUser(_) => StatusCode::BAD_REQUEST,
            AppError::UserNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 다음 형식을 따릅니다:
    ///
    /// ```json
    /// { "error": "Human readable error message" }
    /// ```
    ///
    /// 분류된 실패는 `warn`, 분류되지 않은 실패는 `error` 레벨로 기록하며,
    /// 후자의 세부 내용은 응답 본문에 포함하지 않습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let message = if self.is_classified() {
            log::warn!("Request failed: {}", self);
            self.to_string()
        } else {
            log::error!("Unexpected error occurred: {}", self);
            UNEXPECTED_ERROR_MESSAGE.to_string()
        };

        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": message
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let options = ClientOptions::parse(&uri).await
///     .context("Failed to parse MongoDB URI")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    #[test]
    fn test_invalid_user_data_response() {
        let error = AppError::InvalidUserData("Invalid email format".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_duplicate_user_response() {
        let error = AppError::DuplicateUser("Username 'alice' is already taken".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_response() {
        let error = AppError::UserNotFound("User not found with ID: 999".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_unclassified_errors_map_to_internal_server_error() {
        let errors = [
            AppError::DatabaseError("connection refused".to_string()),
            AppError::CacheError("timeout".to_string()),
            AppError::InternalError("boom".to_string()),
        ];

        for error in errors {
            assert!(!error.is_classified());
            assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_classified_display_is_the_bare_reason() {
        let error = AppError::DuplicateUser("Email 'a@b.io' is already registered".to_string());
        assert_eq!(error.to_string(), "Email 'a@b.io' is already registered");
    }

    #[actix_web::test]
    async fn test_internal_details_are_not_exposed() {
        let error = AppError::DatabaseError("E11000 duplicate key".to_string());
        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(value["error"], UNEXPECTED_ERROR_MESSAGE);
    }

    #[actix_web::test]
    async fn test_classified_reason_is_the_error_body() {
        let error = AppError::InvalidUserData("Username is required".to_string());
        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(value["error"], "Username is required");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
