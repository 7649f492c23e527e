//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환합니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! #[post("")]
//! async fn create_user(
//!     service: web::Data<UserService>,
//!     payload: web::Json<Option<CreateUserRequest>>,
//! ) -> Result<HttpResponse, AppError> {
//!     let user = service.create_user(payload.into_inner()).await?;
//!     Ok(HttpResponse::Created().json(UserResponse::from(user)))
//! }
//! ```
//!
//! 본문이 `null`이면 `None`이 서비스로 전달되어
//! `"User data cannot be null"` 검증 실패가 됩니다.

pub mod create_user;
pub mod availability;

pub use create_user::CreateUserRequest;
pub use availability::EmailAvailabilityQuery;
