//! # 사용자 관련 응답 DTO 모듈
//!
//! 서버 → 클라이언트 방향의 응답 구조를 정의합니다.
//! 엔티티는 `From<User>`로 변환되어 camelCase JSON으로 직렬화됩니다.

pub mod user_response;

pub use user_response::{AvailabilityResponse, UserResponse};
