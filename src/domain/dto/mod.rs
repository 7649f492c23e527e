//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! Spring Framework의 `@RequestBody`, `@ResponseBody`와 동일한 역할을 수행합니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@RequestBody` | `request` 모듈 | HTTP 요청 본문 매핑 |
//! | `@ResponseBody` | `response` 모듈 | HTTP 응답 본문 매핑 |
//! | `@RequestParam` | `web::Query<T>` | 쿼리 파라미터 매핑 |
//! | `ResponseEntity<T>` | `Result<HttpResponse, AppError>` | 상태 코드와 함께 응답 |
//!
//! ## 설계 원칙
//!
//! - **내부 표현 vs 외부 표현**: 엔티티(`User`)와 응답 DTO(`UserResponse`)를 분리합니다
//! - **camelCase 와이어 포맷**: `firstName`, `lastName`, `createdAt`
//! - **검증은 서비스에서**: 요청 DTO는 구조만 표현하고 규칙은 서비스가 적용합니다
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! └── users/
//!     ├── request/
//!     │   ├── create_user.rs
//!     │   └── availability.rs
//!     └── response/
//!         └── user_response.rs
//! ```

pub mod users;

pub use users::*;
