//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈로, 사용자 레코드와 API 계약을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 사용자 레코드의 단계별 타입 (ValidatedUser → NewUser → User)
//! └── DTOs          - 데이터 전송 객체 (Request/Response)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB, Cache)
//! ```
//!
//! ## 사용자 등록 플로우
//!
//! ```rust,ignore
//! // 1. DTO로 입력 받기
//! let request = CreateUserRequest::new("alice_01", "Alice@Example.COM", " Alice ", "Doe");
//!
//! // 2. 검증/정규화 → 중복 검사 → 저장
//! let user = user_service.create_user(Some(request)).await?;
//!
//! // 3. 응답 DTO로 변환
//! let response = UserResponse::from(user);
//! ```

pub mod entities;
pub mod dto;
