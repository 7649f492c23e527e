//! 사용자 등록 서비스 백엔드
//!
//! 사용자 레코드를 받아 검증/정규화하고, 사용자명과 이메일의 유일성을 보장하며
//! 저장과 조회, 가용성 확인을 제공하는 REST 서비스입니다.
//!
//! # Features
//!
//! - **검증/정규화**: 정해진 순서의 규칙, 첫 위반 사유 보고
//! - **중복 방지**: 사용자명(대소문자 구분), 이메일(소문자 비교)
//! - **MongoDB**: 순번 ID와 유니크 인덱스를 갖는 영구 저장
//! - **Redis**: 선택적 읽기 캐시
//! - **인메모리 저장소**: 테스트와 로컬 실행용
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, 중복 검사, 조회
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserRepository trait
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소 (또는 인메모리)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_registration_service::repositories::users::InMemoryUserRepository;
//! use user_registration_service::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
//! let user = service.create_user(Some(&request)).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
