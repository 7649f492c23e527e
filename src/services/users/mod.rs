//! 사용자 등록 서비스 모듈
//!
//! - [`validation`]: 입력 검증과 정규화 (순수 함수)
//! - [`user_service`]: 중복 검사, 저장, 조회, 가용성 확인
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(repo);
//! let user = user_service.create_user(Some(&request)).await?;
//! ```

pub mod validation;
pub mod user_service;

pub use user_service::UserService;
