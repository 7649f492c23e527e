//! Users Entity Module
//!
//! 사용자 도메인의 엔티티를 정의하는 모듈입니다.
//!
//! # 주요 구성 요소
//!
//! - [`User`](user::User): 저장된 사용자 (식별자와 생성 시간 보유)
//! - [`ValidatedUser`](user::ValidatedUser): 검증/정규화를 통과한 후보
//! - [`NewUser`](user::NewUser): 생성 시간이 기록된, 저장 직전의 레코드
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::ValidatedUser;
//!
//! let new_user = validated.stamp(chrono::Utc::now());
//! let user = user_repo.save(new_user).await?;
//! ```

pub mod user;

pub use user::{NewUser, User, UserId, ValidatedUser};
