//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스는 `Arc<dyn UserRepository>`만 알고,
//! 실행 시점에 `STORAGE_BACKEND`에 따라 구현체가 선택됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::MongoUserRepository;
//!
//! let repo = MongoUserRepository::new(database, redis, 600);
//! repo.create_indexes().await?;
//! ```

pub mod users;
