//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`](user_repo::UserRepository) trait과 두 구현체를 제공합니다.
//!
//! - [`mongo_user_repo`]: MongoDB 저장 + 선택적 Redis 읽기 캐시
//! - [`memory_user_repo`]: 프로세스 메모리 저장 (테스트, 로컬 실행)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{InMemoryUserRepository, UserRepository};
//!
//! let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
//! let user = repo.find_by_username("alice_01").await?;
//! ```

pub mod user_repo;
pub mod mongo_user_repo;
pub mod memory_user_repo;

pub use user_repo::UserRepository;
pub use mongo_user_repo::MongoUserRepository;
pub use memory_user_repo::InMemoryUserRepository;
