//! # 사용자 리포지토리 계약
//!
//! 서비스 계층이 저장소에 요구하는 연산을 정의하는 trait입니다.
//! Spring Data의 `JpaRepository<User, Long>`에 해당하며,
//! 트랜잭션 범위는 각 구현체가 스스로 책임집니다.
//!
//! ## 접근 수준
//!
//! | 메서드 | 접근 |
//! |--------|------|
//! | `exists_by_username` | read-only |
//! | `exists_by_email` | read-only |
//! | `find_by_id` | read-only |
//! | `find_by_username` | read-only |
//! | `find_all` | read-only |
//! | `save` | read-write |
//!
//! ## 유니크 제약
//!
//! 서비스의 중복 검사는 조회 후 저장(check-then-act)이라 원자적이지 않습니다.
//! 동시 삽입에 대한 최종 판단은 구현체의 유니크 제약이 내리며,
//! `save`가 제약 위반을 감지하면 `AppError::DatabaseError`로 실패해야 합니다.

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::entities::users::user::{NewUser, User, UserId};

/// 사용자 저장소
///
/// 구현체는 여러 actix 워커에서 공유되므로 `Send + Sync`여야 합니다.
///
/// ## 구현체
///
/// - [`MongoUserRepository`](super::mongo_user_repo::MongoUserRepository): MongoDB + 선택적 Redis 캐시
/// - [`InMemoryUserRepository`](super::memory_user_repo::InMemoryUserRepository): 프로세스 메모리 (테스트/로컬 실행)
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 주어진 사용자명(대소문자 구분)을 가진 레코드가 있는지 확인합니다.
    async fn exists_by_username(&self, username: &str) -> AppResult<bool>;

    /// 주어진 이메일을 가진 레코드가 있는지 확인합니다.
    ///
    /// 이메일은 정규화된(소문자) 값으로 전달됩니다.
    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// 새 레코드를 저장하고 식별자가 할당된 엔티티를 반환합니다.
    async fn save(&self, user: NewUser) -> AppResult<User>;

    /// 저장된 모든 레코드를 반환합니다. 순서는 보장하지 않습니다.
    async fn find_all(&self) -> AppResult<Vec<User>>;
}
