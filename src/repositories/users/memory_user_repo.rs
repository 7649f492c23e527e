//! # 인메모리 사용자 리포지토리
//!
//! 프로세스 메모리에 사용자를 보관하는 [`UserRepository`] 구현체입니다.
//! 테스트와 외부 저장소 없이 서버를 띄울 때(`STORAGE_BACKEND=memory`) 사용합니다.
//!
//! 유니크 제약은 쓰기 잠금 안에서 검사하므로,
//! 서비스의 사전 중복 검사를 통과한 동시 요청이라도 두 번째 저장은 실패합니다.

use std::collections::BTreeMap;
use std::sync::RwLock;
use async_trait::async_trait;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::user::{NewUser, User, UserId};
use super::user_repo::UserRepository;

#[derive(Debug, Default)]
struct Store {
    users: BTreeMap<UserId, User>,
    last_id: UserId,
}

/// 메모리 기반 사용자 저장소
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    store: RwLock<Store>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<std::sync::RwLockReadGuard<'_, Store>> {
        self.store
            .read()
            .map_err(|_| AppError::DatabaseError("user store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<std::sync::RwLockWriteGuard<'_, Store>> {
        self.store
            .write()
            .map_err(|_| AppError::DatabaseError("user store lock poisoned".to_string()))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn exists_by_username(&self, username: &str) -> AppResult<bool> {
        Ok(self.read()?.users.values().any(|u| u.username == username))
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        Ok(self.read()?.users.values().any(|u| u.email == email))
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.read()?.users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .read()?
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn save(&self, user: NewUser) -> AppResult<User> {
        let mut store = self.write()?;

        // 유니크 인덱스에 해당하는 최종 검사
        if store.users.values().any(|u| u.username == user.username) {
            return Err(AppError::DatabaseError(format!(
                "unique constraint violated: username '{}'",
                user.username
            )));
        }
        if store.users.values().any(|u| u.email == user.email) {
            return Err(AppError::DatabaseError(format!(
                "unique constraint violated: email '{}'",
                user.email
            )));
        }

        store.last_id += 1;
        let saved = user.with_id(store.last_id);
        store.users.insert(saved.id, saved.clone());

        Ok(saved)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.read()?.users.values().cloned().collect())
    }
}
