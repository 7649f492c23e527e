//! # MongoDB 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하고, 선택적으로 Redis 읽기 캐시를 둡니다.
//!
//! ## 특징
//!
//! - **순번 식별자**: `counters` 컬렉션의 원자적 `$inc`로 `i64` ID 할당
//! - **유니크 인덱스**: 동시 삽입 경쟁의 최종 판단
//! - **읽기 캐시**: ID/사용자명 조회 결과를 TTL과 함께 보관

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::debug;
use mongodb::{
    bson::{doc, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::{
    caching::redis::RedisClient,
    core::errors::{AppError, AppResult, ErrorContext},
    db::Database,
    domain::entities::users::user::{NewUser, User, UserId},
};
use super::user_repo::UserRepository;

const USERS_COLLECTION: &str = "users";
const COUNTERS_COLLECTION: &str = "counters";
const USER_SEQUENCE: &str = "users";

fn id_cache_key(id: UserId) -> String {
    format!("user:{}", id)
}

fn username_cache_key(username: &str) -> String {
    format!("user:username:{}", username)
}

/// MongoDB 기반 사용자 리포지토리
///
/// ## 캐싱 전략
///
/// - **키 패턴**:
///   - 개별 사용자: `user:{id}`
///   - 사용자명 조회: `user:username:{username}`
/// - **TTL**: `CACHE_TTL_SECONDS` (기본 600초)
/// - 존재하는 레코드만 캐시합니다. 레코드는 생성 후 변경되지 않으므로 무효화가 필요 없습니다.
/// - 캐시 오류는 `debug!` 로그만 남기고 MongoDB 조회로 진행합니다.
///
/// ## 저장소
///
/// - **컬렉션명**: `users`
/// - **인덱스**: username(unique), email(unique), created_at(desc)
pub struct MongoUserRepository {
    db: Arc<Database>,
    cache: Option<Arc<RedisClient>>,
    cache_ttl_seconds: u64,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>, cache: Option<Arc<RedisClient>>, cache_ttl_seconds: u64) -> Self {
        Self {
            db,
            cache,
            cache_ttl_seconds,
        }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(USERS_COLLECTION)
    }

    /// 유니크 인덱스와 정렬 인덱스를 생성합니다. 이미 있으면 아무 일도 하지 않습니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([username_index, email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// `counters` 컬렉션에서 다음 사용자 ID를 원자적으로 발급합니다.
    async fn next_id(&self) -> AppResult<UserId> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self.db
            .get_database()
            .collection::<Document>(COUNTERS_COLLECTION)
            .find_one_and_update(
                doc! { "_id": USER_SEQUENCE },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .ok_or_else(|| AppError::DatabaseError("user id sequence unavailable".to_string()))?;

        counter
            .get_i64("seq")
            .context("user id sequence is malformed")
    }

    async fn cached(&self, key: &str) -> Option<User> {
        let cache = self.cache.as_ref()?;
        match cache.get::<User>(key).await {
            Ok(hit) => hit,
            Err(e) => {
                debug!("캐시 조회 실패 ({}): {}", key, e);
                None
            }
        }
    }

    async fn store_in_cache(&self, key: &str, user: &User) {
        if let Some(cache) = &self.cache {
            if let Err(e) = cache.set_with_expiry(key, user, self.cache_ttl_seconds).await {
                debug!("캐시 저장 실패 ({}): {}", key, e);
            }
        }
    }

    async fn exists(&self, filter: Document) -> AppResult<bool> {
        let count = self.collection()
            .count_documents(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn exists_by_username(&self, username: &str) -> AppResult<bool> {
        self.exists(doc! { "username": username }).await
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        self.exists(doc! { "email": email }).await
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let cache_key = id_cache_key(id);

        if let Some(cached) = self.cached(&cache_key).await {
            return Ok(Some(cached));
        }

        let user = self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref user) = user {
            self.store_in_cache(&cache_key, user).await;
        }

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let cache_key = username_cache_key(username);

        if let Some(cached) = self.cached(&cache_key).await {
            return Ok(Some(cached));
        }

        let user = self.collection()
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref user) = user {
            self.store_in_cache(&cache_key, user).await;
        }

        Ok(user)
    }

    async fn save(&self, user: NewUser) -> AppResult<User> {
        let id = self.next_id().await?;
        let user = user.with_id(id);

        // 유니크 인덱스 위반(E11000)도 DatabaseError로 전달됩니다
        self.collection()
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(user)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let cursor = self.collection()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect::<Vec<User>>()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
