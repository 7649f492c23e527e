//! # 사용자 등록 서비스 구현
//!
//! 사용자 등록과 조회에 대한 비즈니스 규칙을 담당합니다.
//! Spring Framework의 `@Service` 클래스에 해당하며, 저장소는 생성자로 주입받습니다.
//!
//! ## 등록 흐름
//!
//! ```text
//! CreateUserRequest
//!        │ validate_and_normalize   (InvalidUserData)
//!        ▼
//! ValidatedUser
//!        │ check_for_duplicates     (DuplicateUser: username 먼저, 그다음 email)
//!        ▼
//!    NewUser (created_at = now)
//!        │ UserRepository::save     (DatabaseError)
//!        ▼
//!      User
//! ```
//!
//! 중복 검사는 조회 후 저장 방식이라 동시 요청을 완전히 막지 못합니다.
//! 경쟁에서 진 요청은 저장소 유니크 제약에 걸려 `DatabaseError`로 끝납니다.

use std::sync::Arc;
use chrono::{SubsecRound, Utc};
use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::users::request::CreateUserRequest,
        entities::users::user::{User, UserId, ValidatedUser},
    },
    repositories::users::user_repo::UserRepository,
    utils::string_utils::{has_text, trim_lowercase, trim_text},
};
use super::validation::validate_and_normalize;

/// 사용자 등록 서비스
///
/// 상태는 저장소 핸들뿐이므로 `web::Data`로 모든 워커가 공유합니다.
///
/// ```rust,ignore
/// let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
/// let user = service
///     .create_user(Some(&CreateUserRequest::new("alice_01", "Alice@Example.COM", "Alice", "Doe")))
///     .await?;
/// assert_eq!(user.email, "alice@example.com");
/// ```
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 새 사용자를 등록합니다.
    ///
    /// # Errors
    ///
    /// * `InvalidUserData` - 검증 규칙 위반 (첫 번째 위반 사유)
    /// * `DuplicateUser` - 사용자명 또는 이메일 중복
    /// * `DatabaseError` - 저장소 오류, 동시 삽입으로 인한 유니크 제약 위반 포함
    pub async fn create_user(&self, request: Option<&CreateUserRequest>) -> AppResult<User> {
        let validated = validate_and_normalize(request)?;

        self.check_for_duplicates(&validated).await?;

        // BSON Date 정밀도(밀리초)에 맞춰 저장 전후 값이 같도록 합니다
        self.user_repo.save(validated.stamp(Utc::now().trunc_subsecs(3))).await
    }

    /// 사용자명 중복을 먼저 확인하고, 그다음 이메일 중복을 확인합니다.
    async fn check_for_duplicates(&self, user: &ValidatedUser) -> AppResult<()> {
        if self.user_repo.exists_by_username(&user.username).await? {
            return Err(AppError::DuplicateUser(format!(
                "Username '{}' is already taken",
                user.username
            )));
        }

        if self.user_repo.exists_by_email(&user.email).await? {
            return Err(AppError::DuplicateUser(format!(
                "Email '{}' is already registered",
                user.email
            )));
        }

        Ok(())
    }

    pub async fn find_by_id(&self, id: UserId) -> AppResult<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::UserNotFound(format!("User not found with ID: {}", id)))
    }

    /// 사용자명으로 조회합니다. 입력값은 정규화하지 않고 그대로 비교합니다.
    pub async fn find_by_username(&self, username: &str) -> AppResult<User> {
        self.user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                AppError::UserNotFound(format!("User not found with username: {}", username))
            })
    }

    pub async fn find_all_users(&self) -> AppResult<Vec<User>> {
        self.user_repo.find_all().await
    }

    /// 공백이면 `false`, 아니면 트리밍한 사용자명이 아직 사용되지 않았는지 반환합니다.
    pub async fn is_username_available(&self, username: &str) -> AppResult<bool> {
        if !has_text(Some(username)) {
            return Ok(false);
        }

        Ok(!self.user_repo.exists_by_username(trim_text(username)).await?)
    }

    /// 공백이면 `false`, 아니면 트리밍 후 소문자화한 이메일이 아직 등록되지 않았는지 반환합니다.
    pub async fn is_email_available(&self, email: &str) -> AppResult<bool> {
        if !has_text(Some(email)) {
            return Ok(false);
        }

        Ok(!self.user_repo.exists_by_email(&trim_lowercase(email)).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::domain::entities::users::user::NewUser;
    use crate::repositories::users::memory_user_repo::InMemoryUserRepository;

    fn service() -> UserService {
        UserService::new(Arc::new(InMemoryUserRepository::new()))
    }

    fn request(username: &str, email: &str) -> CreateUserRequest {
        CreateUserRequest::new(username, email, "Test", "User")
    }

    /// 모든 연산이 저장소 오류로 실패하는 테스트 더블
    struct FailingRepository;

    #[async_trait]
    impl UserRepository for FailingRepository {
        async fn exists_by_username(&self, _: &str) -> AppResult<bool> {
            Err(AppError::DatabaseError("connection refused".to_string()))
        }
        async fn exists_by_email(&self, _: &str) -> AppResult<bool> {
            Err(AppError::DatabaseError("connection refused".to_string()))
        }
        async fn find_by_id(&self, _: UserId) -> AppResult<Option<User>> {
            Err(AppError::DatabaseError("connection refused".to_string()))
        }
        async fn find_by_username(&self, _: &str) -> AppResult<Option<User>> {
            Err(AppError::DatabaseError("connection refused".to_string()))
        }
        async fn save(&self, _: NewUser) -> AppResult<User> {
            Err(AppError::DatabaseError("connection refused".to_string()))
        }
        async fn find_all(&self) -> AppResult<Vec<User>> {
            Err(AppError::DatabaseError("connection refused".to_string()))
        }
    }

    #[actix_web::test]
    async fn test_create_user_normalizes_and_persists() {
        let service = service();
        let req = CreateUserRequest::new("alice_01", "Alice@Example.COM", " Alice ", "Doe");

        let before = Utc::now().trunc_subsecs(3);
        let user = service.create_user(Some(&req)).await.unwrap();

        assert_eq!(user.username, "alice_01");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.first_name, "Alice");
        assert_eq!(user.last_name, "Doe");
        assert!(user.created_at >= before);
        assert_eq!(user.created_at.timestamp_subsec_nanos() % 1_000_000, 0);
        assert_eq!(service.find_by_id(user.id).await.unwrap(), user);
    }

    #[actix_web::test]
    async fn test_create_user_rejects_invalid_input_without_saving() {
        let service = service();

        let err = service
            .create_user(Some(&request("alice_01", "not-an-email")))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidUserData(ref r) if r == "Invalid email format"));
        assert!(service.find_all_users().await.unwrap().is_empty());

        let err = service.create_user(None).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidUserData(ref r) if r == "User data cannot be null"));
    }

    #[actix_web::test]
    async fn test_duplicate_username_is_rejected() {
        let service = service();
        service.create_user(Some(&request("alice_01", "a@x.com"))).await.unwrap();

        let err = service
            .create_user(Some(&request(" alice_01 ", "b@x.com")))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::DuplicateUser(ref r) if r == "Username 'alice_01' is already taken"
        ));
    }

    #[actix_web::test]
    async fn test_duplicate_email_is_compared_after_lowercasing() {
        let service = service();
        service.create_user(Some(&request("alice_01", "A@X.com"))).await.unwrap();

        let err = service
            .create_user(Some(&request("bob", "a@x.COM")))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::DuplicateUser(ref r) if r == "Email 'a@x.com' is already registered"
        ));
    }

    #[actix_web::test]
    async fn test_username_conflict_is_reported_before_email_conflict() {
        let service = service();
        service.create_user(Some(&request("alice_01", "a@x.com"))).await.unwrap();

        let err = service
            .create_user(Some(&request("alice_01", "a@x.com")))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::DuplicateUser(ref r) if r.starts_with("Username")));
        assert_eq!(service.find_all_users().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_usernames_are_case_sensitive() {
        let service = service();
        service.create_user(Some(&request("Alice", "one@x.com"))).await.unwrap();

        assert!(service.create_user(Some(&request("alice", "two@x.com"))).await.is_ok());
        assert_eq!(service.find_all_users().await.unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_lookups_report_not_found() {
        let service = service();

        let err = service.find_by_id(999).await.unwrap_err();
        assert!(matches!(err, AppError::UserNotFound(ref r) if r == "User not found with ID: 999"));

        let err = service.find_by_username("ghost").await.unwrap_err();
        assert!(matches!(
            err,
            AppError::UserNotFound(ref r) if r == "User not found with username: ghost"
        ));
    }

    #[actix_web::test]
    async fn test_find_by_username_returns_stored_user() {
        let service = service();
        let created = service.create_user(Some(&request("carol", "c@x.com"))).await.unwrap();

        assert_eq!(service.find_by_username("carol").await.unwrap(), created);
    }

    #[actix_web::test]
    async fn test_availability_checks() {
        let service = service();
        service.create_user(Some(&request("alice_01", "alice@x.com"))).await.unwrap();

        assert!(!service.is_username_available("alice_01").await.unwrap());
        assert!(!service.is_username_available("  alice_01  ").await.unwrap());
        assert!(service.is_username_available("bob").await.unwrap());
        assert!(!service.is_username_available("   ").await.unwrap());
        assert!(!service.is_username_available("").await.unwrap());

        assert!(!service.is_email_available(" ALICE@X.com ").await.unwrap());
        assert!(service.is_email_available("bob@x.com").await.unwrap());
        assert!(!service.is_email_available("").await.unwrap());
    }

    #[actix_web::test]
    async fn test_availability_keeps_non_breaking_space() {
        let service = service();
        service.create_user(Some(&request("alice_01", "alice@x.com"))).await.unwrap();

        // U+00A0은 잘리지 않으므로 다른 사용자명으로 조회됩니다
        assert!(service.is_username_available("\u{a0}alice_01").await.unwrap());
        assert!(!service.is_username_available("\u{2028}").await.unwrap());
    }

    #[actix_web::test]
    async fn test_repository_faults_propagate() {
        let service = UserService::new(Arc::new(FailingRepository));

        let err = service.create_user(Some(&request("alice_01", "a@x.com"))).await.unwrap_err();
        assert!(matches!(err, AppError::DatabaseError(_)));

        assert!(matches!(service.find_by_id(1).await, Err(AppError::DatabaseError(_))));
        assert!(matches!(service.find_all_users().await, Err(AppError::DatabaseError(_))));
        assert!(matches!(
            service.is_username_available("alice").await,
            Err(AppError::DatabaseError(_))
        ));
        assert!(matches!(
            service.is_email_available("a@x.com").await,
            Err(AppError::DatabaseError(_))
        ));
    }

    #[actix_web::test]
    async fn test_blank_availability_short_circuits_before_repository() {
        let service = UserService::new(Arc::new(FailingRepository));

        assert!(!service.is_username_available(" ").await.unwrap());
        assert!(!service.is_email_available("").await.unwrap());
    }

    #[actix_web::test]
    async fn test_invalid_input_short_circuits_before_repository() {
        let service = UserService::new(Arc::new(FailingRepository));

        let err = service.create_user(Some(&request("ab", "a@x.com"))).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidUserData(_)));
    }
}
