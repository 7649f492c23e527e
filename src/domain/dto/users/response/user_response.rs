//! 사용자 응답 DTO
//!
//! 저장된 사용자 엔티티를 API 응답용 JSON으로 변환합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::{User, UserId};

/// 사용자 정보 응답
///
/// ```json
/// {
///   "id": 1,
///   "username": "alice_01",
///   "email": "alice@example.com",
///   "firstName": "Alice",
///   "lastName": "Doe",
///   "createdAt": "2024-05-01T09:30:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            username,
            email,
            first_name,
            last_name,
            created_at,
        } = user;

        Self {
            id,
            username,
            email,
            first_name,
            last_name,
            created_at,
        }
    }
}

/// 사용자명/이메일 가용성 응답
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub available: bool,
}

impl From<bool> for AvailabilityResponse {
    fn from(available: bool) -> Self {
        Self { available }
    }
}
