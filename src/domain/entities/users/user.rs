//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 레코드가 거치는 세 단계를 서로 다른 타입으로 표현합니다.
//!
//! ```text
//! CreateUserRequest ──검증/정규화──▶ ValidatedUser ──created_at 기록──▶ NewUser ──save──▶ User
//! ```
//!
//! `created_at`은 저장 직전에만 채워지고, `id`는 저장소가 저장 시점에 할당하므로
//! "저장된 레코드만 `id`와 `created_at`을 가진다"는 불변식이 타입으로 보장됩니다.

use chrono::{DateTime, Utc};
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};

/// 사용자 식별자 (저장소가 첫 저장 시 할당하는 순번)
pub type UserId = i64;

/// 저장된 사용자 엔티티
///
/// MongoDB `users` 컬렉션의 문서와 1:1로 매핑되며,
/// Redis 캐시에는 같은 구조가 JSON으로 저장됩니다.
/// `created_at`은 BSON Date(밀리초 정밀도)로 저장됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: UserId,
    /// 사용자명 (unique, 대소문자 구분)
    pub username: String,
    /// 이메일 (unique, 소문자로 저장)
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// 생성 시간 (생성 시 한 번만 기록, 이후 변경 없음)
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

/// 검증과 정규화를 통과한 사용자 후보
///
/// 모든 필드가 이미 트리밍되어 있고, 이메일은 소문자입니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl ValidatedUser {
    /// 생성 시간을 기록하여 저장 가능한 레코드로 만듭니다.
    pub fn stamp(self, created_at: DateTime<Utc>) -> NewUser {
        let ValidatedUser {
            username,
            email,
            first_name,
            last_name,
        } = self;

        NewUser {
            username,
            email,
            first_name,
            last_name,
            created_at,
        }
    }
}

/// 저장소에 넘겨지는 아직 식별자가 없는 레코드
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    /// 저장소가 할당한 식별자를 붙여 엔티티로 변환합니다.
    pub fn with_id(self, id: UserId) -> User {
        let NewUser {
            username,
            email,
            first_name,
            last_name,
            created_at,
        } = self;

        User {
            id,
            username,
            email,
            first_name,
            last_name,
            created_at,
        }
    }
}
