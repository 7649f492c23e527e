//! # 사용자 생성 요청 DTO
//!
//! 새로운 사용자 등록을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! Spring Boot의 `@RequestBody User` 파라미터에 해당합니다.
//!
//! 이 DTO는 형식 검증을 하지 않습니다. 필드 누락, 공백, 길이, 문자셋 등
//! 모든 규칙은 서비스 계층의 검증/정규화 단계에서 정해진 순서대로 적용되며,
//! 여기서는 JSON을 구조화된 후보 레코드로 옮기는 역할만 합니다.
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "username": "alice_01",
//!   "email": "Alice@Example.COM",
//!   "firstName": " Alice ",
//!   "lastName": "Doe"
//! }
//! ```
//!
//! 호출자가 `id`나 `createdAt`을 함께 보내더라도 무시됩니다.

use serde::{Deserialize, Serialize};

/// 사용자 생성 후보 레코드
///
/// 모든 필드가 `Option`인 이유는 누락되거나 `null`인 필드를
/// 역직렬화 실패가 아니라 `"<필드> is required"` 검증 실패로 보고하기 위해서입니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// 사용자명 (3-20자, 영문/숫자/언더스코어)
    #[serde(default)]
    pub username: Option<String>,

    /// 이메일 주소 (저장 시 소문자로 정규화)
    #[serde(default)]
    pub email: Option<String>,

    /// 이름 (최대 50자)
    #[serde(default)]
    pub first_name: Option<String>,

    /// 성 (최대 50자)
    #[serde(default)]
    pub last_name: Option<String>,
}

impl CreateUserRequest {
    /// 네 필드를 모두 채운 요청을 만듭니다.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            username: Some(username.into()),
            email: Some(email.into()),
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_fields() {
        let json = r#"{"username":"alice_01","email":"Alice@Example.COM","firstName":" Alice ","lastName":"Doe"}"#;
        let request: CreateUserRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request, CreateUserRequest::new("alice_01", "Alice@Example.COM", " Alice ", "Doe"));
    }

    #[test]
    fn test_missing_and_null_fields_become_none() {
        let json = r#"{"username":null,"email":"bob@example.com"}"#;
        let request: CreateUserRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.username, None);
        assert_eq!(request.email.as_deref(), Some("bob@example.com"));
        assert_eq!(request.first_name, None);
        assert_eq!(request.last_name, None);
    }

    #[test]
    fn test_caller_supplied_identity_is_ignored() {
        let json = r#"{"id":42,"createdAt":"2024-01-01T00:00:00Z","username":"carol","email":"c@example.com","firstName":"C","lastName":"D"}"#;
        let request: CreateUserRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request, CreateUserRequest::new("carol", "c@example.com", "C", "D"));
    }
}
