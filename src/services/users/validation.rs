//! # 사용자 입력 검증/정규화
//!
//! 생성 요청을 [`ValidatedUser`]로 바꾸는 순수 함수입니다.
//! 규칙은 아래 순서로 적용되며 첫 번째 위반에서 즉시 실패합니다.
//!
//! 1. 요청 자체가 없으면 `"User data cannot be null"`
//! 2. 사용자명: 필수 → 길이 3-20 → `^[A-Za-z0-9_]+$`
//! 3. 이메일: 필수 → 형식 (트리밍된 원문 기준, 검증 후 소문자화)
//! 4. 이름, 성: 필수 → 50자 이하
//!
//! 트리밍은 U+0020 이하 문자만 잘라내며, 길이는 트리밍 후 문자(char) 단위로 셉니다.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidateLength;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::CreateUserRequest;
use crate::domain::entities::users::user::ValidatedUser;
use crate::utils::string_utils::{require_text, trim_lowercase};

pub const USERNAME_MIN_LENGTH: u64 = 3;
pub const USERNAME_MAX_LENGTH: u64 = 20;
pub const NAME_MAX_LENGTH: u64 = 50;

static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_]+$").expect("username pattern is valid")
});

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@([A-Za-z0-9.-]+\.[A-Za-z]{2,})$").expect("email pattern is valid")
});

/// 생성 요청을 검증하고 정규화된 후보 레코드를 반환합니다.
///
/// 이미 정규화된 레코드를 다시 넣으면 같은 결과가 나옵니다.
pub fn validate_and_normalize(request: Option<&CreateUserRequest>) -> AppResult<ValidatedUser> {
    let request = request
        .ok_or_else(|| AppError::InvalidUserData("User data cannot be null".to_string()))?;

    let username = validate_username(request.username.as_deref())?;
    let email = validate_email(request.email.as_deref())?;
    let first_name = validate_name(request.first_name.as_deref(), "First name")?;
    let last_name = validate_name(request.last_name.as_deref(), "Last name")?;

    Ok(ValidatedUser {
        username,
        email,
        first_name,
        last_name,
    })
}

fn validate_username(raw: Option<&str>) -> AppResult<String> {
    let username = require_text(raw, "Username")?.to_string();

    if !username.validate_length(Some(USERNAME_MIN_LENGTH), Some(USERNAME_MAX_LENGTH), None) {
        return Err(AppError::InvalidUserData(
            "Username must be between 3 and 20 characters".to_string(),
        ));
    }

    if !USERNAME_REGEX.is_match(&username) {
        return Err(AppError::InvalidUserData(
            "Username can only contain letters, numbers, and underscores".to_string(),
        ));
    }

    Ok(username)
}

fn validate_email(raw: Option<&str>) -> AppResult<String> {
    let email = require_text(raw, "Email")?;

    if !EMAIL_REGEX.is_match(email) {
        return Err(AppError::InvalidUserData("Invalid email format".to_string()));
    }

    Ok(trim_lowercase(email))
}

fn validate_name(raw: Option<&str>, field_name: &str) -> AppResult<String> {
    let name = require_text(raw, field_name)?.to_string();

    if !name.validate_length(None, Some(NAME_MAX_LENGTH), None) {
        return Err(AppError::InvalidUserData(format!(
            "{} cannot exceed 50 characters",
            field_name
        )));
    }

    Ok(name)
}
