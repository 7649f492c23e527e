//! 문자열 처리 유틸리티
//!
//! 입력 문자열의 공백 판정과 정리를 위한 헬퍼 함수들입니다.
//! 검증/정규화 로직과 가용성 조회에서 공통으로 사용합니다.

use crate::core::errors::AppError;

/// 공백 문자 판정
///
/// 줄바꿈 금지 공백(U+00A0, U+2007, U+202F)과 U+0085는 공백으로 보지 않고,
/// 제어 문자 U+001C-U+001F는 공백으로 봅니다.
fn is_blank_char(c: char) -> bool {
    match c {
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | '\u{1C}'..='\u{1F}' => true,
        '\u{85}' | '\u{A0}' | '\u{2007}' | '\u{202F}' => false,
        _ => c.is_whitespace(),
    }
}

/// 공백이 아닌 문자를 하나 이상 포함하는지 확인합니다.
///
/// `None`, 빈 문자열, 공백만 있는 문자열은 모두 `false`입니다.
///
/// ```rust,ignore
/// assert!(has_text(Some("  a ")));
/// assert!(!has_text(Some("   ")));
/// assert!(!has_text(None));
/// ```
pub fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|s| s.chars().any(|c| !is_blank_char(c)))
}

/// 앞뒤의 U+0020 이하 문자(공백과 제어 문자)만 잘라냅니다.
///
/// 그 밖의 유니코드 공백(U+00A0, U+2028 등)은 값의 일부로 남습니다.
pub fn trim_text(value: &str) -> &str {
    value.trim_matches(|c: char| c <= '\u{20}')
}

/// 필수 문자열 필드를 검증하고 앞뒤를 잘라낸 값을 반환합니다.
///
/// 값이 없거나 공백뿐이거나 잘라낸 결과가 비면 `"<field_name> is required"` 사유로 실패합니다.
pub fn require_text<'a>(value: Option<&'a str>, field_name: &str) -> Result<&'a str, AppError> {
    match value {
        Some(raw) if has_text(Some(raw)) && !trim_text(raw).is_empty() => Ok(trim_text(raw)),
        _ => Err(AppError::InvalidUserData(format!("{} is required", field_name))),
    }
}

/// 앞뒤를 잘라내고 소문자로 변환합니다. 이메일 정규화에 사용됩니다.
pub fn trim_lowercase(value: &str) -> String {
    trim_text(value).to_lowercase()
}
