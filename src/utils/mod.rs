//! 공통 유틸리티 모듈
//!
//! 여러 계층에서 재사용되는 헬퍼 함수들을 제공합니다.
//!
//! - [`string_utils`]: 공백 판정, 필수값 검증, 트리밍/소문자 정규화

pub mod string_utils;
