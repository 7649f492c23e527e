//! # Core Module
//!
//! 서비스 전반에서 공유하는 핵심 타입을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 분류된 실패(검증/중복/조회)와 분류되지 않은 실패를 하나로 표현
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **자동 변환**: `ErrorContext` trait으로 외부 에러에 컨텍스트 부여
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 서비스 |
//! |--------|-----------|
//! | `@RestControllerAdvice` | `impl ResponseError for AppError` |
//! | `@ExceptionHandler(X.class)` | `AppError` 변형별 `match` |
//! | `@Autowired` 생성자 주입 | `UserService::new(repo)` 명시적 생성 |

pub mod errors;

pub use errors::*;
