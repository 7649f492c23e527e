//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! Spring Framework의 JPA Entity와 유사한 역할을 하며, MongoDB 문서와 직접 매핑되는
//! 데이터 구조체들을 포함합니다.
//!
//! ## 엔티티 설계 원칙
//!
//! ### 단계별 타입 분리
//! 저장 전과 저장 후의 레코드를 서로 다른 타입으로 표현합니다.
//! `id`와 `created_at`은 `User`에만 존재하며, 호출자가 직접 채울 수 없습니다.
//!
//! ### MongoDB 통합
//! - **BSON 직렬화**: `serde`를 통한 자동 변환
//! - **`_id` 매핑**: 순번 식별자를 문서의 기본 키로 사용
//! - **인덱스**: `username`, `email` 유니크 인덱스 (리포지토리에서 생성)

pub mod users;
