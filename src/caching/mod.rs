//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 읽기 캐시와 JSON 기반 객체 직렬화를 제공합니다.
//! 사용자 리포지토리가 ID/사용자명 조회 결과를 TTL과 함께 보관할 때 사용합니다.
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 미설정 시 캐시 비활성화
//! CACHE_TTL_SECONDS=600
//! ```

pub mod redis;
