//! # Configuration Module
//!
//! 서비스의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@Configuration` 클래스와 유사한 역할을 수행하며,
//! 환경 변수 기반의 설정값들을 한곳에서 읽습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 저장소, 캐시, 요청 제한, CORS 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{DatabaseConfig, ServerConfig, StorageBackend};
//!
//! let address = ServerConfig::bind_address();
//! if DatabaseConfig::storage_backend() == StorageBackend::Memory {
//!     // 외부 저장소 없이 실행
//! }
//! ```
//!
//! ## 환경 변수
//!
//! ```bash
//! # 프로필 (.env.dev / .env.prod / .env)
//! export PROFILE="dev"
//! export ENVIRONMENT="development"
//!
//! # 서버
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export WORKERS="4"
//!
//! # 저장소
//! export STORAGE_BACKEND="mongodb"      # mongodb | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="user_registration_dev"
//!
//! # 캐시 (미설정 시 비활성화)
//! export REDIS_URL="redis://localhost:6379"
//! export CACHE_TTL_SECONDS="600"
//!
//! # 요청 제한 / CORS
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! export CORS_ALLOWED_ORIGINS="*"
//! ```
//!
//! ## Spring과의 비교
//!
//! | Spring | Rust (이 프로젝트) |
//! |--------|-------------------|
//! | `@Configuration` | `pub struct Config` |
//! | `@Value("${property}")` | `env::var("PROPERTY")` |
//! | `@Profile("dev")` | `PROFILE=dev` + `.env.dev` |
//! | `application.yml` | `.env` 파일 |

pub mod data_config;

pub use data_config::*;
