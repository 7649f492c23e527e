//! 데이터 및 서버 설정 관리 모듈
//!
//! 서버 바인딩, 저장소, 캐시, 요청 제한, CORS 설정을 환경 변수에서 읽습니다.
//! 잘못된 값은 기본값으로 대체하고 `error!` 로그를 남깁니다.

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use log::error;

/// 환경 변수를 파싱하고, 없거나 잘못된 값이면 기본값을 반환합니다.
fn parse_or_default<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match raw {
        Some(value) => value.trim().parse::<T>().unwrap_or_else(|e| {
            error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        None => default,
    }
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 변수로 현재 환경을 결정합니다. 기본값은 `Production`입니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        parse_or_default("PORT", read_env("PORT"), 8080)
    }

    pub fn host() -> String {
        read_env("HOST").unwrap_or_else(|| "127.0.0.1".to_string())
    }

    pub fn workers() -> usize {
        parse_or_default("WORKERS", read_env("WORKERS"), 4)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 사용자 레코드를 보관할 저장소 종류
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StorageBackend {
    MongoDb,
    Memory,
}

impl StorageBackend {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StorageBackend::Memory,
            "mongodb" | "mongo" => StorageBackend::MongoDb,
            other => {
                error!("알 수 없는 STORAGE_BACKEND: {}. mongodb 사용", other);
                StorageBackend::MongoDb
            }
        }
    }
}

pub struct DatabaseConfig;

impl DatabaseConfig {
    pub fn uri() -> String {
        read_env("MONGODB_URI").unwrap_or_else(|| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        read_env("DATABASE_NAME").unwrap_or_else(|| "user_registration_dev".to_string())
    }

    pub fn storage_backend() -> StorageBackend {
        read_env("STORAGE_BACKEND")
            .map(|v| StorageBackend::from_str(&v))
            .unwrap_or(StorageBackend::MongoDb)
    }
}

/// Redis 읽기 캐시 설정
///
/// `REDIS_URL`이 없으면 캐시는 비활성화됩니다.
pub struct CacheConfig;

impl CacheConfig {
    pub fn redis_url() -> Option<String> {
        read_env("REDIS_URL")
    }

    pub fn ttl_seconds() -> u64 {
        parse_or_default("CACHE_TTL_SECONDS", read_env("CACHE_TTL_SECONDS"), 600)
    }
}

/// 요청 제한 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub fn load() -> Self {
        Self::from_values(
            read_env("RATE_LIMIT_PER_SECOND"),
            read_env("RATE_LIMIT_BURST_SIZE"),
        )
    }

    fn from_values(per_second: Option<String>, burst_size: Option<String>) -> Self {
        Self {
            per_second: parse_or_default("RATE_LIMIT_PER_SECOND", per_second, 100),
            burst_size: parse_or_default("RATE_LIMIT_BURST_SIZE", burst_size, 200),
        }
    }
}

/// CORS 허용 Origin 설정
#[derive(Debug, Clone, PartialEq)]
pub enum CorsConfig {
    AnyOrigin,
    Origins(Vec<String>),
}

impl CorsConfig {
    pub fn load() -> Self {
        Self::from_value(read_env("CORS_ALLOWED_ORIGINS").as_deref())
    }

    /// 쉼표로 구분된 목록을 해석합니다. 비어 있거나 `*`가 포함되면 모든 Origin을 허용합니다.
    pub fn from_value(raw: Option<&str>) -> Self {
        let origins: Vec<String> = raw
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            CorsConfig::AnyOrigin
        } else {
            CorsConfig::Origins(origins)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("stage"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_parse_or_default_falls_back_on_invalid_value() {
        assert_eq!(parse_or_default("PORT", Some("9090".to_string()), 8080u16), 9090);
        assert_eq!(parse_or_default("PORT", Some("not-a-port".to_string()), 8080u16), 8080);
        assert_eq!(parse_or_default("PORT", None, 8080u16), 8080);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "127.0.0.1");
        }

        if env::var("WORKERS").is_err() {
            assert_eq!(ServerConfig::workers(), 4);
        }
    }

    #[test]
    fn test_storage_backend_from_string() {
        assert_eq!(StorageBackend::from_str("memory"), StorageBackend::Memory);
        assert_eq!(StorageBackend::from_str(" MongoDB "), StorageBackend::MongoDb);
        assert_eq!(StorageBackend::from_str("postgres"), StorageBackend::MongoDb);
    }

    #[test]
    fn test_rate_limit_config_values() {
        let defaults = RateLimitConfig::from_values(None, None);
        assert_eq!(defaults, RateLimitConfig { per_second: 100, burst_size: 200 });

        let custom = RateLimitConfig::from_values(Some("20".to_string()), Some("oops".to_string()));
        assert_eq!(custom, RateLimitConfig { per_second: 20, burst_size: 200 });
    }

    #[test]
    fn test_cors_config_from_value() {
        assert_eq!(CorsConfig::from_value(None), CorsConfig::AnyOrigin);
        assert_eq!(CorsConfig::from_value(Some("*")), CorsConfig::AnyOrigin);
        assert_eq!(
            CorsConfig::from_value(Some("http://localhost:3000, https://example.com ,")),
            CorsConfig::Origins(vec![
                "http://localhost:3000".to_string(),
                "https://example.com".to_string(),
            ])
        );
    }
}
