//! 사용자 등록 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! 저장소(MongoDB 또는 인메모리)와 선택적 Redis 캐시를 준비한 뒤
//! `UserService`를 모든 워커에 공유합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use user_registration_service::caching::redis::RedisClient;
use user_registration_service::config::{
    CacheConfig, CorsConfig, DatabaseConfig, Environment, RateLimitConfig, ServerConfig,
    StorageBackend,
};
use user_registration_service::core::errors::AppResult;
use user_registration_service::db::Database;
use user_registration_service::repositories::users::{
    InMemoryUserRepository, MongoUserRepository, UserRepository,
};
use user_registration_service::routes::configure_all_routes;
use user_registration_service::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 등록 서비스 시작중... (환경: {:?})", Environment::current());

    let user_repo = initialize_repository()
        .await
        .map_err(|e| std::io::Error::other(format!("저장소 초기화 실패: {}", e)))?;

    let user_service = web::Data::new(UserService::new(user_repo));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
async fn start_http_server(user_service: web::Data<UserService>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/users", bind_address);

    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let cors_config = CorsConfig::load();
    info!("CORS 설정: {:?}", cors_config);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))

            .wrap(configure_cors(&cors_config))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            .app_data(user_service.clone())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// `STORAGE_BACKEND`에 따라 사용자 저장소를 준비합니다
///
/// MongoDB를 쓰는 경우 인덱스를 만들고, `REDIS_URL`이 있으면 읽기 캐시를 붙입니다.
/// Redis 연결에 실패하면 캐시 없이 계속 진행합니다.
async fn initialize_repository() -> AppResult<Arc<dyn UserRepository>> {
    match DatabaseConfig::storage_backend() {
        StorageBackend::Memory => {
            warn!("⚠️ 인메모리 저장소 사용: 재시작 시 데이터가 사라집니다");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
        StorageBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");
            let database = Arc::new(
                Database::new(&DatabaseConfig::uri(), &DatabaseConfig::database_name()).await?,
            );

            let cache = match CacheConfig::redis_url() {
                Some(url) => match RedisClient::new(&url).await {
                    Ok(client) => Some(Arc::new(client)),
                    Err(e) => {
                        warn!("Redis 연결 실패, 캐시 없이 진행합니다: {}", e);
                        None
                    }
                },
                None => {
                    info!("REDIS_URL 미설정: 캐시 비활성화");
                    None
                }
            };

            let repo = MongoUserRepository::new(database, cache, CacheConfig::ttl_seconds());
            repo.create_indexes().await?;
            info!("✅ 사용자 컬렉션 인덱스 준비 완료");

            Ok(Arc::new(repo))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// `CORS_ALLOWED_ORIGINS`가 없거나 `*`이면 모든 Origin을 허용합니다.
fn configure_cors(config: &CorsConfig) -> Cors {
    let cors = match config {
        CorsConfig::AnyOrigin => Cors::default().allow_any_origin(),
        CorsConfig::Origins(origins) => origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin)),
    };

    cors
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
