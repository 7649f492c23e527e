//! HTTP 요청 핸들러 모듈
//!
//! actix-web 핸들러 함수들을 제공합니다. 핸들러는 `web::Data<UserService>`를
//! 추출해 서비스 결과를 JSON 응답으로 변환하며, 오류는 `AppError`를 그대로 반환합니다.

pub mod users;
