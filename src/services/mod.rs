//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소 trait 객체를 생성자로 받고, 핸들러에는 `web::Data`로 공유됩니다.

pub mod users;
