//! 사용자 관련 DTO
//!
//! - [`request`]: 사용자 생성 요청, 가용성 조회 쿼리
//! - [`response`]: 사용자 응답, 가용성 응답

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
