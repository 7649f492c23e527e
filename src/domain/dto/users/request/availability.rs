//! 가용성 조회 요청 DTO

use serde::{Deserialize, Serialize};

/// `GET /api/users/check-email?email=...` 쿼리 파라미터
///
/// 파라미터가 없으면 빈 문자열로 처리되어 `available: false`가 됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmailAvailabilityQuery {
    #[serde(default)]
    pub email: String,
}
