//! 데이터 소스 오류 타입.

use thiserror::Error;

/// 데이터 소스 관련 오류.
///
/// "조회 구간 내 데이터 없음"은 오류가 아니라 각 provider의
/// `Ok(None)` 반환값으로 표현됩니다.
#[derive(Debug, Error)]
pub enum DataError {
    /// HTTP 전송 오류 (타임아웃 포함)
    #[error("HTTP 요청 실패: {0}")]
    Http(#[from] reqwest::Error),

    /// API 비정상 응답 (HTTP 상태 오류)
    #[error("API 오류 [{provider}]: {message}")]
    Api {
        /// 데이터 소스 이름 (FRED, ECOS)
        provider: &'static str,
        /// 상태 코드와 응답 본문
        message: String,
    },

    /// 응답 본문 또는 값 파싱 오류
    #[error("파싱 실패: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, DataError>;
