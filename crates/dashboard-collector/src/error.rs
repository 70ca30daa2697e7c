//! 에러 타입 정의.

use std::fmt;

/// Collector 에러 타입
///
/// 데이터 소스 오류는 수집 경계에서 결측값으로 변환되므로 여기에는
/// 나타나지 않습니다. 실행을 실패시킬 수 있는 것은 스냅샷 기록뿐입니다.
#[derive(Debug)]
pub enum CollectorError {
    /// 파일 입출력 에러
    Io(std::io::Error),
    /// 스냅샷 직렬화 에러
    Serialization(serde_json::Error),
}

impl fmt::Display for CollectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for CollectorError {}

impl From<std::io::Error> for CollectorError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for CollectorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}

/// Result 타입 별칭
pub type Result<T> = std::result::Result<T, CollectorError>;
