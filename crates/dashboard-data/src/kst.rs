//! KST(+09:00) 고정 오프셋 시간 유틸리티.
//!
//! 한국은행 통계는 발행 기관의 달력일(KST) 기준으로 조회해야 하므로
//! 호스트 타임존에 의존하지 않고 고정 오프셋으로 날짜를 계산합니다.

use chrono::{DateTime, Duration, FixedOffset, Utc};

/// KST 오프셋 (초 단위, UTC+9)
const KST_OFFSET_SECS: i32 = 9 * 3600;

/// KST 고정 오프셋 반환.
pub fn kst_offset() -> FixedOffset {
    FixedOffset::east_opt(KST_OFFSET_SECS).expect("KST 오프셋 생성 실패")
}

/// 현재 KST 시각.
pub fn now_kst() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&kst_offset())
}

/// 종료일 기준 N일 전부터 종료일까지의 조회 구간을
/// (시작일, 종료일) `YYYYMMDD` 문자열 쌍으로 반환.
pub fn trailing_window(end: DateTime<FixedOffset>, days: i64) -> (String, String) {
    let start = end - Duration::days(days);
    (
        start.format("%Y%m%d").to_string(),
        end.format("%Y%m%d").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn kst_datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<FixedOffset> {
        kst_offset()
            .with_ymd_and_hms(y, mo, d, h, mi, 0)
            .unwrap()
    }

    #[test]
    fn test_trailing_window() {
        let end = kst_datetime(2026, 8, 6, 12, 0);
        let (start, end) = trailing_window(end, 7);
        assert_eq!(start, "20260730");
        assert_eq!(end, "20260806");
    }

    #[test]
    fn test_trailing_window_crosses_year_boundary() {
        let end = kst_datetime(2026, 1, 3, 9, 30);
        let (start, end) = trailing_window(end, 7);
        assert_eq!(start, "20251227");
        assert_eq!(end, "20260103");
    }

    #[test]
    fn test_now_kst_offset() {
        // UTC와의 차이가 정확히 9시간인지 확인
        let now = now_kst();
        assert_eq!(now.offset().local_minus_utc(), 9 * 3600);
    }
}
