//! 스냅샷 레코드와 파일 기록.
//!
//! 대시보드가 읽는 단일 JSON 파일을 매 실행마다 전체 덮어쓰기합니다.
//! 이전 버전 백업이나 부분 기록은 없습니다.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::path::Path;

use crate::Result;

/// 수집 결과 스냅샷 (메모리 표현).
///
/// 수집 실패는 `None`으로 유지하고, 디스크 기록 시점에만
/// [`Snapshot::to_record`]에서 센티널로 변환합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// 수집 시각 (KST)
    pub taken_at: DateTime<FixedOffset>,
    /// 미국채 30년물 금리 (%)
    pub us_30y: Option<f64>,
    /// 원/달러 환율
    pub usd_krw: Option<f64>,
}

/// 디스크 기록용 레코드.
///
/// 대시보드 계약상 두 숫자 필드는 항상 존재해야 하므로 결측값은
/// 0.0으로 기록합니다. 금리와 환율은 실제로 0이 될 수 없는 값입니다.
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotRecord {
    /// 갱신 시각 ("YYYY-MM-DD HH:MM KST")
    pub updated_at: String,
    /// 미국채 30년물 금리 (결측 시 0.0)
    pub us_30y: f64,
    /// 원/달러 환율 (결측 시 0.0)
    pub usd_krw: f64,
}

impl Snapshot {
    /// 새 스냅샷 생성.
    pub fn new(
        taken_at: DateTime<FixedOffset>,
        us_30y: Option<f64>,
        usd_krw: Option<f64>,
    ) -> Self {
        Self {
            taken_at,
            us_30y,
            usd_krw,
        }
    }

    /// 디스크 기록용 레코드로 변환.
    pub fn to_record(&self) -> SnapshotRecord {
        SnapshotRecord {
            updated_at: format!("{} KST", self.taken_at.format("%Y-%m-%d %H:%M")),
            us_30y: self.us_30y.unwrap_or(0.0),
            usd_krw: self.usd_krw.unwrap_or(0.0),
        }
    }
}

/// 스냅샷을 JSON 파일로 기록 (전체 덮어쓰기).
///
/// serde_json은 UTF-8 문자열을 이스케이프하지 않고 그대로 기록합니다.
pub fn write_snapshot(snapshot: &Snapshot, path: &Path) -> Result<()> {
    let record = snapshot.to_record();
    let json = serde_json::to_string(&record)?;
    std::fs::write(path, &json)?;

    tracing::info!(path = %path.display(), record = %json, "스냅샷 저장 완료");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use dashboard_data::kst;
    use tempfile::tempdir;

    fn fixed_kst_time() -> DateTime<FixedOffset> {
        kst::kst_offset()
            .with_ymd_and_hms(2026, 8, 6, 12, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_to_record_with_values() {
        let snapshot = Snapshot::new(fixed_kst_time(), Some(4.9), Some(1310.0));
        let record = snapshot.to_record();
        assert_eq!(record.updated_at, "2026-08-06 12:30 KST");
        assert_eq!(record.us_30y, 4.9);
        assert_eq!(record.usd_krw, 1310.0);
    }

    #[test]
    fn test_to_record_missing_values_become_zero() {
        let snapshot = Snapshot::new(fixed_kst_time(), None, None);
        let record = snapshot.to_record();
        assert_eq!(record.us_30y, 0.0);
        assert_eq!(record.usd_krw, 0.0);
    }

    #[test]
    fn test_write_snapshot_overwrites_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");

        let first = Snapshot::new(fixed_kst_time(), Some(4.9), Some(1310.0));
        write_snapshot(&first, &path).unwrap();

        let second = Snapshot::new(fixed_kst_time(), Some(5.1), None);
        write_snapshot(&second, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            r#"{"updated_at":"2026-08-06 12:30 KST","us_30y":5.1,"usd_krw":0.0}"#
        );
    }
}
