//! 수집 통계 구조체.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 수집 작업 통계
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectionStats {
    /// 시도한 지표 수
    pub attempted: usize,
    /// 수집 성공한 지표 수
    pub collected: usize,
    /// 결측 처리된 지표 수
    pub missing: usize,
    /// 소요 시간
    #[serde(skip)]
    pub elapsed: Duration,
}

impl CollectionStats {
    /// 새 통계 객체 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 지표 하나의 수집 결과 반영
    pub fn record(&mut self, collected: bool) {
        self.attempted += 1;
        if collected {
            self.collected += 1;
        } else {
            self.missing += 1;
        }
    }

    /// 통계 요약 로그 출력
    pub fn log_summary(&self, operation: &str) {
        tracing::info!(
            operation = operation,
            attempted = self.attempted,
            collected = self.collected,
            missing = self.missing,
            elapsed = format!("{:.1}s", self.elapsed.as_secs_f64()),
            "수집 완료"
        );
    }
}
