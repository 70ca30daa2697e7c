//! 매크로 지표 스냅샷 수집 모듈.
//!
//! ## 데이터 소스
//!
//! ### FRED (인증 필요)
//! - 미국채 30년물 금리 (DGS30)
//!
//! ### 한국은행 ECOS (인증 필요)
//! - 원/달러 환율 (731Y001/D/0000001)
//!
//! 두 수집은 서로 독립적입니다. API 키가 없거나 조회가 실패한 지표는
//! 결측(`None`)으로 남고, 다른 지표 수집과 스냅샷 기록은 계속 진행됩니다.

use chrono::{DateTime, FixedOffset};
use std::time::Instant;
use tracing::warn;

use dashboard_data::kst;
use dashboard_data::provider::{EcosClient, FredClient};

use crate::config::CollectorConfig;
use crate::snapshot::Snapshot;
use crate::stats::CollectionStats;

/// 매크로 지표 스냅샷 수집.
///
/// 현재 KST 시각을 기준으로 금리와 환율을 순차 수집합니다.
/// 수집 실패는 결측으로 처리되며 에러를 반환하지 않습니다.
pub async fn collect_snapshot(config: &CollectorConfig) -> (Snapshot, CollectionStats) {
    let fred = build_fred_client(config);
    let ecos = build_ecos_client(config);
    collect_snapshot_at(fred.as_ref(), ecos.as_ref(), config, kst::now_kst()).await
}

/// 지정한 클라이언트와 시각으로 스냅샷 수집.
///
/// 클라이언트와 기준 시각을 직접 주입받는 진입점으로, 테스트에서
/// 고정 시각과 mock 서버를 사용할 때 쓰입니다.
pub async fn collect_snapshot_at(
    fred: Option<&FredClient>,
    ecos: Option<&EcosClient>,
    config: &CollectorConfig,
    now: DateTime<FixedOffset>,
) -> (Snapshot, CollectionStats) {
    let started = Instant::now();
    let mut stats = CollectionStats::new();

    let us_30y = fetch_yield(fred, config).await;
    stats.record(us_30y.is_some());

    let usd_krw = fetch_exchange_rate(ecos, config, now).await;
    stats.record(usd_krw.is_some());

    stats.elapsed = started.elapsed();

    (Snapshot::new(now, us_30y, usd_krw), stats)
}

/// FRED 클라이언트 생성 (API 키 없으면 None).
fn build_fred_client(config: &CollectorConfig) -> Option<FredClient> {
    let Some(key) = config.fred_api_key.as_deref() else {
        warn!("FRED_API_KEY가 설정되지 않았습니다. 금리 수집을 건너뜁니다.");
        return None;
    };
    Some(match config.yield_fetch.base_url.as_deref() {
        Some(base) => FredClient::with_base_url(key, base),
        None => FredClient::new(key),
    })
}

/// ECOS 클라이언트 생성 (API 키 없으면 None).
fn build_ecos_client(config: &CollectorConfig) -> Option<EcosClient> {
    let Some(key) = config.bok_api_key.as_deref() else {
        warn!("BOK_API_KEY가 설정되지 않았습니다. 환율 수집을 건너뜁니다.");
        return None;
    };
    Some(match config.exchange_rate.base_url.as_deref() {
        Some(base) => EcosClient::with_base_url(key, base),
        None => EcosClient::new(key),
    })
}

/// 미국채 30년물 금리 수집.
async fn fetch_yield(client: Option<&FredClient>, config: &CollectorConfig) -> Option<f64> {
    let client = client?;
    match client.fetch_latest_yield(&config.yield_fetch.series_id).await {
        Ok(Some(value)) => Some(value),
        Ok(None) => {
            warn!(series_id = %config.yield_fetch.series_id, "금리 최신 관측치 없음");
            None
        }
        Err(e) => {
            warn!(error = %e, "금리 수집 실패");
            None
        }
    }
}

/// 원/달러 환율 수집.
///
/// 주말/공휴일 대비로 KST 기준 조회 구간을 두고 가장 최신 행을 사용합니다.
async fn fetch_exchange_rate(
    client: Option<&EcosClient>,
    config: &CollectorConfig,
    now: DateTime<FixedOffset>,
) -> Option<f64> {
    let client = client?;
    let fx = &config.exchange_rate;
    let (start_date, end_date) = kst::trailing_window(now, fx.window_days);

    match client
        .fetch_latest_rate(
            &fx.stat_code,
            &fx.cycle,
            &fx.item_code,
            &start_date,
            &end_date,
            fx.row_limit,
        )
        .await
    {
        Ok(Some(value)) => Some(value),
        Ok(None) => {
            warn!(
                start_date = %start_date,
                end_date = %end_date,
                "환율 조회 구간 내 데이터 없음"
            );
            None
        }
        Err(e) => {
            warn!(error = %e, "환율 수집 실패");
            None
        }
    }
}
