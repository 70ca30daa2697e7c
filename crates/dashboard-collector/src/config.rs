//! 환경변수 기반 설정 모듈.

use std::path::PathBuf;

/// Collector 전체 설정
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// FRED API 키 (없으면 금리 수집 건너뜀)
    pub fred_api_key: Option<String>,
    /// 한국은행 ECOS API 키 (없으면 환율 수집 건너뜀)
    pub bok_api_key: Option<String>,
    /// 스냅샷 출력 설정
    pub snapshot: SnapshotConfig,
    /// 금리 조회 설정
    pub yield_fetch: YieldFetchConfig,
    /// 환율 조회 설정
    pub exchange_rate: ExchangeRateConfig,
}

/// 스냅샷 출력 설정
#[derive(Debug, Clone)]
pub struct SnapshotConfig {
    /// 출력 파일 경로
    pub output_path: PathBuf,
}

/// 금리 조회 설정
#[derive(Debug, Clone)]
pub struct YieldFetchConfig {
    /// FRED 시계열 ID
    pub series_id: String,
    /// FRED base URL 재정의 (테스트/프록시용)
    pub base_url: Option<String>,
}

/// 환율 조회 설정
#[derive(Debug, Clone)]
pub struct ExchangeRateConfig {
    /// 통계표코드 (기본: 731Y001, 주요국 통화의 대원화환율)
    pub stat_code: String,
    /// 주기 (기본: D, 일일)
    pub cycle: String,
    /// 항목코드 (기본: 0000001, 원/미국달러)
    pub item_code: String,
    /// 조회 구간 일수 (주말/공휴일 대비 기본 7일)
    pub window_days: i64,
    /// 최대 조회 행 수
    pub row_limit: u32,
    /// ECOS base URL 재정의 (테스트/프록시용)
    pub base_url: Option<String>,
}

impl CollectorConfig {
    /// 환경변수에서 설정 로드
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            fred_api_key: std::env::var("FRED_API_KEY").ok(),
            bok_api_key: std::env::var("BOK_API_KEY").ok(),
            snapshot: SnapshotConfig {
                output_path: std::env::var("SNAPSHOT_OUTPUT_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("data.json")),
            },
            yield_fetch: YieldFetchConfig {
                series_id: env_var_or("FRED_SERIES_ID", "DGS30"),
                base_url: std::env::var("FRED_BASE_URL").ok(),
            },
            exchange_rate: ExchangeRateConfig {
                stat_code: env_var_or("ECOS_STAT_CODE", "731Y001"),
                cycle: env_var_or("ECOS_CYCLE", "D"),
                item_code: env_var_or("ECOS_ITEM_CODE", "0000001"),
                window_days: env_var_parse("ECOS_WINDOW_DAYS", 7),
                row_limit: env_var_parse("ECOS_ROW_LIMIT", 10),
                base_url: std::env::var("ECOS_BASE_URL").ok(),
            },
        }
    }
}

/// 환경변수에서 문자열 값 로드 (없으면 기본값 사용)
fn env_var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// 환경변수에서 값을 파싱 (실패 시 기본값 사용)
fn env_var_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
