//! FRED (Federal Reserve Economic Data) API 클라이언트.
//!
//! 세인트루이스 연방준비은행의 FRED Open API를 통해 시계열
//! 관측치(observation)를 조회합니다.
//!
//! # 지원 데이터
//!
//! - 미국채 30년물 금리 (Series ID: DGS30)
//!
//! # 결측값 처리
//!
//! FRED는 휴장일 등 값이 없는 날짜에 숫자 대신 센티널 문자열 `.`을
//! 내려줍니다. 이 경우 오류가 아니라 `Ok(None)`으로 반환합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use dashboard_data::provider::fred::FredClient;
//!
//! let client = FredClient::from_env().ok_or("FRED_API_KEY 미설정")?;
//! let us_30y = client.fetch_latest_yield("DGS30").await?;
//! ```

use serde::Deserialize;

use crate::error::{DataError, Result};

/// FRED가 "데이터 없음"을 나타낼 때 사용하는 값.
const MISSING_VALUE_SENTINEL: &str = ".";

/// FRED API 클라이언트.
#[derive(Clone)]
pub struct FredClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl FredClient {
    /// 새로운 FRED API 클라이언트 생성.
    ///
    /// # Arguments
    /// * `api_key` - FRED Open API 인증키
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, "https://api.stlouisfed.org")
    }

    /// base URL을 지정하여 클라이언트 생성 (테스트/프록시용).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("HTTP 클라이언트 생성 실패"),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// 환경변수 `FRED_API_KEY`에서 인증키를 로드하여 클라이언트 생성.
    ///
    /// 키가 설정되지 않았으면 `None`을 반환하며, 이 경우 네트워크
    /// 호출 자체가 일어나지 않습니다.
    pub fn from_env() -> Option<Self> {
        std::env::var("FRED_API_KEY").ok().map(Self::new)
    }

    /// 시계열의 최신 관측치 1건 조회.
    ///
    /// 내림차순 정렬로 최신 1건만 요청합니다.
    ///
    /// # Returns
    /// - `Ok(Some(value))`: 최신 관측값
    /// - `Ok(None)`: 관측치가 없거나 값이 결측 센티널(`.`)
    /// - `Err(...)`: 전송/상태/파싱 오류
    pub async fn fetch_latest_yield(&self, series_id: &str) -> Result<Option<f64>> {
        #[derive(Deserialize)]
        struct ObservationsResponse {
            observations: Vec<RawObservation>,
        }

        #[derive(Deserialize)]
        struct RawObservation {
            date: String,
            value: String,
        }

        let url = format!("{}/fred/series/observations", self.base_url);

        tracing::debug!(series_id = series_id, "FRED API 요청");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("series_id", series_id),
                ("api_key", self.api_key.as_str()),
                ("file_type", "json"),
                ("sort_order", "desc"),
                ("limit", "1"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DataError::Api {
                provider: "FRED",
                message: format!("{} - {}", status, body),
            });
        }

        let data: ObservationsResponse = response
            .json()
            .await
            .map_err(|e| DataError::Parse(format!("FRED 응답 역직렬화 실패: {}", e)))?;

        let Some(obs) = data.observations.first() else {
            tracing::warn!(series_id = series_id, "FRED 관측치 없음");
            return Ok(None);
        };

        if obs.value == MISSING_VALUE_SENTINEL {
            tracing::warn!(series_id = series_id, date = %obs.date, "FRED 결측값 수신");
            return Ok(None);
        }

        let value: f64 = obs
            .value
            .parse()
            .map_err(|_| DataError::Parse(format!("FRED 관측값 파싱 실패: {}", obs.value)))?;

        tracing::info!(
            series_id = series_id,
            date = %obs.date,
            value = value,
            "FRED 금리 조회 완료"
        );
        Ok(Some(value))
    }
}
