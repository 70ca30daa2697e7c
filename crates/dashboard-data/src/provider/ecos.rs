//! 한국은행 ECOS Open API 클라이언트.
//!
//! 한국은행 경제통계시스템(ECOS)의 통계조회(StatisticSearch) API를 통해
//! 시계열 통계를 조회합니다.
//!
//! # 지원 데이터
//!
//! - 원/달러 환율 (통계표코드 731Y001, 주기 D, 항목코드 0000001)
//!
//! # 조회 구간
//!
//! 주말/공휴일이거나 당일 값이 아직 고시되지 않은 시점에는 당일 조회만으로는
//! 데이터가 없을 수 있습니다. 호출자는 며칠 전부터 당일까지의 구간을 조회한 뒤
//! 가장 마지막(최신) 행을 사용합니다. 구간 계산은 [`crate::kst`]를 사용합니다.

use serde::Deserialize;

use crate::error::{DataError, Result};

/// ECOS API 클라이언트.
#[derive(Clone)]
pub struct EcosClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl EcosClient {
    /// 새로운 ECOS API 클라이언트 생성.
    ///
    /// # Arguments
    /// * `api_key` - 한국은행 Open API 인증키
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, "https://ecos.bok.or.kr")
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

    /// 환경변수 `BOK_API_KEY`에서 인증키를 로드하여 클라이언트 생성.
    ///
    /// 키가 설정되지 않았으면 `None`을 반환하며, 이 경우 네트워크
    /// 호출 자체가 일어나지 않습니다.
    pub fn from_env() -> Option<Self> {
        std::env::var("BOK_API_KEY").ok().map(Self::new)
    }

    /// 조회 구간 내 가장 최신 통계값 조회.
    ///
    /// 응답의 행 목록은 날짜 오름차순으로 내려오므로 마지막 행을
    /// 최신값으로 사용합니다. 통계값의 쉼표 자릿수 구분은 제거 후
    /// 파싱합니다.
    ///
    /// # Arguments
    /// * `stat_code` - 통계표코드 (예: 731Y001)
    /// * `cycle` - 주기 (예: D)
    /// * `item_code` - 항목코드 (예: 0000001)
    /// * `start_date` - 조회 시작일 (YYYYMMDD)
    /// * `end_date` - 조회 종료일 (YYYYMMDD)
    /// * `row_limit` - 최대 조회 행 수
    ///
    /// # Returns
    /// - `Ok(Some(value))`: 구간 내 최신 통계값
    /// - `Ok(None)`: 구간 내 데이터 없음 (응답에 결과 블록 없음 포함)
    /// - `Err(...)`: 전송/상태/파싱 오류
    pub async fn fetch_latest_rate(
        &self,
        stat_code: &str,
        cycle: &str,
        item_code: &str,
        start_date: &str,
        end_date: &str,
        row_limit: u32,
    ) -> Result<Option<f64>> {
        #[derive(Deserialize)]
        struct SearchResponse {
            #[serde(rename = "StatisticSearch")]
            statistic_search: Option<SearchBlock>,
            // 인증 실패나 구간 내 데이터 없음은 RESULT 블록으로 내려온다
            #[serde(rename = "RESULT")]
            result: Option<ResultBlock>,
        }

        #[derive(Deserialize)]
        struct SearchBlock {
            row: Option<Vec<RawRow>>,
        }

        #[derive(Deserialize)]
        struct RawRow {
            #[serde(rename = "TIME")]
            time: String,
            #[serde(rename = "DATA_VALUE")]
            value: String,
        }

        #[derive(Deserialize)]
        struct ResultBlock {
            #[serde(rename = "CODE", default)]
            code: Option<String>,
            #[serde(rename = "MESSAGE", default)]
            message: Option<String>,
        }

        let url = format!(
            "{}/api/StatisticSearch/{}/json/kr/1/{}/{}/{}/{}/{}/{}",
            self.base_url,
            self.api_key,
            row_limit,
            stat_code,
            cycle,
            start_date,
            end_date,
            item_code
        );

        tracing::debug!(
            stat_code = stat_code,
            cycle = cycle,
            start_date = start_date,
            end_date = end_date,
            "ECOS API 요청"
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DataError::Api {
                provider: "ECOS",
                message: format!("{} - {}", status, body),
            });
        }

        let data: SearchResponse = response
            .json()
            .await
            .map_err(|e| DataError::Parse(format!("ECOS 응답 역직렬화 실패: {}", e)))?;

        let rows = data
            .statistic_search
            .and_then(|block| block.row)
            .unwrap_or_default();

        let Some(last) = rows.last() else {
            match data.result {
                Some(r) => tracing::warn!(
                    code = r.code.as_deref().unwrap_or("-"),
                    message = r.message.as_deref().unwrap_or("-"),
                    "ECOS 조회 결과 없음"
                ),
                None => tracing::warn!(
                    stat_code = stat_code,
                    start_date = start_date,
                    end_date = end_date,
                    "ECOS 조회 구간 내 데이터 없음"
                ),
            }
            return Ok(None);
        };

        let value = parse_numeric(&last.value)
            .ok_or_else(|| DataError::Parse(format!("ECOS 통계값 파싱 실패: {}", last.value)))?;

        tracing::info!(date = %last.time, value = value, "ECOS 환율 조회 완료");
        Ok(Some(value))
    }
}

/// 쉼표 자릿수 구분이 포함된 숫자 문자열 파싱.
fn parse_numeric(s: &str) -> Option<f64> {
    s.replace(',', "").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_PATH: &str =
        "/api/StatisticSearch/test-key/json/kr/1/10/731Y001/D/20260101/20260108/0000001";

    fn client_for(server: &mockito::ServerGuard) -> EcosClient {
        EcosClient::with_base_url("test-key", server.url())
    }

    async fn fetch(client: &EcosClient) -> Result<Option<f64>> {
        client
            .fetch_latest_rate("731Y001", "D", "0000001", "20260101", "20260108", 10)
            .await
    }

    #[tokio::test]
    async fn test_latest_row_is_selected_and_comma_stripped() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", SEARCH_PATH)
            .with_status(200)
            .with_body(
                r#"{"StatisticSearch":{"list_total_count":2,"row":[
                    {"TIME":"20260101","DATA_VALUE":"1,300.50"},
                    {"TIME":"20260102","DATA_VALUE":"1,305.25"}
                ]}}"#,
            )
            .create_async()
            .await;

        let result = fetch(&client_for(&server)).await;
        assert_eq!(result.unwrap(), Some(1305.25));
    }

    #[tokio::test]
    async fn test_missing_search_block() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", SEARCH_PATH)
            .with_status(200)
            .with_body(
                r#"{"RESULT":{"CODE":"INFO-200","MESSAGE":"해당하는 데이터가 없습니다."}}"#,
            )
            .create_async()
            .await;

        let result = fetch(&client_for(&server)).await;
        assert_eq!(result.unwrap(), None);
    }

    #[tokio::test]
    async fn test_empty_row_list() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", SEARCH_PATH)
            .with_status(200)
            .with_body(r#"{"StatisticSearch":{"list_total_count":0,"row":[]}}"#)
            .create_async()
            .await;

        let result = fetch(&client_for(&server)).await;
        assert_eq!(result.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unparseable_value() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", SEARCH_PATH)
            .with_status(200)
            .with_body(
                r#"{"StatisticSearch":{"row":[{"TIME":"20260102","DATA_VALUE":"없음"}]}}"#,
            )
            .create_async()
            .await;

        let result = fetch(&client_for(&server)).await;
        assert!(matches!(result, Err(DataError::Parse(_))));
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", SEARCH_PATH)
            .with_status(500)
            .with_body("internal error")
            .create_async()
            .await;

        let result = fetch(&client_for(&server)).await;
        assert!(matches!(result, Err(DataError::Api { provider: "ECOS", .. })));
    }

    #[test]
    fn test_parse_numeric() {
        assert_eq!(parse_numeric("1,300.50"), Some(1300.5));
        assert_eq!(parse_numeric("1305.25"), Some(1305.25));
        assert_eq!(parse_numeric("1,234,567.8"), Some(1234567.8));
        assert_eq!(parse_numeric("없음"), None);
        assert_eq!(parse_numeric(""), None);
    }
}
