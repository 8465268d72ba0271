use crate::adapters::parser::parse_article_set;
use crate::domain::model::PaperRecord;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Default, Deserialize)]
struct ESearchResponse {
    #[serde(default)]
    esearchresult: ESearchResult,
}

#[derive(Debug, Default, Deserialize)]
struct ESearchResult {
    #[serde(default)]
    idlist: Vec<String>,
}

/// NCBI E-utilities 用戶端：esearch 取得 PMID，efetch 取得明細
#[derive(Debug, Clone)]
pub struct PubmedClient {
    client: Client,
    search_endpoint: String,
    fetch_endpoint: String,
    database: String,
    max_results: usize,
}

impl PubmedClient {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        // 未設定時沿用 reqwest 預設（不逾時）
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        Ok(Self {
            client: builder.build()?,
            search_endpoint: config.search_endpoint().to_string(),
            fetch_endpoint: config.fetch_endpoint().to_string(),
            database: config.database().to_string(),
            max_results: config.max_results(),
        })
    }

    /// 以查詢字串搜尋，回傳最多 `max_results` 筆 PMID（依回應順序）
    pub async fn search(&self, term: &str) -> Result<Vec<String>> {
        tracing::debug!("Making esearch request to: {}", self.search_endpoint);

        let retmax = self.max_results.to_string();
        let response = self
            .client
            .get(&self.search_endpoint)
            .query(&[
                ("db", self.database.as_str()),
                ("term", term),
                ("retmax", retmax.as_str()),
                ("retmode", "json"),
            ])
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!("esearch response status: {}", response.status());

        let body = response.text().await?;
        let parsed: ESearchResponse = serde_json::from_str(&body)?;
        let ids = parsed.esearchresult.idlist;

        tracing::info!("🔎 Search matched {} PubMed IDs", ids.len());
        tracing::debug!(?ids, "esearch returned PMIDs");
        Ok(ids)
    }

    /// 以單一批次請求取得所有 PMID 的明細。
    ///
    /// 空的 ID 清單仍會送出請求（`id` 參數為空字串）。
    pub async fn fetch_details(&self, ids: &[String]) -> Result<Vec<PaperRecord>> {
        if ids.is_empty() {
            tracing::warn!("No PubMed IDs to fetch, requesting an empty id list");
        }
        tracing::debug!("Making efetch request to: {}", self.fetch_endpoint);

        let joined = ids.join(",");
        let response = self
            .client
            .get(&self.fetch_endpoint)
            .query(&[
                ("db", self.database.as_str()),
                ("id", joined.as_str()),
                ("retmode", "xml"),
            ])
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!("efetch response status: {}", response.status());

        let xml = response.text().await?;
        let papers = parse_article_set(&xml)?;

        tracing::info!("📄 Fetched details for {} papers", papers.len());
        Ok(papers)
    }
}
