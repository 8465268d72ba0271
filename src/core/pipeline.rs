use crate::adapters::pubmed::PubmedClient;
use crate::adapters::report::{render_console, render_csv};
use crate::core::{ConfigProvider, PaperRecord, Pipeline, Storage, TransformResult};
use crate::domain::filter::{filter_non_academic, AffiliationClassifier};
use crate::utils::error::Result;
use std::io::Write;

/// 單一查詢的 PubMed 管道：搜尋 → 取得明細 → 過濾 → 輸出
pub struct PubmedPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: PubmedClient,
    classifier: AffiliationClassifier,
    query: String,
}

impl<S: Storage, C: ConfigProvider> PubmedPipeline<S, C> {
    pub fn new(storage: S, config: C, query: impl Into<String>) -> Result<Self> {
        let client = PubmedClient::from_config(&config)?;
        let classifier = AffiliationClassifier::from_keywords(&config.academic_keywords())?;

        Ok(Self {
            storage,
            config,
            client,
            classifier,
            query: query.into(),
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for PubmedPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<PaperRecord>> {
        tracing::info!("🚀 Searching PubMed for: {}", self.query);

        let ids = self.client.search(&self.query).await?;
        self.client.fetch_details(&ids).await
    }

    async fn transform(&self, papers: Vec<PaperRecord>) -> Result<TransformResult> {
        tracing::info!("🔧 Filtering {} papers for non-academic authors", papers.len());

        let rows = filter_non_academic(&papers, &self.classifier);

        tracing::info!(
            "✅ {} of {} papers have non-academic authors",
            rows.len(),
            papers.len()
        );
        Ok(TransformResult {
            fetched_papers: papers,
            rows,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<Option<String>> {
        match self.config.output_path() {
            Some(path) => {
                let data = render_csv(&result.rows)?;
                self.storage.write_file(path, &data).await?;

                tracing::info!("💾 Wrote {} rows to {}", result.rows.len(), path);
                println!("Results saved to {}", path);
                Ok(Some(path.to_string()))
            }
            None => {
                let output = render_console(&result.rows)?;
                print_to_console(&output)?;
                Ok(None)
            }
        }
    }
}

fn print_to_console(output: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
