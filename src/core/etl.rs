use crate::core::Pipeline;
use crate::domain::model::RunSummary;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitoring: bool,
    debug: bool,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitoring: bool) -> Self {
        Self {
            pipeline,
            monitoring,
            debug: false,
        }
    }

    /// 除錯模式：在輸出前印出抓取與過濾後的完整資料
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub async fn run(&self) -> Result<RunSummary> {
        let mut monitor = SystemMonitor::new(self.monitoring);
        tracing::info!("Starting PubMed pipeline...");
        monitor.log_stats("Start");

        // Extract
        let papers = self.pipeline.extract().await?;
        tracing::info!("Extracted {} papers", papers.len());
        monitor.log_stats("Extract");

        // Transform
        let result = self.pipeline.transform(papers).await?;
        tracing::info!("Kept {} papers with non-academic authors", result.rows.len());
        monitor.log_stats("Transform");

        if self.debug {
            println!(
                "Fetched Papers: {}",
                serde_json::to_string(&result.fetched_papers)?
            );
            println!("Filtered Papers: {}", serde_json::to_string(&result.rows)?);
        }

        let fetched = result.fetched_papers.len();
        let reported = result.rows.len();

        // Load
        let output_path = self.pipeline.load(result).await?;
        monitor.log_stats("Load");
        monitor.log_final_stats();

        Ok(RunSummary {
            fetched,
            reported,
            output_path,
        })
    }
}
