use crate::domain::model::{PaperRecord, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn search_endpoint(&self) -> &str;
    fn fetch_endpoint(&self) -> &str;
    fn database(&self) -> &str;
    fn max_results(&self) -> usize;
    fn request_timeout(&self) -> Option<u64>;
    fn academic_keywords(&self) -> Vec<String>;
    fn output_path(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<PaperRecord>>;
    async fn transform(&self, papers: Vec<PaperRecord>) -> Result<TransformResult>;
    /// 回傳寫入的檔案路徑；輸出到 stdout 時為 `None`
    async fn load(&self, result: TransformResult) -> Result<Option<String>>;
}
