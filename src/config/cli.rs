use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::PathBuf;

/// 本機檔案系統存儲；相對路徑以 `base_path` 為基準
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new<P: Into<PathBuf>>(base_path: P) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// 以目前工作目錄為基準
    pub fn current_dir() -> Self {
        Self::new("")
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.base_path.join(path);
        tracing::debug!("Writing {} bytes to {}", data.len(), full_path.display());

        // 不自動建立目錄，路徑錯誤直接回傳
        fs::write(full_path, data)?;
        Ok(())
    }
}
