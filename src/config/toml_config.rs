use crate::config::{
    default_academic_keywords, DEFAULT_DATABASE, DEFAULT_FETCH_ENDPOINT, DEFAULT_MAX_RESULTS,
    DEFAULT_SEARCH_ENDPOINT,
};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{PapersError, Result};
use crate::utils::validation::{validate_provider, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 選用的 TOML 配置檔，所有欄位皆可省略
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub load: LoadConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub search_endpoint: Option<String>,
    pub fetch_endpoint: Option<String>,
    pub database: Option<String>,
    pub max_results: Option<usize>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    pub academic_keywords: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PapersError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| PapersError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 套用命令列覆蓋設定：有明確指定的選項優先於檔案內容
    #[cfg(feature = "cli")]
    pub fn apply_cli_overrides(&mut self, cli: &crate::config::CliConfig) {
        if let Some(endpoint) = &cli.search_endpoint {
            self.source.search_endpoint = Some(endpoint.clone());
        }
        if let Some(endpoint) = &cli.fetch_endpoint {
            self.source.fetch_endpoint = Some(endpoint.clone());
        }
        if let Some(max_results) = cli.max_results {
            self.source.max_results = Some(max_results);
        }
        if let Some(timeout) = cli.timeout {
            self.source.timeout_seconds = Some(timeout);
        }
        if let Some(keywords) = &cli.academic_keywords {
            self.filter.academic_keywords = Some(keywords.clone());
        }
        if let Some(file) = &cli.file {
            self.load.output_path = Some(file.clone());
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn search_endpoint(&self) -> &str {
        self.source
            .search_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_SEARCH_ENDPOINT)
    }

    fn fetch_endpoint(&self) -> &str {
        self.source
            .fetch_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_FETCH_ENDPOINT)
    }

    fn database(&self) -> &str {
        self.source.database.as_deref().unwrap_or(DEFAULT_DATABASE)
    }

    fn max_results(&self) -> usize {
        self.source.max_results.unwrap_or(DEFAULT_MAX_RESULTS)
    }

    fn request_timeout(&self) -> Option<u64> {
        self.source.timeout_seconds
    }

    fn academic_keywords(&self) -> Vec<String> {
        self.filter
            .academic_keywords
            .clone()
            .unwrap_or_else(default_academic_keywords)
    }

    fn output_path(&self) -> Option<&str> {
        self.load.output_path.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[source]
search_endpoint = "https://mirror.example.org/esearch.fcgi"
fetch_endpoint = "https://mirror.example.org/efetch.fcgi"
database = "pubmed"
max_results = 25
timeout_seconds = 30

[filter]
academic_keywords = ["university", "hospital"]

[load]
output_path = "papers.csv"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.search_endpoint(), "https://mirror.example.org/esearch.fcgi");
        assert_eq!(config.fetch_endpoint(), "https://mirror.example.org/efetch.fcgi");
        assert_eq!(config.max_results(), 25);
        assert_eq!(config.request_timeout(), Some(30));
        assert_eq!(config.academic_keywords(), vec!["university", "hospital"]);
        assert_eq!(config.output_path(), Some("papers.csv"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.search_endpoint(), DEFAULT_SEARCH_ENDPOINT);
        assert_eq!(config.database(), "pubmed");
        assert_eq!(config.max_results(), 10);
        assert_eq!(config.request_timeout(), None);
        assert_eq!(config.output_path(), None);
    }

    #[test]
    fn test_config_validation() {
        let invalid_url = TomlConfig::from_toml_str(
            r#"
[source]
search_endpoint = "invalid-url"
"#,
        )
        .unwrap();
        assert!(invalid_url.validate().is_err());

        let zero_results = TomlConfig::from_toml_str(
            r#"
[source]
max_results = 0
"#,
        )
        .unwrap();
        assert!(zero_results.validate().is_err());

        let no_keywords = TomlConfig::from_toml_str(
            r#"
[filter]
academic_keywords = []
"#,
        )
        .unwrap();
        assert!(no_keywords.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let result = TomlConfig::from_toml_str("[source\nmax_results = ");
        assert!(matches!(
            result,
            Err(PapersError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[source]\nmax_results = 3\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.max_results(), 3);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_options_override_file() {
        use clap::Parser;

        let mut config = TomlConfig::from_toml_str(
            r#"
[source]
max_results = 3
timeout_seconds = 5

[load]
output_path = "from-file.csv"
"#,
        )
        .unwrap();
        let cli = crate::config::CliConfig::try_parse_from([
            "get-papers-list",
            "query",
            "--max-results",
            "7",
            "-f",
            "from-cli.csv",
        ])
        .unwrap();

        config.apply_cli_overrides(&cli);

        assert_eq!(config.max_results(), 7);
        assert_eq!(config.request_timeout(), Some(5));
        assert_eq!(config.output_path(), Some("from-cli.csv"));
    }
}
