pub mod cli;
pub mod toml_config;

use crate::domain::filter::DEFAULT_ACADEMIC_KEYWORDS;

pub const DEFAULT_SEARCH_ENDPOINT: &str =
    "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi";
pub const DEFAULT_FETCH_ENDPOINT: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/efetch.fcgi";
pub const DEFAULT_DATABASE: &str = "pubmed";
pub const DEFAULT_MAX_RESULTS: usize = 10;

pub fn default_academic_keywords() -> Vec<String> {
    DEFAULT_ACADEMIC_KEYWORDS
        .iter()
        .map(|k| k.to_string())
        .collect()
}

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use super::*;
    use crate::domain::ports::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_non_empty_string, validate_provider, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "get-papers-list")]
    #[command(about = "Fetch PubMed papers and list those with non-academic authors")]
    pub struct CliConfig {
        /// Search query for PubMed
        pub query: String,

        /// Output CSV file name (prints to the console when omitted)
        #[arg(short, long)]
        pub file: Option<String>,

        /// Print fetched and filtered papers and enable debug logging
        #[arg(short, long)]
        pub debug: bool,

        /// Path to a TOML configuration file
        #[arg(long)]
        pub config: Option<String>,

        /// Log process CPU and memory usage per phase
        #[arg(long)]
        pub monitor: bool,

        /// Emit logs as JSON lines
        #[arg(long)]
        pub log_json: bool,

        #[arg(long, help = "esearch endpoint URL")]
        pub search_endpoint: Option<String>,

        #[arg(long, help = "efetch endpoint URL")]
        pub fetch_endpoint: Option<String>,

        #[arg(long, help = "Maximum number of search results")]
        pub max_results: Option<usize>,

        #[arg(long, help = "HTTP request timeout in seconds")]
        pub timeout: Option<u64>,

        #[arg(
            long,
            value_delimiter = ',',
            help = "Comma-separated keywords that mark an affiliation as academic"
        )]
        pub academic_keywords: Option<Vec<String>>,
    }

    impl ConfigProvider for CliConfig {
        fn search_endpoint(&self) -> &str {
            self.search_endpoint
                .as_deref()
                .unwrap_or(DEFAULT_SEARCH_ENDPOINT)
        }

        fn fetch_endpoint(&self) -> &str {
            self.fetch_endpoint
                .as_deref()
                .unwrap_or(DEFAULT_FETCH_ENDPOINT)
        }

        fn database(&self) -> &str {
            DEFAULT_DATABASE
        }

        fn max_results(&self) -> usize {
            self.max_results.unwrap_or(DEFAULT_MAX_RESULTS)
        }

        fn request_timeout(&self) -> Option<u64> {
            self.timeout
        }

        fn academic_keywords(&self) -> Vec<String> {
            self.academic_keywords
                .clone()
                .unwrap_or_else(default_academic_keywords)
        }

        fn output_path(&self) -> Option<&str> {
            self.file.as_deref()
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_non_empty_string("query", &self.query)?;
            validate_provider(self)
        }
    }

}
