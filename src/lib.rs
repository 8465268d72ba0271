pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::pubmed::PubmedClient;
pub use config::cli::LocalStorage;
pub use config::toml_config::TomlConfig;
pub use core::{etl::EtlEngine, pipeline::PubmedPipeline};
pub use domain::model::{AuthorRecord, PaperRecord, ReportRow, RunSummary};
pub use utils::error::{PapersError, Result};
