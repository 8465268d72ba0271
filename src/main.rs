use clap::Parser;
use pubmed_papers::core::ConfigProvider;
use pubmed_papers::utils::error::ErrorSeverity;
use pubmed_papers::utils::{logger, validation::Validate};
use pubmed_papers::{
    CliConfig, EtlEngine, LocalStorage, PapersError, PubmedPipeline, RunSummary, TomlConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.debug);
    }

    tracing::info!("Starting get-papers-list");
    tracing::debug!("CLI config: {:?}", cli);

    let outcome = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(path) {
                Ok(mut config) => {
                    config.apply_cli_overrides(&cli);
                    run(config, &cli).await
                }
                Err(e) => Err(e),
            }
        }
        None => run(cli.clone(), &cli).await,
    };

    match outcome {
        Ok(summary) => {
            tracing::info!(
                "✅ Done: {} papers fetched, {} reported",
                summary.fetched,
                summary.reported
            );
            if let Some(path) = summary.output_path {
                tracing::info!("📁 Output saved to: {}", path);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run<C>(config: C, cli: &CliConfig) -> Result<RunSummary, PapersError>
where
    C: ConfigProvider + Validate + 'static,
{
    // 驗證配置
    cli.validate()?;
    config.validate()?;

    if cli.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let pipeline = PubmedPipeline::new(LocalStorage::current_dir(), config, cli.query.clone())?;
    let engine = EtlEngine::new_with_monitoring(pipeline, cli.monitor).with_debug(cli.debug);

    engine.run().await
}
