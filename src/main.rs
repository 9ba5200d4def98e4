use clap::Parser;
use review_sentiment::core::feedback::{render_text, FeedbackForm};
use review_sentiment::core::ConfigProvider;
use review_sentiment::utils::error::{ErrorSeverity, SentimentError};
use review_sentiment::utils::{logger, validation::Validate};
use review_sentiment::{CliConfig, DashboardEngine, LexiconScorer, LocalStorage, ReviewPipeline, TomlConfig};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_batch_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting review-sentiment");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let interactive = cli.interactive;

    // 有 TOML 配置時以檔案為主，--feedback 仍可覆寫
    let outcome = match cli.config.clone() {
        Some(path) => {
            let mut config = match TomlConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => fail(&e),
            };
            if cli.feedback.is_some() {
                config.input.feedback = cli.feedback.clone();
            }
            run(config, interactive).await
        }
        None => run(cli, interactive).await,
    };

    if let Err(e) = outcome {
        // 記錄詳細錯誤信息
        tracing::error!(
            "❌ Sentiment run failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn fail(e: &SentimentError) -> ! {
    tracing::error!("❌ Configuration failed: {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(1);
}

async fn run<C>(config: C, interactive: bool) -> review_sentiment::Result<()>
where
    C: ConfigProvider + Validate,
{
    // 驗證配置
    if let Err(e) = config.validate() {
        fail(&e);
    }

    // 創建存儲和管道
    let storage = LocalStorage::new(".".to_string());
    let pipeline = ReviewPipeline::new(storage, config, LexiconScorer::new());
    let engine = DashboardEngine::new(pipeline);

    let output_path = engine.run().await?;
    tracing::info!("📁 Output saved to: {}", output_path);
    println!("✅ Sentiment dashboard generated!");
    println!("📁 Output saved to: {}", output_path);

    if interactive {
        let pipeline = engine.pipeline();
        let form = FeedbackForm::new(pipeline.scorer(), pipeline.cleaner());
        println!("{}", render_text(&form.submit(None)));

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            println!("{}", render_text(&form.submit(Some(&line))));
        }
    }

    Ok(())
}
