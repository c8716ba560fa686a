use anyhow::Context;
use clap::Parser;
use review_analysis_rust::{analysis, cli, config, display, error, input, storage};
use cli::{Cli, Commands};
use config::Config;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load().context("設定の読み込みに失敗しました")?;

    match cli.command {
        Commands::Analyze { paths, text, output } => {
            println!("🍽️ review-ai - レビュー解析\n");

            if paths.is_empty() && text.is_empty() {
                return Err(error::ReviewAiError::NoReviews.into());
            }
            let reviews = input::collect_reviews(&paths, &text)?;
            analysis::run_analysis(&reviews, &output, &config)?;
            println!("\n✅ 解析完了");
        }

        Commands::Input { output } => {
            println!("🍽️ review-ai - テキスト入力\n");

            let reviews = input::prompt_reviews()?;
            if reviews.is_empty() {
                println!("レビューが入力されませんでした");
                return Ok(());
            }
            analysis::run_analysis(&reviews, &output, &config)?;
            println!("\n✅ 解析完了");
        }

        Commands::Sample { output } => {
            println!("🍽️ review-ai - サンプルデータで実験\n");

            let reviews: Vec<String> = input::SAMPLE_REVIEWS.iter().map(|s| s.to_string()).collect();
            for review in &reviews {
                println!("  {}", review);
            }
            println!();
            analysis::run_analysis(&reviews, &output, &config)?;
            println!("\n✅ 解析完了");
        }

        Commands::History { limit } => {
            let store = storage::RecordStore::new(&config.storage_path);
            let records = store
                .tail(limit.unwrap_or(config.history_limit))
                .with_context(|| format!("保存データの読み込みに失敗しました: {}", store.path().display()))?;
            display::print_history(&records);
        }

        Commands::Config { set_storage, set_save, show } => {
            let mut config = config;
            let changed = set_storage.is_some() || set_save.is_some();

            if let Some(path) = set_storage {
                config.storage_path = path;
            }
            if let Some(save) = set_save {
                config.save_results = save;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  保存先: {}", config.storage_path.display());
                println!("  自動保存: {}", if config.save_results { "有効" } else { "無効" });
                println!("  履歴表示件数: {}", config.history_limit);
            }
        }
    }

    Ok(())
}
