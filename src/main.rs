use anyhow::Context;
use clap::Parser;
use jobsearch_assistant::{assistant, cli, client, config, interactive, session_store};
use jobsearch_common::{SessionController, SessionPersistence};
use assistant::Assistant;
use cli::{Cli, Commands};
use client::ApiClient;
use config::Config;
use session_store::FileSessionStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load().context("設定を読み込めません")?;
    if let Some(url) = &cli.base_url {
        config.set_base_url(url)?;
    }
    tracing::debug!(base_url = %config.base_url, "設定を読み込みました");

    match cli.command {
        Commands::Config { base_url, show } => {
            if let Some(url) = base_url {
                config.set_base_url(&url)?;
                config.save()?;
                println!("✔ バックエンドURLを設定しました: {}", config.base_url);
            }

            if show {
                println!("設定:");
                println!("  バックエンドURL: {}", config.base_url);
                println!("  勤務地の既定値: {}", config.default_location);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  LLM解析: {}", if config.use_llm_default { "有効" } else { "無効" });
            }
        }

        Commands::Session { show, clear } => {
            let mut store = FileSessionStore::default_location()?;

            if show || !clear {
                match store.load() {
                    Some(session) => {
                        println!("セッション:");
                        print!("{}", jobsearch_assistant::display::format_session(&session));
                    }
                    None => println!("セッションはありません"),
                }
            }

            if clear {
                store.clear();
                println!("✔ セッションを削除しました: {}", store.path().display());
            }
        }

        command => {
            let store = FileSessionStore::default_location()?;
            let controller = SessionController::with_persistence(Box::new(store));
            let client = ApiClient::from_config(&config)?;
            let mut assistant = Assistant::new(client, controller)
                .with_default_location(config.default_location.clone());

            let output = match command {
                Commands::Upload { file, traditional } => {
                    let use_llm = config.use_llm_default && !traditional;
                    assistant.upload(&file, use_llm).await?
                }
                Commands::Analyze => assistant.analyze().await?,
                Commands::Search { title, location } => {
                    assistant
                        .search(title.as_deref(), location.as_deref())
                        .await?
                }
                Commands::Details => assistant.details().await?,
                Commands::Matches { input } => assistant.matches_from_file(&input)?,
                Commands::Interactive => {
                    interactive::run(&mut assistant, config.use_llm_default).await?;
                    String::new()
                }
                Commands::Config { .. } | Commands::Session { .. } => String::new(),
            };

            print!("{}", output);
        }
    }

    Ok(())
}

/// RUST_LOG があれば優先。無ければ --verbose で debug
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("jobsearch_assistant={0},jobsearch={0}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
