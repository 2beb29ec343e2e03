mod cli;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use todolist_core::AppConfig;
use todolist_tui::App;
use tracing_subscriber::EnvFilter;

fn init_logging() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TODOLIST_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(log_file))
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load(),
    };
    if cli.empty {
        config.seed_sample_lists = Some(false);
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        clap_complete::generate(*shell, &mut Cli::command(), "todolist", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(&cli)?;
    tracing::debug!("Loaded config: {:?}", config);

    let mut app = App::new(&config)?;
    app.run().await?;

    Ok(())
}
