mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("BACKLOG_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
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

    let cli = Cli::parse();
    let json = cli.json;

    match run(cli).await {
        Err(e) if json => output::output_error(&e.to_string()),
        result => result,
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if let Some(Commands::Completions { shell }) = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "backlog", &mut std::io::stdout());
        return Ok(());
    }

    let ctx = CliContext::resolve(cli.data_dir.as_deref(), cli.json)?;

    match cli.command {
        None => handlers::list::handle(&ctx, true).await,
        Some(Commands::Add(args)) => handlers::add::handle(&ctx, args).await,
        Some(Commands::List { interactive }) => handlers::list::handle(&ctx, interactive).await,
        Some(Commands::Update(args)) => handlers::update::handle(&ctx, args).await,
        Some(Commands::Delete { id }) => handlers::delete::handle(&ctx, &id).await,
        Some(Commands::Search { keyword }) => handlers::search::handle(&ctx, &keyword).await,
        Some(Commands::Archive) => handlers::archive::handle(&ctx).await,
        Some(Commands::Completions { .. }) => Ok(()),
    }
}
