use clap::Parser;
use panelsmith::cli::{
    Cli, Commands, GenerateOptions, handle_generate_command, handle_list_command,
};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    // Logs go to stderr; stdout carries the narration.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Ok(path) = dotenv {
        debug!(path = %path.display(), "Loaded .env");
    }

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            book,
            panels,
            output_dir,
            model,
            parallel,
        } => {
            let options = GenerateOptions {
                book,
                panels,
                output_dir,
                model,
                parallel,
            };
            handle_generate_command(cli.api_key, &cli.base_url, options).await
        }
        Commands::List { book } => handle_list_command(book.as_deref(), &mut std::io::stdout()),
    };

    if let Err(e) = &result {
        error!(error = %e, "Command failed");
    }
    result
}
