use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand};
use flowdoc::config::ServerConfig;
use flowdoc::flowchart::{self, RenderOptions};
use flowdoc::{routes, state};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    ReadInput { path: String, source: io::Error },
    #[error("failed to write output: {0}")]
    WriteOutput(io::Error),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: io::Error },
    #[error("server failed: {0}")]
    Serve(io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "flowdoc", about = "Keyword-driven flowchart generator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP service (default).
    Serve,
    /// Compile a document to Mermaid source on stdout.
    Generate {
        #[arg(default_value = "-", help = "Input file path, or - for stdin")]
        input: PathBuf,
        #[arg(
            long,
            env = "FLOWDOC_ESCAPE_QUOTES",
            value_parser = BoolishValueParser::new(),
            help = "Escape double quotes in labels"
        )]
        escape_quotes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let config = ServerConfig::from_env();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Generate { input, escape_quotes } => {
            let options = RenderOptions { escape_quotes: escape_quotes || config.render.escape_quotes };
            run_generate(&input, &options)
        }
    }
}

async fn serve(config: ServerConfig) -> Result<(), CliError> {
    let state = state::AppState::new(&config);
    let app = routes::app(state, config.max_body_bytes);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| CliError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, escape_quotes = config.render.escape_quotes, "flowdoc listening");
    axum::serve(listener, app).await.map_err(CliError::Serve)
}

fn run_generate(input: &Path, options: &RenderOptions) -> Result<(), CliError> {
    let documentation = read_input(input)?;
    let mermaid = flowchart::generate_with(&documentation, options);
    io::stdout()
        .lock()
        .write_all(mermaid.as_bytes())
        .map_err(CliError::WriteOutput)
}

fn read_input(input: &Path) -> Result<String, CliError> {
    let path = input.display().to_string();
    if input == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| CliError::ReadInput { path, source })?;
        return Ok(buf);
    }
    fs::read_to_string(input).map_err(|source| CliError::ReadInput { path, source })
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
