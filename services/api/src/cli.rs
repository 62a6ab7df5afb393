use crate::render::{run_catalog, run_evaluate, CatalogArgs, EvaluateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use fundability::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Fundability Engine",
    about = "Score credit profiles and recommend tradelines from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate a profile document and print its fundability report
    Evaluate(EvaluateArgs),
    /// List the loaded tradeline catalog with derived account ages
    Catalog(CatalogArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Evaluate(args) => run_evaluate(args),
        Command::Catalog(args) => run_catalog(args),
    }
}
