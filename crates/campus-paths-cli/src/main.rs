use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use campus_paths_cli::commands::buildings::handle_buildings;
use campus_paths_cli::commands::connect::handle_connect;
use campus_paths_cli::commands::route::handle_route;
use campus_paths_cli::commands::shell::handle_shell;
use campus_paths_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Campus building routes and affinity paths")]
struct Cli {
    /// Override the directory holding `campus_buildings.tsv` and `campus_paths.tsv`.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format for command results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every building as `ID: Long Name`, sorted by id.
    Buildings,
    /// Compute the shortest walking route between two buildings.
    Route {
        /// Short id of the starting building.
        #[arg(long = "from")]
        from: String,
        /// Short id of the destination building.
        #[arg(long = "to")]
        to: String,
    },
    /// Find the cheapest chain between two entities of a membership file.
    Connect {
        /// Tab-separated `entity<TAB>label` file.
        #[arg(long)]
        data: PathBuf,
        /// Starting entity.
        #[arg(long = "from")]
        from: String,
        /// Destination entity.
        #[arg(long = "to")]
        to: String,
    },
    /// Start the interactive route shell on stdin/stdout.
    Shell,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let target = cli.data_dir.as_deref();

    match cli.command {
        Command::Buildings => handle_buildings(target, cli.format),
        Command::Route { from, to } => handle_route(target, &from, &to, cli.format),
        Command::Connect { data, from, to } => handle_connect(&data, &from, &to, cli.format),
        Command::Shell => handle_shell(target),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
