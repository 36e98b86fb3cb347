mod cmd;
mod output;
mod prompt;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "adr",
    about = "Create architecture decision records from templates",
    version,
    propagate_version = true
)]
struct Cli {
    /// Config file
    #[arg(
        long,
        short = 'c',
        global = true,
        env = "ADR_CONFIG",
        default_value = adr_core::paths::CONFIG_FILE
    )]
    config: PathBuf,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the config, create the record directory and the first record
    #[command(visible_alias = "i")]
    Init,

    /// Create a new record
    #[command(visible_alias = "n")]
    New {
        /// Record title (prompted for when omitted)
        #[arg(long, short = 't')]
        title: Option<String>,

        /// Record status (prompted for when omitted)
        #[arg(
            long,
            short = 's',
            value_parser = clap::builder::PossibleValuesParser::new(
                adr_core::record::STATUSES.iter().copied()
            )
        )]
        status: Option<String>,
    },

    /// Regenerate the README.md index of the record directory
    Toc,

    /// List records
    #[command(visible_alias = "ls")]
    List,

    /// Version information for adr
    #[command(visible_alias = "v")]
    Version,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| {
            let ctx = cmd::Context {
                config_path: cli.config,
                cwd,
                json: cli.json,
            };
            match cli.command {
                Commands::Init => cmd::init::run(&ctx),
                Commands::New { title, status } => {
                    let args = cmd::new::NewArgs { title, status };
                    cmd::new::run(&ctx, args, &mut prompt::TermPrompter::new())
                }
                Commands::Toc => cmd::toc::run(&ctx),
                Commands::List => cmd::list::run(&ctx),
                Commands::Version => cmd::version::run(ctx.json),
            }
        });

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
