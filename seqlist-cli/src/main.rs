use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use seqlist_cli::{commands, exit_code, run::RunOptions, ContainerArg};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "seqlist")]
#[command(about = "Seqlist - Dynamic array and doubly-linked list containers", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay the walkthrough of every operation on a container
    Demo {
        /// Container to exercise
        #[arg(short, long, value_enum)]
        container: ContainerArg,
    },

    /// Execute a JSON operation script against a fresh container
    Run {
        /// Container to run the script against
        #[arg(short, long, value_enum)]
        container: ContainerArg,

        /// Script file (JSON array of ops), or - for stdin
        #[arg(short, long)]
        script: String,

        /// Output JSON file for the final snapshot
        #[arg(short, long)]
        output: Option<String>,

        /// Log and skip failing ops instead of stopping
        #[arg(long)]
        lenient: bool,

        /// Report -1 for missing indices and i32::MIN for invalid accesses
        #[arg(long)]
        sentinels: bool,

        /// Print the container after every op
        #[arg(long)]
        trace: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Demo { container } => commands::demo::execute(container),

        Commands::Run {
            container,
            script,
            output,
            lenient,
            sentinels,
            trace,
        } => commands::run::execute(
            container,
            &script,
            output.as_deref(),
            RunOptions {
                lenient,
                sentinels,
                trace,
            },
        ),
    };

    // Container errors keep their own exit status; anything else exits 4
    if let Err(err) = &result {
        eprintln!("{} {:#}", "ERROR:".red(), err);
        std::process::exit(exit_code(err));
    }

    result
}
