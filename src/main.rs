use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio::{config, tui};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVE: &str = "folio=info";

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Terminal portfolio site with a command palette")]
#[command(version)]
struct Args {
    /// Write a default config file and exit
    #[arg(long)]
    init: bool,

    /// Overwrite an existing config with --init
    #[arg(long, requires = "init")]
    force: bool,

    /// Path to config file
    #[arg(long, short)]
    config: Option<std::path::PathBuf>,

    /// Page to start on
    #[arg(long, default_value = "/")]
    route: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List palette commands in display order
    Commands {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

/// `RUST_LOG` when set, otherwise the default directive.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    match rust_log.filter(|directives| !directives.trim().is_empty()) {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::new(DEFAULT_LOG_DIRECTIVE),
    }
}

fn init_logging() -> Result<()> {
    // The TUI owns stdout, so logs go to a file
    let dir = config::data_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    let path = dir.join("folio.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.init {
        let path = config::init(args.config.as_deref(), args.force)?;
        println!("Config saved to {}", path.display());
        return Ok(());
    }

    init_logging()?;

    let config = config::load(args.config.as_deref())?;

    if let Some(Command::Commands { json }) = &args.command {
        let registry = config.registry()?;
        if *json {
            println!("{}", serde_json::to_string_pretty(registry.commands())?);
        } else {
            for command in registry.commands() {
                println!(
                    "{:<14} {:<14} {:<28} {}",
                    command.id,
                    command.title,
                    command.action.as_str(),
                    command.shortcut.join(" ")
                );
            }
        }
        return Ok(());
    }

    // Run TUI
    tui::run(config, &args.route).await
}
