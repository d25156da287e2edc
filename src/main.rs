use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use replay::{commands, config, tui};

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "replay")]
#[command(
    about = "Daily listening memories in your terminal",
    long_about = "Daily listening memories in your terminal\n\nIf no command is specified, the program starts in interactive mode."
)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// View to open in interactive mode (feed, calendar, profile, login)
    #[arg(short, long)]
    view: Option<String>,

    /// Seed for reproducible memories (overrides the config file)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display the memories calendar for a month
    Calendar {
        /// Year (optional, defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Month 1-12 (optional, defaults to the current month)
        #[arg(short, long)]
        month: Option<u32>,
    },
    /// Display tonight's feed
    Feed,
    /// Display your profile and stats
    Profile,
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &config::Config) {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!();
    println!("[display]");
    println!("use_unicode: {}", cfg.display.use_unicode);
    println!("selection_fg: {:?}", cfg.display.selection_fg);
    println!("unfocused_selection_fg: {:?}{}",
        cfg.display.unfocused_selection_fg(),
        if cfg.display.unfocused_selection_fg.is_none() { " (auto: 50% darker)" } else { "" }
    );
    println!("accent_fg: {:?}", cfg.display.accent_fg);
    println!("muted_fg: {:?}", cfg.display.muted_fg);
    println!("error_fg: {:?}", cfg.display.error_fg);
    println!();
    println!("[calendar]");
    println!("presence: {}", cfg.calendar.presence);
    match cfg.calendar.seed {
        Some(seed) => println!("seed: {}", seed),
        None => println!("seed: (none, fresh randomness each run)"),
    }
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Run TUI mode over the memories of the current month
async fn run_tui_mode(config: config::Config, seed: Option<u64>, view: Option<String>) -> anyhow::Result<()> {
    use anyhow::Context;

    let calendar = config
        .calendar
        .generator(seed)
        .generate_current()
        .context("Failed to generate this month's memories")?;

    tui::run(config, calendar, view).await.context("Terminal UI failed")
}

/// Execute a CLI command by routing it to the appropriate command handler
fn execute_command(config: &config::Config, seed: Option<u64>, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Config => {
            handle_config_command(config);
            Ok(())
        }
        Commands::Calendar { year, month } => commands::calendar::run(config, year, month, seed),
        Commands::Feed => commands::feed::run(&config.display),
        Commands::Profile => commands::profile::run(&config.display),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    let result = match cli.command {
        // If no subcommand, run TUI
        None => run_tui_mode(config, cli.seed, cli.view).await,
        Some(command) => execute_command(&config, cli.seed, command),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
