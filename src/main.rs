//! padcalc - Entry Point

use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;
use tracing::info;

/// Keypad-driven calculator - line-oriented REPL over the pure engine
#[derive(Parser, Debug)]
#[command(name = "padcalc")]
#[command(version)]
#[command(about = "Keypad-driven arithmetic engine with a terminal REPL")]
pub struct Args {
    /// Path to a script of calculator tokens (reads from stdin if not provided)
    pub script: Option<PathBuf>,

    /// Prompt string printed before each read
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Do not echo the history line after each action
    #[arg(long)]
    pub no_history: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to the tracing log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = padcalc::config::load_config_with_precedence(args.config.clone())?;
        let merged = padcalc::config::merge_config(config_file);
        let with_env = padcalc::config::apply_env_overrides(merged);

        // Only override for flags the user explicitly set.
        let echo_history_override = if args.no_history { Some(false) } else { None };
        padcalc::config::apply_cli_overrides(
            with_env,
            args.prompt.clone(),
            echo_history_override,
            args.log_file.clone(),
        )
    };

    padcalc::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        script = ?args.script,
        "Configuration loaded and resolved"
    );

    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(std::io::BufReader::new(std::fs::File::open(path)?)),
        None => Box::new(std::io::stdin().lock()),
    };

    padcalc::repl::run(input, std::io::stdout().lock(), &config)?;

    Ok(())
}
