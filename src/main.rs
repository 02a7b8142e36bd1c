// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{warn, info, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_config::Config;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod clip_window;
mod errors;
mod file_utils;
mod search;
mod subtitle_processor;
mod transcoder;
mod video_locator;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search subtitles for a keyword and extract matching clips (default command)
    #[command(alias = "clip")]
    Clip(ClipArgs),

    /// Generate shell completions for kirinuki
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ClipArgs {
    /// Keyword to search for in subtitle cues
    #[arg(short = 'k', long = "keyword")]
    keyword: String,

    /// Root folder to start searching
    #[arg(short = 'b', long = "base_folder")]
    base_folder: PathBuf,

    /// Number of cues to include before the keyword match
    #[arg(short = 'p', long = "prev_count")]
    prev_count: Option<usize>,

    /// Number of cues to include after the keyword match
    #[arg(short = 'n', long = "next_count")]
    next_count: Option<usize>,

    /// Delete existing clips and SRT files containing the keyword before extracting
    #[arg(short = 'o', long)]
    overwrite: bool,

    /// Configuration file path
    #[arg(short = 'c', long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short = 'l', long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// kirinuki - subtitle keyword search and clip extractor
///
/// Searches every SRT file under a folder for cues containing a keyword,
/// lets you pick matches interactively, and extracts the corresponding video
/// segments with the subtitle excerpt burned in.
#[derive(Parser, Debug)]
#[command(name = "kirinuki")]
#[command(version = "1.0.0")]
#[command(about = "Subtitle keyword search and clip extractor")]
#[command(long_about = "kirinuki searches subtitle files for a keyword and cuts the matching
moments out of the neighbouring video files with ffmpeg, re-timestamping the
subtitle excerpt so it lines up with the clip.

EXAMPLES:
    kirinuki -k 頑張る -b /media/anime          # Search and extract interactively
    kirinuki -k hello -b /media/tv -p 1 -n 3    # One cue before, three after
    kirinuki -k hello -b /media/tv -o           # Replace existing clips first
    kirinuki --log-level debug -k hi -b /media  # Verbose logging
    kirinuki completions bash > kirinuki.bash   # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Keyword to search for in subtitle cues
    #[arg(short = 'k', long = "keyword")]
    keyword: Option<String>,

    /// Root folder to start searching
    #[arg(short = 'b', long = "base_folder")]
    base_folder: Option<PathBuf>,

    /// Number of cues to include before the keyword match
    #[arg(short = 'p', long = "prev_count")]
    prev_count: Option<usize>,

    /// Number of cues to include after the keyword match
    #[arg(short = 'n', long = "next_count")]
    next_count: Option<usize>,

    /// Delete existing clips and SRT files containing the keyword before extracting
    #[arg(short = 'o', long)]
    overwrite: bool,

    /// Configuration file path
    #[arg(short = 'c', long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short = 'l', long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "kirinuki", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Clip(args)) => run_clip(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let keyword = cli
                .keyword
                .ok_or_else(|| anyhow!("--keyword is required when no subcommand is specified"))?;
            let base_folder = cli.base_folder.ok_or_else(|| {
                anyhow!("--base_folder is required when no subcommand is specified")
            })?;

            let clip_args = ClipArgs {
                keyword,
                base_folder,
                prev_count: cli.prev_count,
                next_count: cli.next_count,
                overwrite: cli.overwrite,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_clip(clip_args).await
        }
    }
}

async fn run_clip(options: ClipArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader::<_, Config>(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();

        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(prev_count) = options.prev_count {
        config.clip.prev_count = prev_count;
    }
    if let Some(next_count) = options.next_count {
        config.clip.next_count = next_count;
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    let controller = Controller::with_config(config)?;

    // Phase one: search
    let matches = controller.search(&options.base_folder, &options.keyword)?;
    if matches.is_empty() {
        info!("No subtitles found with the given keyword.");
        return Ok(());
    }

    println!("Found subtitles:");
    for (i, keyword_match) in matches.iter().enumerate() {
        println!(
            "[{}] {} - {}",
            i,
            keyword_match.relative_to(&options.base_folder).display(),
            keyword_match.text
        );
    }

    // Interactive step: read the chosen subset from stdin
    print!("Enter the indices of subtitles to clip (comma separated): ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read selection from stdin")?;

    let selected = parse_selection(&line, matches.len())?;

    // Phase two: extract
    controller
        .extract(
            &options.base_folder,
            &options.keyword,
            &matches,
            &selected,
            options.overwrite,
        )
        .await
}

/// Parse a comma-separated index list, rejecting anything out of range
fn parse_selection(input: &str, match_count: usize) -> Result<Vec<usize>> {
    let mut selected = Vec::new();

    for part in input.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        let index: usize = part
            .parse()
            .map_err(|_| anyhow!("Invalid selection index: '{}'", part))?;

        if index >= match_count {
            return Err(anyhow!(
                "Selection index {} is out of range (found {} matches)",
                index,
                match_count
            ));
        }

        selected.push(index);
    }

    if selected.is_empty() {
        return Err(anyhow!("No selection indices provided"));
    }

    Ok(selected)
}
