use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use coinbreak::{Banker, parse_amount};
use log::info;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Coinbreak - List every way to break an amount into coins
#[derive(Parser, Debug)]
#[command(name = "coinbreak")]
#[command(about = "List every way to break an amount of cents into pennies, nickels, dimes and quarters")]
#[command(version)]
pub struct CliArgs {
    /// Amount to break, in cents
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Only print how many ways there are
    #[arg(short, long)]
    pub count: bool,

    /// Stop after this many ways
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub cents: u32,
    pub count_only: bool,
    pub limit: Option<usize>,
    pub log_level: LogLevel,
}

impl CliConfig {
    fn from_args(args: CliArgs) -> Result<Self> {
        let cents = parse_amount(&args.amount).context("Invalid amount")?;

        Ok(CliConfig {
            cents,
            count_only: args.count,
            limit: args.limit,
            log_level: args.log_level,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliConfig::from_args(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(())
}

/// Render up to `limit` ways of breaking `cents`, one per line
pub fn render_ways(banker: &Banker, cents: u32, limit: Option<usize>) -> Vec<String> {
    banker
        .find_breaking_ways(cents)
        .take(limit.unwrap_or(usize::MAX))
        .map(|way| way.to_string().trim_end().to_string())
        .collect()
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    init_logging(&config.log_level)?;

    let banker = Banker::new();

    if config.count_only {
        info!("Counting ways to break {} cents", config.cents);
        let count = banker
            .count_breaking_ways(config.cents)
            .context("Cannot count ways")?;
        println!("{}", count);
        return Ok(());
    }

    info!("Listing ways to break {} cents", config.cents);
    for line in render_ways(&banker, config.cents, config.limit) {
        println!("{}", line);
    }
    Ok(())
}
