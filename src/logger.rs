use std::{env, str::FromStr, time::SystemTime};

use anyhow::Result;
use colored::Colorize;
use log::{Level, LevelFilter};

fn colored_level(level: Level) -> String {
    match level {
        Level::Error => "ERROR".red().bold().to_string(),
        Level::Warn => "WARN".yellow().to_string(),
        Level::Info => "INFO".green().to_string(),
        Level::Debug => "DEBUG".blue().to_string(),
        Level::Trace => "TRACE".dimmed().to_string(),
    }
}

/// `env_level` (from `RUST_LOG`) wins over the configured level; unknown
/// values fall back to info.
pub fn pick_level(env_level: Option<&str>, configured: &str) -> LevelFilter {
    env_level
        .and_then(|level| LevelFilter::from_str(level).ok())
        .or_else(|| LevelFilter::from_str(configured).ok())
        .unwrap_or(LevelFilter::Info)
}

pub fn level_filter(configured: &str) -> LevelFilter {
    pick_level(env::var("RUST_LOG").ok().as_deref(), configured)
}

pub fn setup_logger(configured_level: &str) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                colored_level(record.level()),
                record.target(),
                message
            ))
        })
        .level(level_filter(configured_level))
        .level_for("hyper", LevelFilter::Warn)
        .level_for("reqwest", LevelFilter::Warn)
        .chain(std::io::stdout())
        .apply()?;
    Ok(())
}
