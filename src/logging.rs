//! Tracing initialization.
//! Diagnostics go to stderr in a compact format so stdout only carries the status
//! lines. The level comes from `LogLevel` (no RUST_LOG override here).

use anyhow::{Result, anyhow};
use asset_relocate::LogLevel;
use chrono::Local;
use std::fmt as stdfmt;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt as tsfmt;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;
use tracing_subscriber::util::SubscriberInitExt;

/// Human-friendly timestamp formatter (DD/MM/YY HH:MM:SS)
struct LocalHumanTime;
impl FormatTime for LocalHumanTime {
    fn format_time(&self, w: &mut tsfmt::format::Writer<'_>) -> stdfmt::Result {
        write!(w, "{}", Local::now().format("%d/%m/%y %H:%M:%S"))
    }
}

#[inline]
fn to_level_filter(lvl: &LogLevel) -> LevelFilter {
    match lvl {
        LogLevel::Quiet => LevelFilter::ERROR,
        LogLevel::Normal => LevelFilter::INFO,
        LogLevel::Info => LevelFilter::DEBUG,
        LogLevel::Debug => LevelFilter::TRACE,
    }
}

/// Install the global subscriber.
pub fn init_tracing(lvl: &LogLevel) -> Result<()> {
    let env_filter = EnvFilter::default().add_directive(to_level_filter(lvl).into());
    let stderr_layer = tsfmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(LocalHumanTime)
        .with_level(true)
        .with_target(true)
        .compact();
    registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}
