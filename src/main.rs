//! deathchest - headless host for the death-chest system
//!
//! Runs a flat in-memory world against a command script and prints the chat
//! lines players would see.

mod command_script;
mod config;
mod headless;
mod messages;

use anyhow::Result;
use command_script::CommandScriptPlayer;
use deathchest_world::ChestConfig;
use headless::HeadlessHost;
use std::{env, path::PathBuf};
use tracing::info;

/// Script used when `--script` is not given.
const DEMO_SCRIPT: &str = r#"{
    "steps": [
        {"tick": 0, "command": "die Steve 0 64 0 apple*3 iron_ingot*12 torch*32"},
        {"tick": 2, "command": "open 0 64 0"},
        {"tick": 2, "command": "take 0 64 0 0"},
        {"tick": 2, "command": "close 0 64 0"},
        {"tick": 4, "command": "open 0 64 0"},
        {"tick": 4, "command": "take 0 64 0 all"},
        {"tick": 4, "command": "close 0 64 0"},
        {"tick": 6, "command": "set 5 64 5 water"},
        {"tick": 6, "command": "die Alex 5 64 5 bread*4"},
        {"tick": 8, "command": "die Alex 100 64 100 bread*4"}
    ]
}"#;

fn main() -> Result<()> {
    // Initialize tracing with WARN level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    info!("Starting deathchest v{}", env!("CARGO_PKG_VERSION"));

    let cli = CliOptions::parse(env::args().skip(1));

    if let Some(path) = cli.write_default_config.as_deref() {
        config::save_to_path(&ChestConfig::default(), path)?;
        info!(path = %path.display(), "wrote default config");
        return Ok(());
    }

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_PATH));
    let chest_config = config::load_from_path(&config_path);

    let mut script = match cli.script.as_deref() {
        Some(path) => CommandScriptPlayer::from_path(path)?,
        None => CommandScriptPlayer::from_str(DEMO_SCRIPT)?,
    };
    let max_ticks = cli.ticks.unwrap_or(script.last_tick().0 + 2);

    println!(
        "Death chests enabled (search radius {}).",
        chest_config.search_radius
    );
    let mut host = HeadlessHost::new(chest_config);
    headless::run(&mut host, &mut script, max_ticks);
    Ok(())
}

#[derive(Debug, Default)]
struct CliOptions {
    config: Option<PathBuf>,
    script: Option<PathBuf>,
    ticks: Option<u64>,
    write_default_config: Option<PathBuf>,
}

impl CliOptions {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Self {
        let mut opts = CliOptions::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    if let Some(path) = args.next() {
                        opts.config = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--config requires a file path");
                    }
                }
                "--script" => {
                    if let Some(path) = args.next() {
                        opts.script = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--script requires a file path");
                    }
                }
                "--ticks" => {
                    if let Some(raw) = args.next() {
                        match raw.parse::<u64>() {
                            Ok(value) => opts.ticks = Some(value),
                            Err(err) => {
                                tracing::error!(%err, value = %raw, "--ticks must be an integer");
                            }
                        }
                    } else {
                        tracing::error!("--ticks requires an integer");
                    }
                }
                "--write-default-config" => {
                    if let Some(path) = args.next() {
                        opts.write_default_config = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--write-default-config requires a file path");
                    }
                }
                other => {
                    tracing::warn!(arg = other, "ignoring unknown argument");
                }
            }
        }

        opts
    }
}
