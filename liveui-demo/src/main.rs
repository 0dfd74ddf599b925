mod cli;
mod paths;
mod sample;
mod settings;

use std::fs::{self, File};
use std::sync::{Arc, Mutex};

use chrono::{Local, TimeDelta};
use clap::Parser;
use liveui::prelude::*;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

use cli::Args;
use settings::{DemoConfig, SettingsError};

#[derive(Debug, Error)]
enum DemoError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    LiveUi(#[from] LiveUiError),
}

fn init_logging(verbose: bool) -> Result<(), DemoError> {
    let path = match paths::log_file() {
        Some(path) => {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
            path
        }
        None => "liveui-demo.log".into(),
    };
    let level = if verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    WriteLogger::init(level, Config::default(), File::create(&path)?)?;
    info!("Logging to {}", path.display());
    Ok(())
}

async fn run(args: Args) -> Result<(), DemoError> {
    let config = DemoConfig::resolve(args.config.as_deref(), paths::config_file().as_deref())?;
    let DemoConfig {
        toggle: toggle_config,
        live_time: live_config,
        format,
    } = config;

    let frozen = FixedClock::with_offset(SystemClock.now_millis(), *Local::now().offset());
    let now = frozen.now_millis();
    let boot = sample::read_boot_time(now);

    let page = Arc::new(Mutex::new(Page::new(sample::document(
        &toggle_config,
        &live_config,
        now,
        boot,
    ))));

    let period = live_config.period();
    let mut renderer = if args.frozen {
        LiveTimeRenderer::with_parts(live_config.clone(), frozen.clone(), format)
    } else {
        LiveTimeRenderer::with_parts(live_config.clone(), SystemClock, format)
    };
    let mut toggle = ToggleController::new(toggle_config.clone());

    if let Ok(mut page) = page.lock() {
        toggle.start(&mut *page)?;
    }
    renderer.start(page.clone())?;

    // Offset by half a period so each snapshot lands between render passes
    let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + period / 2, period);
    for tick in 0..args.ticks {
        ticker.tick().await;

        let Ok(mut page) = page.lock() else { break };
        if tick == args.click_at {
            if let Some(trigger) = sample::first_trigger(page.dom(), &toggle_config) {
                info!("Clicking {trigger}");
                page.click(&trigger);
            }
        }

        println!("--- tick {tick}");
        for line in sample::snapshot(page.dom(), &toggle_config, &live_config) {
            println!("{line}");
        }

        if args.frozen {
            frozen.advance(TimeDelta::from_std(period).unwrap_or(TimeDelta::zero()));
        }
    }

    renderer.shutdown().await;
    if let Ok(mut page) = page.lock() {
        toggle.stop(&mut *page);
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging(args.verbose) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
