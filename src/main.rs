#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use zenpulse_core::logging::{LoggingBuilder, DEFAULT_FILTER};

/// ZenPulse - guided meditations with an AI mood of the day
#[derive(Parser, Debug)]
#[command(name = "zenpulse-desktop")]
#[command(about = "ZenPulse - guided meditations behind a Premium paywall")]
struct Args {
    /// Window inner width in logical pixels
    #[arg(long, default_value_t = 420.0)]
    width: f64,

    /// Window inner height in logical pixels
    #[arg(long, default_value_t = 860.0)]
    height: f64,

    /// Log filter directive (RUST_LOG takes precedence)
    #[arg(long, default_value = DEFAULT_FILTER)]
    log_filter: String,

    /// Disable colored log output
    #[arg(long)]
    no_ansi: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut logging = LoggingBuilder::new().with_filter(&args.log_filter);
    if args.no_ansi {
        logging = logging.no_ansi();
    }
    logging.init()?;

    tracing::info!("Starting ZenPulse ({}x{})", args.width, args.height);

    // Phone-like portrait window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("ZenPulse")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
