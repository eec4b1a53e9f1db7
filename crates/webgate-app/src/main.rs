mod cli;
mod commands;
#[cfg(feature = "desktop")]
mod desktop;
mod setup;

use std::process::ExitCode;
use std::sync::Arc;

use serde::Serialize;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter};
use webgate_config::WebGateConfig;
use webgate_webview::{LocalWebView, ViewManager};

use cli::Command;

fn print_json<T: Serialize>(report: &T) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::error!("Failed to serialize report: {e}"),
    }
}

#[cfg(feature = "desktop")]
fn open(view: Arc<LocalWebView>, url: String) -> ExitCode {
    match desktop::run(view, url) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Event loop error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "desktop"))]
fn open(_view: Arc<LocalWebView>, url: String) -> ExitCode {
    tracing::error!(url = %url, "webgate was built without the `desktop` feature");
    ExitCode::FAILURE
}

/// Filter from `RUST_LOG` plus `directive`, falling back to `info`.
fn log_filter(directive: &str) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(
        directive
            .parse::<Directive>()
            .unwrap_or_else(|_| LevelFilter::INFO.into()),
    )
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Logging before config, so loader diagnostics are not lost. The
    // config's level is applied through the reload handle afterwards.
    let (filter, filter_handle) =
        reload::Layer::new(log_filter(args.log_level.as_deref().unwrap_or("info")));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Webgate v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }

    let config = match setup::load_config(args.config.as_deref()) {
        Ok(config) => config,
        // An explicitly requested file that cannot be used is fatal.
        Err(_) if args.config.is_some() => return ExitCode::FAILURE,
        Err(_) => {
            tracing::warn!("Using default config");
            WebGateConfig::default()
        }
    };

    if args.log_level.is_none() {
        let level = config.logging.level.as_directive();
        if let Err(e) = filter_handle.reload(log_filter(level)) {
            tracing::warn!("Failed to apply config log level {level}: {e}");
        }
    }

    let mut manager = ViewManager::new(setup::view_options(&config));
    let view = setup::build_view(&mut manager, &config);

    let code = match args.command {
        Command::Resolve { url } => {
            let report = commands::resolve(&view, &url);
            print_json(&report);
            if report.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Command::Check {
            url,
            navigation_type,
        } => {
            print_json(&commands::check(&view, &url, navigation_type));
            ExitCode::SUCCESS
        }
        Command::Config => {
            println!("{}", webgate_config::config_to_json(&config));
            ExitCode::SUCCESS
        }
        Command::Open { url } => match url.or_else(|| config.navigation.start_url.clone()) {
            Some(url) => open(Arc::clone(&view), url),
            None => {
                tracing::error!("No URL given and no navigation.start_url configured");
                ExitCode::FAILURE
            }
        },
    };

    manager.destroy_all();
    tracing::info!("Shutdown complete");
    code
}
