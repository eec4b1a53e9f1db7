use clap::{Parser, Subcommand};
use webgate_webview::NavigationType;

/// Webgate: navigation gating and local-resource serving for embedded WebViews.
#[derive(Parser, Debug)]
#[command(name = "webgate", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a private-scheme URL against the configured resources.
    Resolve {
        /// e.g. `x-local://logo.png`
        url: String,
    },
    /// Ask the navigation policy whether a URL may be loaded.
    Check {
        url: String,

        /// linkClicked, formSubmitted, backForward, reload, formResubmitted or other.
        #[arg(long, default_value = "other")]
        navigation_type: NavigationType,
    },
    /// Open a window on `url`, or on the configured start page.
    Open { url: Option<String> },
    /// Print the effective configuration as JSON.
    Config,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_resolve() {
        let args = Args::try_parse_from(["webgate", "resolve", "x-local://logo.png"]).unwrap();
        assert!(matches!(args.command, Command::Resolve { ref url } if url == "x-local://logo.png"));
        assert!(args.config.is_none());
    }

    #[test]
    fn parses_check_with_navigation_type() {
        let args = Args::try_parse_from([
            "webgate",
            "check",
            "https://ok.example",
            "--navigation-type",
            "linkClicked",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert!(matches!(
            args.command,
            Command::Check { navigation_type: NavigationType::LinkClicked, .. }
        ));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn check_defaults_to_other() {
        let args = Args::try_parse_from(["webgate", "check", "https://ok.example"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Check { navigation_type: NavigationType::Other, .. }
        ));
    }

    #[test]
    fn rejects_unknown_navigation_type() {
        assert!(Args::try_parse_from([
            "webgate",
            "check",
            "https://ok.example",
            "--navigation-type",
            "sideways",
        ])
        .is_err());
    }

    #[test]
    fn parses_config() {
        let args = Args::try_parse_from(["webgate", "config"]).unwrap();
        assert!(matches!(args.command, Command::Config));
    }

    #[test]
    fn open_url_is_optional() {
        let args = Args::try_parse_from(["webgate", "--config", "/tmp/c.toml", "open"]).unwrap();
        assert!(matches!(args.command, Command::Open { url: None }));
        assert_eq!(args.config.as_deref(), Some("/tmp/c.toml"));
    }
}
