//! Resolves engine settings from the command line and dumps them as JSON.
//!
//! Usage:
//!   harrow-opts -check_casts -app out/classes
//!   harrow-opts -help
//!
//! Exit code 0: full argument list parsed; resolved settings on stdout.
//! Exit code 1: usage listing (empty arguments or -help), unrecognized
//! option, or bad/missing option value.

use std::process::ExitCode;

use harrow_config::{
    parse_args, render_help, AnalysisSettings, OptionRegistry, ParseError, SettingsSnapshot,
};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let registry = OptionRegistry::new();
    let mut settings = AnalysisSettings::default();

    match parse_args(&registry, &mut settings, &args) {
        Ok(target) => {
            tracing::info!("target path: {:?}", target);
            match SettingsSnapshot::capture(&registry, &settings).to_json() {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("failed to serialize settings: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(ParseError::UsageRequested) => {
            // The usage listing has always exited non-zero, even when asked
            // for explicitly.
            print!("{}", render_help(&registry));
            ExitCode::FAILURE
        }
        Err(err) => {
            println!("{err}");
            ExitCode::FAILURE
        }
    }
}
