//! Command-line argument parser
//!
//! Interprets the process argument list as a sequence of option writes
//! against a settings context and returns the final target-path value. The
//! parser never prints and never exits; callers decide what to do with a
//! [`ParseError`].

use tracing::{debug, warn};

use super::descriptor::OptionBinding;
use super::error::ParseError;
use super::registry::OptionRegistry;
use super::settings::AnalysisSettings;

/// Target-path value reserved for bulk regression runs.
pub const REGRESSION_SENTINEL: &str = "__regression";

/// Parses `args`, writing matched options into `settings`.
///
/// Tokens of the form `-name` set options; boolean flags take a trailing `!`
/// to mean false; `int` and `string` options consume the following token as
/// their value. Tokens without the `-` prefix are ignored. `-help` (or an
/// empty argument list) yields [`ParseError::UsageRequested`]; the first
/// failure aborts the parse, leaving earlier writes applied.
///
/// Returns the final value of the target-path option (`APP`).
pub fn parse_args<S: AsRef<str>>(
    registry: &OptionRegistry,
    settings: &mut AnalysisSettings,
    args: &[S],
) -> Result<String, ParseError> {
    if args.is_empty() {
        return Err(ParseError::UsageRequested);
    }

    let mut index = 0;
    while index < args.len() {
        let arg = args[index].as_ref();
        if arg.is_empty() {
            index += 1;
            continue;
        }
        let Some(body) = arg.strip_prefix('-') else {
            // Bare tokens are only ever consumed as option values above.
            index += 1;
            continue;
        };

        if body == "help" {
            return Err(ParseError::UsageRequested);
        }
        if body == "regressions" {
            settings.app = REGRESSION_SENTINEL.to_string();
            debug!("APP <- {} (regression run)", REGRESSION_SENTINEL);
            index += 1;
            continue;
        }

        let (name, negate) = match body.strip_suffix('!') {
            Some(stripped) => (stripped, true),
            None => (body, false),
        };

        let descriptor = registry
            .lookup(name)
            .ok_or_else(|| ParseError::UnrecognizedOption(name.to_string()))?;

        match descriptor.binding {
            OptionBinding::Bool { set, .. } => {
                set(settings, !negate);
                debug!("{} <- {}", descriptor.name(), !negate);
                index += 1;
            }
            OptionBinding::Int { set, .. } => {
                let value = args
                    .get(index + 1)
                    .ok_or_else(|| ParseError::BadArgument(name.to_string()))?;
                let value: i32 = value
                    .as_ref()
                    .parse()
                    .map_err(|_| ParseError::BadArgument(name.to_string()))?;
                set(settings, value);
                debug!("{} <- {}", descriptor.name(), value);
                index += 2;
            }
            OptionBinding::Str { set, .. } => {
                if negate {
                    // The marker carries no meaning for string options; it is
                    // stripped and the value consumed as usual.
                    warn!("ignoring '!' on string option {}", descriptor.name());
                }
                let value = args
                    .get(index + 1)
                    .ok_or_else(|| ParseError::BadArgument(name.to_string()))?;
                let value = value.as_ref().to_string();
                debug!("{} <- {:?}", descriptor.name(), value);
                set(settings, value);
                index += 2;
            }
        }
    }

    Ok(settings.app.clone())
}
