//! Run-time option handling for the harrow analysis engine.
//!
//! The engine's symbolic executor, points-to analysis, and checkers consume
//! an [`AnalysisSettings`] value; this crate owns how that value is declared,
//! parsed from process arguments, reset between runs, and documented in the
//! usage listing.

pub mod config;

pub use config::{
    parse_args, render_help, AnalysisSettings, OptionDescriptor, OptionKind, OptionRegistry,
    OptionValue, ParseError, RegistryError, SettingsSnapshot, REGRESSION_SENTINEL,
};
