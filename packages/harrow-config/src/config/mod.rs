//! Configuration surface for the analysis engine
//!
//! A fixed registry of named, typed options, a command-line parser that
//! writes through it, defaults restoration for repeated runs, and a help
//! renderer. The engine itself only reads the resulting
//! [`AnalysisSettings`]; nothing here prints or exits.
//!
//! # Examples
//!
//! ```rust,ignore
//! use harrow_config::config::{parse_args, AnalysisSettings, OptionRegistry};
//!
//! let registry = OptionRegistry::new();
//! let mut settings = AnalysisSettings::default();
//! let target = parse_args(&registry, &mut settings, &["-check_casts", "-app", "out/classes"])?;
//! assert_eq!(target, "out/classes");
//!
//! // Between regression runs:
//! registry.restore_defaults(&mut settings);
//! ```

pub mod descriptor;
pub mod error;
pub mod help;
pub mod parser;
pub mod registry;
pub mod settings;
pub mod snapshot;

pub use descriptor::{OptionDescriptor, OptionKind, OptionValue};
pub use error::{ParseError, RegistryError};
pub use help::render_help;
pub use parser::{parse_args, REGRESSION_SENTINEL};
pub use registry::OptionRegistry;
pub use settings::AnalysisSettings;
pub use snapshot::{SettingsSnapshot, SnapshotEntry};
