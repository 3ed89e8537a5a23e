//! Option descriptors
//!
//! A descriptor is the named, typed unit of configuration: canonical name,
//! help description, and a binding that ties the option to a concrete field
//! of [`AnalysisSettings`]. The binding carries the declared default together
//! with the typed accessor pair, so a default whose type disagrees with the
//! option's kind cannot be constructed.

use std::fmt;

use serde::Serialize;

use super::error::RegistryError;
use super::settings::AnalysisSettings;

/// The type of an option's value, fixed at declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    Bool,
    Int,
    #[serde(rename = "string")]
    Str,
}

impl OptionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Str => "string",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A dynamically typed option value.
///
/// Serializes untagged: booleans and integers as JSON primitives, strings
/// verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i32),
    Str(String),
}

impl OptionValue {
    pub fn kind(&self) -> OptionKind {
        match self {
            Self::Bool(_) => OptionKind::Bool,
            Self::Int(_) => OptionKind::Int,
            Self::Str(_) => OptionKind::Str,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{}", v),
            Self::Int(v) => write!(f, "{}", v),
            Self::Str(v) => write!(f, "{}", v),
        }
    }
}

/// Typed field binding for one option.
///
/// Each variant pairs the declared default with get/set fn pointers into the
/// settings context, so kind, default, and storage always agree.
pub(crate) enum OptionBinding {
    Bool {
        default: bool,
        get: fn(&AnalysisSettings) -> bool,
        set: fn(&mut AnalysisSettings, bool),
    },
    Int {
        default: i32,
        get: fn(&AnalysisSettings) -> i32,
        set: fn(&mut AnalysisSettings, i32),
    },
    Str {
        default: &'static str,
        get: fn(&AnalysisSettings) -> &str,
        set: fn(&mut AnalysisSettings, String),
    },
}

/// A single named, typed, documented setting.
pub struct OptionDescriptor {
    /// Canonical name, stored upper-cased; matched case-insensitively.
    name: &'static str,
    /// Help text. May be empty.
    description: &'static str,
    pub(crate) binding: OptionBinding,
}

impl OptionDescriptor {
    pub(crate) fn bool(
        name: &'static str,
        description: &'static str,
        default: bool,
        get: fn(&AnalysisSettings) -> bool,
        set: fn(&mut AnalysisSettings, bool),
    ) -> Self {
        Self {
            name,
            description,
            binding: OptionBinding::Bool { default, get, set },
        }
    }

    pub(crate) fn int(
        name: &'static str,
        description: &'static str,
        default: i32,
        get: fn(&AnalysisSettings) -> i32,
        set: fn(&mut AnalysisSettings, i32),
    ) -> Self {
        Self {
            name,
            description,
            binding: OptionBinding::Int { default, get, set },
        }
    }

    pub(crate) fn str(
        name: &'static str,
        description: &'static str,
        default: &'static str,
        get: fn(&AnalysisSettings) -> &str,
        set: fn(&mut AnalysisSettings, String),
    ) -> Self {
        Self {
            name,
            description,
            binding: OptionBinding::Str { default, get, set },
        }
    }

    /// Canonical (upper-cased) option name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn kind(&self) -> OptionKind {
        match self.binding {
            OptionBinding::Bool { .. } => OptionKind::Bool,
            OptionBinding::Int { .. } => OptionKind::Int,
            OptionBinding::Str { .. } => OptionKind::Str,
        }
    }

    /// The declared default.
    pub fn default_value(&self) -> OptionValue {
        match self.binding {
            OptionBinding::Bool { default, .. } => OptionValue::Bool(default),
            OptionBinding::Int { default, .. } => OptionValue::Int(default),
            OptionBinding::Str { default, .. } => OptionValue::Str(default.to_string()),
        }
    }

    /// The current value read out of the settings context.
    pub fn current_value(&self, settings: &AnalysisSettings) -> OptionValue {
        match self.binding {
            OptionBinding::Bool { get, .. } => OptionValue::Bool(get(settings)),
            OptionBinding::Int { get, .. } => OptionValue::Int(get(settings)),
            OptionBinding::Str { get, .. } => OptionValue::Str(get(settings).to_string()),
        }
    }

    /// Writes `value` into the bound settings field.
    ///
    /// Fails with [`RegistryError::TypeMismatch`] when the value's variant
    /// does not match this option's kind.
    pub(crate) fn write(
        &self,
        settings: &mut AnalysisSettings,
        value: OptionValue,
    ) -> Result<(), RegistryError> {
        match (&self.binding, value) {
            (OptionBinding::Bool { set, .. }, OptionValue::Bool(v)) => set(settings, v),
            (OptionBinding::Int { set, .. }, OptionValue::Int(v)) => set(settings, v),
            (OptionBinding::Str { set, .. }, OptionValue::Str(v)) => set(settings, v),
            (_, value) => {
                return Err(RegistryError::TypeMismatch {
                    name: self.name.to_string(),
                    expected: self.kind(),
                    found: value.kind(),
                })
            }
        }
        Ok(())
    }

    /// Resets the bound settings field to the declared default.
    pub(crate) fn restore_default(&self, settings: &mut AnalysisSettings) {
        match self.binding {
            OptionBinding::Bool { default, set, .. } => set(settings, default),
            OptionBinding::Int { default, set, .. } => set(settings, default),
            OptionBinding::Str { default, set, .. } => set(settings, default.to_string()),
        }
    }
}

impl fmt::Debug for OptionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .field("default", &self.default_value())
            .finish()
    }
}
