//! The option registry
//!
//! Fixed, ordered table of every option descriptor, built once per run.
//! Declaration order matches the help listing and never changes afterwards.

use tracing::debug;

use super::descriptor::{OptionDescriptor, OptionValue};
use super::error::{closest_match, RegistryError};
use super::settings::AnalysisSettings;

/// The fixed collection of option descriptors for one process.
pub struct OptionRegistry {
    descriptors: Vec<OptionDescriptor>,
}

impl OptionRegistry {
    /// Builds the registry in declaration order.
    ///
    /// This table is the single source of truth for names, kinds, defaults,
    /// and help text; [`AnalysisSettings::default`] mirrors its defaults.
    pub fn new() -> Self {
        let descriptors = vec![
            OptionDescriptor::bool(
                "SCALA_DEBUG",
                "print debug info (scala)",
                false,
                |s| s.scala_debug,
                |s, v| s.scala_debug = v,
            ),
            OptionDescriptor::bool(
                "DEBUG",
                "print debug information (LOTS of printing)",
                false,
                |s| s.debug,
                |s, v| s.debug = v,
            ),
            OptionDescriptor::bool(
                "PRINT_REFS",
                "print reasons for refutations (work in progress)",
                false,
                |s| s.print_refs,
                |s, v| s.print_refs = v,
            ),
            OptionDescriptor::bool(
                "EXIT_ON_FAIL",
                "give up after assertion failure / crash",
                true,
                |s| s.exit_on_fail,
                |s, v| s.exit_on_fail = v,
            ),
            OptionDescriptor::bool(
                "FLOW_INSENSITIVE_ONLY",
                "perform flow-insensitive points-to analysis only; don't do symbolic execution",
                false,
                |s| s.flow_insensitive_only,
                |s, v| s.flow_insensitive_only = v,
            ),
            OptionDescriptor::bool(
                "SOUND_EXCEPTIONS",
                "handle exceptions soundly",
                false,
                |s| s.sound_exceptions,
                |s, v| s.sound_exceptions = v,
            ),
            OptionDescriptor::bool(
                "PIECEWISE_EXECUTION",
                "use piecewise symbolic executor",
                false,
                |s| s.piecewise_execution,
                |s, v| s.piecewise_execution = v,
            ),
            OptionDescriptor::bool(
                "SYNTHESIS",
                "",
                false,
                |s| s.synthesis,
                |s, v| s.synthesis = v,
            ),
            OptionDescriptor::bool(
                "ANDROID_UI",
                "verification for Android UI components (currently under development)",
                false,
                |s| s.android_ui,
                |s, v| s.android_ui = v,
            ),
            OptionDescriptor::bool(
                "ANDROID_LEAK",
                "check for Android Activity leaks",
                false,
                |s| s.android_leak,
                |s, v| s.android_leak = v,
            ),
            OptionDescriptor::bool(
                "CHECK_ASSERTS",
                "check user assertions",
                false,
                |s| s.check_asserts,
                |s, v| s.check_asserts = v,
            ),
            OptionDescriptor::bool(
                "CHECK_CASTS",
                "check downcast safety",
                false,
                |s| s.check_casts,
                |s, v| s.check_casts = v,
            ),
            OptionDescriptor::bool(
                "CHECK_ARRAY_BOUNDS",
                "check array bounds",
                false,
                |s| s.check_array_bounds,
                |s, v| s.check_array_bounds = v,
            ),
            OptionDescriptor::bool(
                "CHECK_NULLS",
                "check some null derefs",
                false,
                |s| s.check_nulls,
                |s, v| s.check_nulls = v,
            ),
            OptionDescriptor::bool(
                "USE_DEMAND_CAST_CHECKER",
                "filter cast checking results using demand cast checker",
                false,
                |s| s.use_demand_cast_checker,
                |s, v| s.use_demand_cast_checker = v,
            ),
            OptionDescriptor::bool(
                "DUMP_WITNESSED_ERR_PATHS",
                "prints end-to-end list of witnessed heap edges for witnessed error",
                true,
                |s| s.dump_witnessed_err_paths,
                |s, v| s.dump_witnessed_err_paths = v,
            ),
            OptionDescriptor::bool(
                "FULL_WITNESSES",
                "if true, only report 'witnessed' if the query is true and we have reached the beginning of the program",
                false,
                |s| s.full_witnesses,
                |s, v| s.full_witnesses = v,
            ),
            OptionDescriptor::int(
                "MAX_CALLSTACK_DEPTH",
                "if the call stack is larger than this, we drop constraints that can be produced in callees rather than exploring them",
                3,
                |s| s.max_callstack_depth,
                |s, v| s.max_callstack_depth = v,
            ),
            OptionDescriptor::bool(
                "INDEX_SENSITIVITY",
                "do index-sensitive reasoning",
                false,
                |s| s.index_sensitivity,
                |s, v| s.index_sensitivity = v,
            ),
            OptionDescriptor::bool(
                "PRIM_ARRAY_SENSITIVITY",
                "should the pointer analysis have object-sensitivity on arrays of primitive type?",
                false,
                |s| s.prim_array_sensitivity,
                |s, v| s.prim_array_sensitivity = v,
            ),
            OptionDescriptor::bool(
                "USE_PI_NODES",
                "should the pointer analysis use pi nodes to handle instanceOf intelligently?",
                false,
                |s| s.use_pi_nodes,
                |s, v| s.use_pi_nodes = v,
            ),
            OptionDescriptor::bool(
                "AGGRESSIVE_FROM_NARROWING",
                "should we use points-from information and recursive simplification to further narrow from constraints?",
                false,
                |s| s.aggressive_from_narrowing,
                |s, v| s.aggressive_from_narrowing = v,
            ),
            OptionDescriptor::int(
                "MAX_PATH_CONSTRAINT_SIZE",
                "if the path constraints are larger than this, we (soundly) refuse to collect new constraints",
                2,
                |s| s.max_path_constraint_size,
                |s, v| s.max_path_constraint_size = v,
            ),
            OptionDescriptor::int(
                "TIMEOUT",
                "time out and report a witness if we spend more time than this on a query",
                10,
                |s| s.timeout,
                |s, v| s.timeout = v,
            ),
            OptionDescriptor::int(
                "CAST",
                "check a cast with a particular number",
                -1,
                |s| s.cast,
                |s, v| s.cast = v,
            ),
            OptionDescriptor::str(
                "APP",
                "usage: -app <path to directory of .class files to analyze>",
                "",
                |s| &s.app,
                |s, v| s.app = v,
            ),
            OptionDescriptor::str(
                "LIB",
                "JAR of library files to load",
                "",
                |s| &s.lib,
                |s, v| s.lib = v,
            ),
            OptionDescriptor::str(
                "ANDROID_JAR",
                "usage: -android_jar <path to jar file for version of android libraries>",
                "android/android-2.3_annotated.jar",
                |s| &s.android_jar,
                |s, v| s.android_jar = v,
            ),
            OptionDescriptor::str(
                "MAIN_CLASS",
                "class containing entrypoint method for analysis",
                "Main",
                |s| &s.main_class,
                |s, v| s.main_class = v,
            ),
            OptionDescriptor::str(
                "MAIN_METHOD",
                "entrypoint method for analysis",
                "main",
                |s| &s.main_method,
                |s, v| s.main_method = v,
            ),
            OptionDescriptor::str(
                "EXCLUSIONS",
                "list of classes to exclude from analysis",
                "config/exclusions.txt",
                |s| &s.exclusions,
                |s, v| s.exclusions = v,
            ),
            OptionDescriptor::str(
                "TEST",
                "run a particular test",
                "",
                |s| &s.test,
                |s, v| s.test = v,
            ),
        ];

        debug_assert!(
            {
                let mut names: Vec<String> = descriptors
                    .iter()
                    .map(|d| d.name().to_ascii_uppercase())
                    .collect();
                names.sort();
                names.windows(2).all(|w| w[0] != w[1])
            },
            "option names must be case-insensitively unique"
        );

        Self { descriptors }
    }

    /// Case-insensitive descriptor lookup.
    pub fn lookup(&self, name: &str) -> Option<&OptionDescriptor> {
        self.descriptors
            .iter()
            .find(|d| d.name().eq_ignore_ascii_case(name))
    }

    /// Descriptors in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, OptionDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Writes `value` into the named option.
    pub fn set_value(
        &self,
        settings: &mut AnalysisSettings,
        name: &str,
        value: OptionValue,
    ) -> Result<(), RegistryError> {
        let descriptor = self.lookup(name).ok_or_else(|| RegistryError::NotFound {
            name: name.to_string(),
            suggestion: closest_match(name, self.descriptors.iter().map(|d| d.name())),
        })?;
        descriptor.write(settings, value)?;
        debug!("{} set via registry", descriptor.name());
        Ok(())
    }

    /// Resets every registered option to its declared default.
    ///
    /// Idempotent. Cannot fail: each descriptor's default and storage share a
    /// binding, so a mismatched write is unrepresentable.
    pub fn restore_defaults(&self, settings: &mut AnalysisSettings) {
        for descriptor in &self.descriptors {
            descriptor.restore_default(settings);
        }
        debug!("restored defaults for {} options", self.descriptors.len());
    }
}

impl Default for OptionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
