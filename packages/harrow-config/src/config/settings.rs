//! The settings context read by the analysis engine.
//!
//! One value per registered option, owned by the caller and passed by
//! reference to the parser and the defaults-restoration routine. Nothing in
//! here is global; isolated runs get isolated contexts.

/// Run-time settings for one analysis run.
///
/// Fields mirror the option registry one-to-one and hold the live values the
/// engine reads. Construct with [`Default`] for the declared defaults; mutate
/// through [`crate::config::parse_args`] or
/// [`crate::config::OptionRegistry::set_value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisSettings {
    pub scala_debug: bool,
    pub debug: bool,
    pub print_refs: bool,
    pub exit_on_fail: bool,
    pub flow_insensitive_only: bool,
    pub sound_exceptions: bool,
    pub piecewise_execution: bool,
    pub synthesis: bool,
    pub android_ui: bool,
    pub android_leak: bool,
    pub check_asserts: bool,
    pub check_casts: bool,
    pub check_array_bounds: bool,
    pub check_nulls: bool,
    pub use_demand_cast_checker: bool,
    pub dump_witnessed_err_paths: bool,
    pub full_witnesses: bool,
    pub max_callstack_depth: i32,
    pub index_sensitivity: bool,
    pub prim_array_sensitivity: bool,
    pub use_pi_nodes: bool,
    pub aggressive_from_narrowing: bool,
    pub max_path_constraint_size: i32,
    pub timeout: i32,
    pub cast: i32,
    pub app: String,
    pub lib: String,
    pub android_jar: String,
    pub main_class: String,
    pub main_method: String,
    pub exclusions: String,
    pub test: String,

    // Not registered as an option: unreachable from the command line and from
    // defaults-restoration, fixed at construction.
    include_weak_references: bool,
}

impl AnalysisSettings {
    /// Whether paths through weak references are considered. Always `false`.
    pub fn include_weak_references(&self) -> bool {
        self.include_weak_references
    }
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            scala_debug: false,
            debug: false,
            print_refs: false,
            exit_on_fail: true,
            flow_insensitive_only: false,
            sound_exceptions: false,
            piecewise_execution: false,
            synthesis: false,
            android_ui: false,
            android_leak: false,
            check_asserts: false,
            check_casts: false,
            check_array_bounds: false,
            check_nulls: false,
            use_demand_cast_checker: false,
            dump_witnessed_err_paths: true,
            full_witnesses: false,
            max_callstack_depth: 3,
            index_sensitivity: false,
            prim_array_sensitivity: false,
            use_pi_nodes: false,
            aggressive_from_narrowing: false,
            max_path_constraint_size: 2,
            timeout: 10,
            cast: -1,
            app: String::new(),
            lib: String::new(),
            android_jar: "android/android-2.3_annotated.jar".to_string(),
            main_class: "Main".to_string(),
            main_method: "main".to_string(),
            exclusions: "config/exclusions.txt".to_string(),
            test: String::new(),
            include_weak_references: false,
        }
    }
}
