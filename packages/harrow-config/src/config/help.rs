//! Help-text rendering
//!
//! Pure formatting over the registry; printing and process exit stay with the
//! caller.

use std::fmt::Write;

use super::registry::OptionRegistry;

/// Renders the usage listing: a header describing the negation syntax, then
/// one line per option in declaration order with its lower-cased name,
/// bracketed description, and default.
pub fn render_help(registry: &OptionRegistry) -> String {
    let mut out =
        String::from("USAGE: harrow <options>. Use ! to negate boolean flags (e.g. -check_asserts!)\n");
    for descriptor in registry.iter() {
        let _ = writeln!(
            out,
            "-{}\t[{}.]\tdefault: {}",
            descriptor.name().to_lowercase(),
            descriptor.description(),
            descriptor.default_value(),
        );
    }
    out
}
