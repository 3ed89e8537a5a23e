//! Configuration error types

use thiserror::Error;

use super::descriptor::OptionKind;

/// Programmatic misuse of the option registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No descriptor matches the requested name.
    #[error("no option named '{name}' is registered. {suggestion}")]
    NotFound { name: String, suggestion: String },

    /// The supplied value's type does not match the option's declared kind.
    #[error("option '{name}' expects a {expected} value, got {found}")]
    TypeMismatch {
        name: String,
        expected: OptionKind,
        found: OptionKind,
    },
}

/// Failure modes of the argument parser.
///
/// `UsageRequested` shares the terminal path with the true errors but is a
/// distinct variant, so callers can pick a different exit signal for it.
/// The `Display` text of the two error variants is the diagnostic line the
/// engine has always printed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Option-prefixed token that matches no registered name.
    #[error("Unrecognized option: {0}")]
    UnrecognizedOption(String),

    /// Missing or type-incompatible value token for an option.
    #[error("Bad or missing argument for option {0}")]
    BadArgument(String),

    /// Empty argument list or an explicit `-help`.
    #[error("usage requested")]
    UsageRequested,
}

/// "Did you mean 'X'?" hint for an unknown name, by smallest edit distance.
pub(crate) fn closest_match<'a>(
    target: &str,
    candidates: impl Iterator<Item = &'a str>,
) -> String {
    let target = target.to_ascii_uppercase();
    match candidates.min_by_key(|candidate| edit_distance(&target, candidate)) {
        Some(closest) => format!("Did you mean '{}'?", closest),
        None => "No options are registered".to_string(),
    }
}

/// Levenshtein distance, two-row variant.
fn edit_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let substitute = prev[j] + usize::from(ca != *cb);
            curr[j + 1] = substitute.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("TIMEOUT", "TIMEOUT"), 0);
    }

    #[test]
    fn test_closest_match() {
        let names = ["TIMEOUT", "CAST", "DEBUG"];
        let hint = closest_match("timeuot", names.iter().copied());
        assert_eq!(hint, "Did you mean 'TIMEOUT'?");
    }

    #[test]
    fn test_closest_match_no_candidates() {
        let hint = closest_match("anything", std::iter::empty());
        assert!(hint.contains("No options"));
    }

    #[test]
    fn test_parse_error_diagnostic_text() {
        // Byte-compatible with the engine's historical diagnostics.
        let err = ParseError::UnrecognizedOption("nonexistent".to_string());
        assert_eq!(err.to_string(), "Unrecognized option: nonexistent");

        let err = ParseError::BadArgument("cast".to_string());
        assert_eq!(err.to_string(), "Bad or missing argument for option cast");
    }

    #[test]
    fn test_registry_error_formatting() {
        let err = RegistryError::NotFound {
            name: "timeuot".to_string(),
            suggestion: "Did you mean 'TIMEOUT'?".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("timeuot"));
        assert!(msg.contains("Did you mean 'TIMEOUT'?"));

        let err = RegistryError::TypeMismatch {
            name: "TIMEOUT".to_string(),
            expected: OptionKind::Int,
            found: OptionKind::Str,
        };
        let msg = err.to_string();
        assert!(msg.contains("TIMEOUT"));
        assert!(msg.contains("expects a int value"));
        assert!(msg.contains("got string"));
    }
}
