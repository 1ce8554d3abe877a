//! Application-label normalization helpers.
//!
//! Labels are expected to reach the derivation pipeline already normalized:
//! lowercase, with no whitespace anywhere in the string. The pipeline never
//! re-normalizes — a label is consumed verbatim, so `"GitHub"` and `"github"`
//! derive different passphrases. Callers that accept free-form user input
//! should run it through [`normalize_label`] first.

/// Normalizes a raw label: strips all whitespace and lowercases.
///
/// Applying this to an already-normalized label returns it unchanged, so the
/// normalization boundary is idempotent.
#[must_use]
pub fn normalize_label(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Returns `true` if `label` would pass through [`normalize_label`] unchanged.
#[must_use]
pub fn is_normalized(label: &str) -> bool {
    normalize_label(label) == label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_whitespace() {
        assert_eq!(normalize_label("my bank"), "mybank");
        assert_eq!(normalize_label(" my\tbank\n"), "mybank");
    }

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize_label("GitHub"), "github");
        assert_eq!(normalize_label("EXAMPLE"), "example");
    }

    #[test]
    fn test_normalize_idempotent() {
        let once = normalize_label("My Bank Account");
        let twice = normalize_label(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_is_normalized() {
        assert!(is_normalized("example"));
        assert!(is_normalized("bank2"));
        assert!(!is_normalized("Example"));
        assert!(!is_normalized("my bank"));
    }

    #[test]
    fn test_empty_label_is_normalized() {
        assert!(is_normalized(""));
        assert_eq!(normalize_label(""), "");
    }
}
