//! Input gate for the weight text field
//!
//! Accepts partial numbers while typing ("-", "1.", ".5") and rejects
//! anything else by keeping the previously accepted text.

use once_cell::sync::Lazy;
use regex::Regex;

// Optional sign, digits, at most one decimal point. Matches the empty string.
static RE_PARTIAL_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?\d*\.?\d*$").expect("Failed to compile partial number pattern")
});

/// Whether `candidate` is an acceptable (possibly partial) weight entry
pub fn is_acceptable(candidate: &str) -> bool {
    // `\d` is Unicode-aware in regex; only ASCII digits belong in the field
    candidate.is_ascii() && RE_PARTIAL_NUMBER.is_match(candidate)
}

/// Return `candidate` if acceptable, otherwise `previous_accepted` unchanged
pub fn sanitize<'a>(candidate: &'a str, previous_accepted: &'a str) -> &'a str {
    if is_acceptable(candidate) {
        candidate
    } else {
        tracing::debug!("[sanitize] Rejected input {:?}, keeping {:?}", candidate, previous_accepted);
        previous_accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_accepts_partial_numbers() {
        for text in ["", "-", "1", "1.", ".5", "-.5", "-5", "12.34", "007", "."] {
            assert!(is_acceptable(text), "expected {:?} to be accepted", text);
        }
    }

    #[test]
    fn test_rejects_invalid_text() {
        for text in ["12.3.4", "--5", "5-", "abc", "1e5", "+5", " 5", "1,5", "٣"] {
            assert!(!is_acceptable(text), "expected {:?} to be rejected", text);
        }
    }

    #[test]
    fn test_sanitize_keeps_previous_on_reject() {
        assert_eq!(sanitize("12.3.4", "12.3"), "12.3");
        assert_eq!(sanitize("-5", "5"), "-5");
        assert_eq!(sanitize("", "42"), "");
    }

    proptest! {
        #[test]
        fn prop_plain_decimals_accepted(int in "[0-9]{0,8}", frac in "[0-9]{0,8}", neg in any::<bool>()) {
            let text = format!("{}{}.{}", if neg { "-" } else { "" }, int, frac);
            prop_assert_eq!(sanitize(&text, "prev"), text.as_str());
        }

        #[test]
        fn prop_letters_rejected(prefix in "[0-9]{0,4}", letter in "[a-zA-Z]", suffix in "[0-9]{0,4}") {
            let text = format!("{}{}{}", prefix, letter, suffix);
            prop_assert_eq!(sanitize(&text, "prev"), "prev");
        }
    }
}
