//! Caption normalization
//!
//! Applied once, before the grammar sees the caption. Every step is total and
//! none of them can re-create what an earlier step removed, so the whole
//! function is idempotent.

use once_cell::sync::Lazy;
use regex::Regex;

/// A final run of `. , : ;` and whitespace
static TRAILING_PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.,:;\s]+\z").expect("trailing punctuation pattern is valid"));

/// Normalize a raw caption.
///
/// In order: drop one trailing line terminator, lowercase, delete `*`, turn
/// tabs into spaces, trim, and strip trailing punctuation.
pub fn normalize(caption: &str) -> String {
    let chomped = caption
        .strip_suffix("\r\n")
        .or_else(|| caption.strip_suffix('\n'))
        .or_else(|| caption.strip_suffix('\r'))
        .unwrap_or(caption);

    let cleaned = chomped.to_lowercase().replace('*', "").replace('\t', " ");

    TRAILING_PUNCTUATION
        .replace(cleaned.trim(), "")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_trims() {
        assert_eq!(normalize("  V.12 No.3  "), "v.12 no.3");
    }

    #[test]
    fn test_strips_trailing_punctuation_run() {
        assert_eq!(normalize("v.1, 1990.;: ,"), "v.1, 1990");
        assert_eq!(normalize("suppl."), "suppl");
    }

    #[test]
    fn test_removes_asterisks_and_tabs() {
        assert_eq!(normalize("v.1*\t1990*"), "v.1 1990");
    }

    #[test]
    fn test_chomps_line_terminators() {
        assert_eq!(normalize("v.1\r\n"), "v.1");
        assert_eq!(normalize("v.1\n"), "v.1");
    }

    #[test]
    fn test_punctuation_only_becomes_empty() {
        assert_eq!(normalize(" .,;: "), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_interior_punctuation_is_kept() {
        assert_eq!(normalize("jan./feb. 1999"), "jan./feb. 1999");
    }

    #[test]
    fn test_idempotent_on_samples() {
        for raw in ["V. 3 :", "*New Ser.*\t", "(1985-86).", "no.5a, v.3;"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }
}
