//! Medication mention analysis
//!
//! Control flow: raw text → `NormalizedText` → per-category matching →
//! ordered `MatchReport`. The analyzer is stateless and never fails:
//! empty or noisy input yields an empty report.

pub mod matcher;
pub mod normalize;

use crate::catalog::catalog;
use crate::types::{Category, MatchReport};

pub use matcher::LONG_TERM_MIN_LEN;
pub use normalize::NormalizedText;

/// Analyze raw document text against the static catalog.
///
/// `raw_text` is the page texts joined with line breaks; it may be empty.
/// Categories appear in `Category::DISPLAY_ORDER` and categories without
/// matches are omitted from the report.
pub fn analyze(raw_text: &str) -> MatchReport {
    let text = NormalizedText::new(raw_text);
    let catalog = catalog();

    let mut report = MatchReport::new();
    for category in Category::DISPLAY_ORDER {
        let entries = match category {
            Category::NsaidsCoxi => {
                if matcher::nsaids_present(&text, catalog.nsaid_terms()) {
                    vec![Category::NsaidsCoxi.name()]
                } else {
                    Vec::new()
                }
            }
            listed => catalog
                .entries(listed)
                .map(|entries| matcher::match_entries(&text, entries))
                .unwrap_or_default(),
        };
        report.push(category, entries);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_report() {
        let report =
            analyze("Patient started OXYCODONE 10mg and reports pain; also on LYRICA.");

        let strong = report.entries(Category::StrongOpioids).unwrap();
        assert!(strong.contains(&"PERCOCET - OXYCODONE"));

        let adjuvants = report.entries(Category::Adjuvants).unwrap();
        assert_eq!(adjuvants, ["LYRICA - PREGABALIN"]);

        assert_eq!(report.len(), 2);
    }

    #[test]
    fn test_categories_in_display_order() {
        // Text mentions categories in reverse display order
        let report = analyze("muscol, then tramadol, then ibuprofen");

        let order: Vec<&str> = report.iter().map(|m| m.category.name()).collect();
        assert_eq!(
            order,
            ["NSAIDS, COXI", "Weak opioids", "Muscle relaxants"]
        );
    }

    #[test]
    fn test_nsaid_collapses_to_marker() {
        let report = analyze("naproxen and ibuprofen and diclofenac");
        assert_eq!(
            report.entries(Category::NsaidsCoxi).unwrap(),
            ["NSAIDS, COXI"]
        );
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_empty_and_noise_inputs() {
        assert!(analyze("").is_empty());
        assert!(analyze("1234 !!! \u{263a}").is_empty());
        assert!(analyze("nothing clinically relevant").is_empty());
    }

    #[test]
    fn test_idempotent() {
        let input = "targin 20mg, gabapentin at night, voltaren gel";
        assert_eq!(analyze(input), analyze(input));
    }
}
