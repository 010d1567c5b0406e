//! Length-dependent term matching
//!
//! Long terms match by substring containment against the letters-only
//! stream; short terms must appear as whole tokens. Short strings like
//! "mir" would otherwise fire inside unrelated words ("admire").

use crate::catalog::Entry;

use super::normalize::NormalizedText;

/// Letters-only length at which a term switches from whole-token lookup to
/// substring containment.
pub const LONG_TERM_MIN_LEN: usize = 4;

/// Check one letters-only term against the normalized text.
pub fn term_present(text: &NormalizedText, term: &str) -> bool {
    if term.len() >= LONG_TERM_MIN_LEN {
        text.stream_contains(term)
    } else {
        text.has_word(term)
    }
}

/// Collect matched entry display strings for one category.
///
/// Entries are checked in declaration order; an entry is confirmed by its
/// first matching synonym (remaining synonyms are skipped) and listed at
/// most once. Multiplicity of occurrence in the text is irrelevant.
pub fn match_entries(text: &NormalizedText, entries: &[Entry]) -> Vec<&'static str> {
    let mut matched = Vec::new();

    for entry in entries {
        if entry.synonyms.iter().any(|s| term_present(text, s)) && !matched.contains(&entry.display)
        {
            matched.push(entry.display);
        }
    }

    matched
}

/// True when any NSAID/COX term is present. Stops at the first hit; the
/// caller only records a boolean.
pub fn nsaids_present(text: &NormalizedText, terms: &[String]) -> bool {
    terms.iter().any(|t| term_present(text, t))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(display: &'static str, synonyms: &[&str]) -> Entry {
        Entry {
            display,
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_long_term_matches_by_containment() {
        let text = NormalizedText::new("post-op oxycodone taper");
        assert!(term_present(&text, "oxycodone"));
        // Containment inside a longer surrounding word is intentional
        let text = NormalizedText::new("prescribed oxycodones");
        assert!(term_present(&text, "oxycodone"));
    }

    #[test]
    fn test_short_term_requires_whole_token() {
        let text = NormalizedText::new("we admire the view");
        assert!(!term_present(&text, "mir"));

        let text = NormalizedText::new("switched to MIR today");
        assert!(term_present(&text, "mir"));
    }

    #[test]
    fn test_threshold_boundary() {
        // Four letters is already long: containment applies
        let text = NormalizedText::new("xxabcdyy");
        assert!(term_present(&text, "abcd"));
        // Three letters is short: the fused stream is not consulted
        assert!(!term_present(&text, "abc"));
    }

    #[test]
    fn test_entry_confirmed_by_first_matching_synonym() {
        let text = NormalizedText::new("tramadex and tramadol together");
        let entries = [entry("TRAMADEX - TRAMADOL - Tramal", &["tramadex", "tramadol", "tramal"])];

        // Both synonyms occur, the entry is still listed exactly once
        assert_eq!(
            match_entries(&text, &entries),
            vec!["TRAMADEX - TRAMADOL - Tramal"]
        );
    }

    #[test]
    fn test_entries_keep_declaration_order() {
        let text = NormalizedText::new("baclofen after dantrolene");
        let entries = [
            entry("MUSCOL", &["muscol"]),
            entry("BACLOSAL – BACLOFEN", &["baclosal", "baclofen"]),
            entry("DANTRIUM – DANTROLENE", &["dantrium", "dantrolene"]),
        ];

        // Text order is dantrolene first; result order follows the catalog
        assert_eq!(
            match_entries(&text, &entries),
            vec!["BACLOSAL – BACLOFEN", "DANTRIUM – DANTROLENE"]
        );
    }

    #[test]
    fn test_no_match_yields_empty_list() {
        let text = NormalizedText::new("no relevant terms here");
        let entries = [entry("MUSCOL", &["muscol"])];
        assert!(match_entries(&text, &entries).is_empty());
    }

    #[test]
    fn test_nsaids_present_any_term() {
        let terms: Vec<String> = ["arcoxia", "ibuprofen", "point"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        assert!(nsaids_present(&NormalizedText::new("on ibuprofen"), &terms));
        // "point" is long enough for containment
        assert!(nsaids_present(
            &NormalizedText::new("disappointed patient"),
            &terms
        ));
        assert!(!nsaids_present(&NormalizedText::new("paracetamol"), &terms));
    }
}
