//! Static medication catalog
//!
//! The catalog is compiled into the binary: per category, entry display
//! strings whose hyphen-separated parts are the matchable synonyms, plus a
//! flat NSAID/COX-inhibitor term list. The raw tables below are the single
//! source of truth; they are split and reduced once at startup, so request
//! handling only ever reads the precomputed form.

use std::sync::LazyLock;

use crate::analyzer::normalize::letters_only;
use crate::types::Category;

/// Weak opioid entries.
pub const WEAK_OPIOIDS: &[&str] = &[
    "ROKACET - ROKACET PLUS",
    "ZALDIAR",
    "TRAMADEX - TRAMADOL - Tramal",
    "BUTRANS - BUPERNORPHINE",
];

/// Strong opioid entries.
pub const STRONG_OPIOIDS: &[&str] = &[
    "PERCOCET - OXYCODONE",
    "TARGIN - OXYCODONE",
    "OXYCONTIN – OXYCODONE",
    "OXYCOD SYRUP",
    "FENTANYL - fenta- fentadol",
    "MORPHINE - MCR - MIR",
];

/// Adjuvant / anti-neuropathic pain entries.
pub const ADJUVANTS: &[&str] = &[
    "LYRICA - PREGABALIN",
    "GABAPENTIN - neurontin",
    "CYMBALTA - DULOXETINE - dulox",
    "VENLAFAXINE - VIEPAX - venla",
    "ELATROL - AMITRIPTYLINE - elatrolet",
    "NORTYLIN - NORTRIPTYLINE",
    "IXEL - MILNACIPRAN",
    "TEGRETOL - CARBAMAZEPINE - teril -",
    "TRILEPTIN – OXCARBAZEPINE - trileptal - trexapin - timonil- carbi ",
];

/// Muscle relaxant entries.
pub const MUSCLE_RELAXANTS: &[&str] = &[
    "MUSCOL",
    "BACLOSAL – BACLOFEN",
    "DANTRIUM – DANTROLENE",
];

/// Free-standing NSAID/COX-inhibitor terms. A single hit marks the
/// synthetic category present; individual terms are never listed.
pub const NSAID_TERMS: &[&str] = &[
    "ARCOXIA",
    "ETORICOXIB",
    "CELCOX",
    "CELECOXIB",
    "IBUPROFEN",
    "NUROFEN",
    "COMBODEX",
    "Advil",
    "Etopan",
    "Etodalac",
    "Voltaren",
    "Abitren",
    "Diclofenac",
    "brexin",
    "indomethacin",
    "naxin",
    "naproxen",
    "piroxicam",
    "point",
];

/// One catalog entry: the display string plus its precomputed letters-only
/// synonyms, in declaration order.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Display string reported to callers, e.g. `"PERCOCET - OXYCODONE"`.
    pub display: &'static str,
    /// Letters-only lowercase synonyms derived from `display`.
    pub synonyms: Vec<String>,
}

impl Entry {
    fn from_display(display: &'static str) -> Self {
        Self {
            display,
            synonyms: split_synonyms(display),
        }
    }
}

/// Precomputed catalog shared by every analysis.
///
/// Immutable after construction, so it is safe to share across any number
/// of concurrent requests without locking.
#[derive(Debug)]
pub struct Catalog {
    categories: Vec<(Category, Vec<Entry>)>,
    nsaid_terms: Vec<String>,
}

impl Catalog {
    fn build() -> Self {
        let raw: [(Category, &'static [&'static str]); 4] = [
            (Category::WeakOpioids, WEAK_OPIOIDS),
            (Category::StrongOpioids, STRONG_OPIOIDS),
            (Category::Adjuvants, ADJUVANTS),
            (Category::MuscleRelaxants, MUSCLE_RELAXANTS),
        ];

        let categories = raw
            .into_iter()
            .map(|(category, entries)| {
                let entries = entries.iter().map(|&d| Entry::from_display(d)).collect();
                (category, entries)
            })
            .collect();

        let nsaid_terms = NSAID_TERMS.iter().map(|t| letters_only(t)).collect();

        Self {
            categories,
            nsaid_terms,
        }
    }

    /// Listed categories (everything except the synthetic NSAID pass), in
    /// declaration order.
    pub fn listed_categories(&self) -> &[(Category, Vec<Entry>)] {
        &self.categories
    }

    /// Entries for one listed category. `None` for `NsaidsCoxi`, which has
    /// no entry list.
    pub fn entries(&self, category: Category) -> Option<&[Entry]> {
        self.categories
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, entries)| entries.as_slice())
    }

    /// Letters-only NSAID/COX terms.
    pub fn nsaid_terms(&self) -> &[String] {
        &self.nsaid_terms
    }
}

/// Shared immutable catalog, built once on first use.
pub fn catalog() -> &'static Catalog {
    static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::build);
    &CATALOG
}

/// Split an entry display string on hyphen-like separators into its
/// letters-only synonyms, dropping parts that reduce to nothing (trailing
/// separators leave empty fragments).
fn split_synonyms(display: &str) -> Vec<String> {
    display
        .split(['-', '–'])
        .map(letters_only)
        .filter(|s| !s.is_empty())
        .collect()
}
