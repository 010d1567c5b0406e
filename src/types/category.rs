//! Medication category definitions

/// The fixed set of screened medication categories.
///
/// `NsaidsCoxi` is synthetic: matching collapses to a single presence
/// marker instead of a list of entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    NsaidsCoxi,
    WeakOpioids,
    StrongOpioids,
    Adjuvants,
    MuscleRelaxants,
}

impl Category {
    /// Fixed display order for reports. The order is part of the output
    /// contract, not incidental.
    pub const DISPLAY_ORDER: [Category; 5] = [
        Category::NsaidsCoxi,
        Category::WeakOpioids,
        Category::StrongOpioids,
        Category::Adjuvants,
        Category::MuscleRelaxants,
    ];

    /// Display name, used as the report key.
    pub fn name(&self) -> &'static str {
        match self {
            Category::NsaidsCoxi => "NSAIDS, COXI",
            Category::WeakOpioids => "Weak opioids",
            Category::StrongOpioids => "Strong opioids",
            Category::Adjuvants => "Adjuvants / anti neuropathic pain",
            Category::MuscleRelaxants => "Muscle relaxants",
        }
    }
}
