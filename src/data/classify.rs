//! Keyword Classifier Module
//! Buckets free-text titles into subject categories by substring match.

/// Ordered keyword rules with a fallback bucket.
///
/// Rules are checked first to last and the first label whose keyword list
/// matches wins, so rule order carries meaning: "Moon" precedes "Eclipses"
/// and a "Total Lunar Eclipse" is bucketed as Moon.
pub struct KeywordClassifier {
    rules: &'static [(&'static str, &'static [&'static str])],
    fallback: &'static str,
}

impl KeywordClassifier {
    pub const fn new(
        rules: &'static [(&'static str, &'static [&'static str])],
        fallback: &'static str,
    ) -> Self {
        Self { rules, fallback }
    }

    /// Case-insensitive first-match classification.
    pub fn classify(&self, text: &str) -> &'static str {
        let lower = text.to_lowercase();
        for (label, keywords) in self.rules {
            if keywords.iter().any(|k| lower.contains(k)) {
                return label;
            }
        }
        self.fallback
    }
}

/// Display/stacking order for APOD subjects, most common first.
pub const APOD_SUBJECT_ORDER: [&str; 10] = [
    "Galaxies",
    "Nebulae",
    "Milky Way",
    "Moon",
    "Planets",
    "Auroras",
    "Comets",
    "Sun",
    "Eclipses",
    "Other",
];

/// Subject buckets for APOD photo titles.
///
/// Messier designations count as galaxies since the famous ones (M31, M51,
/// M81...) dominate amateur deep-sky portfolios.
pub const APOD_SUBJECTS: KeywordClassifier = KeywordClassifier::new(
    &[
        ("Nebulae", &["nebula", "nebulae"]),
        (
            "Galaxies",
            &["galaxy", "galaxies", "andromeda", "m31", "m33", "m51", "m81", "m82"],
        ),
        ("Milky Way", &["milky way"]),
        (
            "Auroras",
            &["aurora", "northern light", "southern light"],
        ),
        ("Moon", &["moon", "lunar"]),
        ("Eclipses", &["eclipse"]),
        ("Comets", &["comet"]),
        ("Sun", &["sun", "solar", "sunspot"]),
        (
            "Planets",
            &["mars", "jupiter", "saturn", "venus", "planet"],
        ),
    ],
    "Other",
);
