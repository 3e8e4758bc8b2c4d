//! Currency-news keyword lexicon.
//!
//! The general-purpose polarity model underneath the scorer was trained on
//! English social-media text; it knows nothing about rupiah headlines. These
//! tables cover the vocabulary that actually moves currency news in both
//! English and Indonesian, and `keyword_boost` turns term hits into an
//! additive adjustment. Matching is substring-based on the lowercased text,
//! so surface forms are listed where Indonesian prefixes mangle the stem
//! (meN- + kuat becomes menguat, with no "kuat" left to match).

/// Terms that read as the currency or economy doing well.
pub const POSITIVE_TERMS: &[(&str, f64)] = &[
    // Indonesian
    ("menguat", 0.5),
    ("penguatan", 0.4),
    ("perkasa", 0.4),
    ("apresiasi", 0.4),
    ("membaik", 0.4),
    ("pulih", 0.4),
    ("pemulihan", 0.4),
    ("tumbuh", 0.3),
    ("surplus", 0.3),
    ("terkendali", 0.3),
    ("optimis", 0.3),
    ("naik", 0.2),
    ("stabil", 0.2),
    ("positif", 0.2),
    // English
    ("soar", 0.5),
    ("surge", 0.4),
    ("rally", 0.4),
    ("rallies", 0.4),
    ("strengthen", 0.4),
    ("record high", 0.4),
    ("rebound", 0.3),
    ("gains", 0.3),
    ("stable", 0.2),
];

/// Terms that read as the currency or economy under stress.
pub const NEGATIVE_TERMS: &[(&str, f64)] = &[
    // Indonesian
    ("anjlok", -0.6),
    ("ambruk", -0.6),
    ("krisis", -0.6),
    ("terpuruk", -0.5),
    ("merosot", -0.5),
    ("resesi", -0.5),
    ("keok", -0.5),
    ("lemah", -0.4),
    ("jatuh", -0.4),
    ("gejolak", -0.4),
    ("loyo", -0.4),
    ("depresiasi", -0.4),
    ("defisit", -0.3),
    ("turun", -0.3),
    ("inflasi tinggi", -0.3),
    ("tekan", -0.2),
    // English
    ("crash", -0.5),
    ("plunge", -0.5),
    ("weaken", -0.4),
    ("slump", -0.4),
    ("sell-off", -0.4),
    ("tumble", -0.4),
    ("crisis", -0.5),
    ("drops", -0.3),
];

/// Sum of the weights of every term found in `text` (case-insensitive).
/// Overlapping hits simply add up; the scorer clamps the final value.
pub fn keyword_boost(text: &str) -> f64 {
    let lower = text.to_lowercase();
    let mut boost = 0.0;

    for (term, weight) in POSITIVE_TERMS {
        if lower.contains(term) {
            boost += weight;
        }
    }
    for (term, weight) in NEGATIVE_TERMS {
        if lower.contains(term) {
            boost += weight; // weights are already negative
        }
    }

    boost
}
