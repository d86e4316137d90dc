//! Approximate command matching for mistyped or transliterated input.
//!
//! A pure function of (input, candidate list): the input is transliterated
//! to Latin, scored against every known command with a normalized
//! Levenshtein ratio, and the single best candidate is returned when it
//! clears a deliberately permissive threshold.

pub mod translit;

pub use translit::transliterate;

/// Minimum similarity ratio a candidate must reach to be suggested.
/// Low on purpose: almost any input should yield some suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.1;

/// Suggests the closest-matching candidate for `input`, or `None` when
/// nothing clears the threshold. Ties keep the earlier candidate.
pub fn suggest_command<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    let normalized = transliterate(input);
    let mut best: Option<(&'a str, f64)> = None;
    for candidate in candidates.iter().copied() {
        let score = similarity(&normalized, candidate);
        if score < SUGGESTION_THRESHOLD {
            continue;
        }
        match best {
            Some((_, best_score)) if best_score >= score => {}
            _ => best = Some((candidate, score)),
        }
    }
    best.map(|(candidate, _)| candidate)
}

/// Normalized similarity in [0, 1]: 1.0 for equal strings, 0.0 for
/// strings with nothing in common.
pub fn similarity(a: &str, b: &str) -> f64 {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    let longest = len_a.max(len_b);
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / longest as f64
}

/// Character-based Levenshtein distance, space-optimized to a single row.
fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut row: Vec<usize> = (0..=b_chars.len()).collect();
    for (i, ca) in a_chars.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            let next = (diagonal + cost).min(row[j] + 1).min(row[j + 1] + 1);
            diagonal = row[j + 1];
            row[j + 1] = next;
        }
    }
    row[b_chars.len()]
}
