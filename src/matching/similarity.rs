// Fuzzy string similarity used by the name and address checkers

use lazy_static::lazy_static;
use regex::Regex;

/// Score returned when one normalized value contains the other.
pub const CONTAINMENT_SCORE: f64 = 0.9;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    static ref PUNCTUATION: Regex = Regex::new(r"[.,/#!$%^&*;:{}=\-_`~()]").unwrap();
}

/// Canonical form used for comparison only, never for display.
///
/// Whitespace runs are collapsed before punctuation is stripped, so
/// `"a - b"` becomes `"a  b"`.
pub fn normalize_text(s: &str) -> String {
    let lowered = s.trim().to_lowercase();
    let collapsed = WHITESPACE_RUN.replace_all(&lowered, " ");
    PUNCTUATION.replace_all(&collapsed, "").into_owned()
}

/// Classic edit distance over chars, unit cost for insert, delete and substitute.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    if s1 == s2 {
        return 0;
    }

    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    if s1_chars.is_empty() {
        return s2_chars.len();
    }
    if s2_chars.is_empty() {
        return s1_chars.len();
    }

    let mut previous: Vec<usize> = (0..=s2_chars.len()).collect();
    let mut current = vec![0; s2_chars.len() + 1];

    for (i, c1) in s1_chars.iter().enumerate() {
        current[0] = i + 1;
        for (j, c2) in s2_chars.iter().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + cost);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[s2_chars.len()]
}

/// Similarity of two optional strings in `[0, 1]`.
///
/// Absent (or empty) input scores 0; callers filter to documents that carry
/// the field before comparing.
pub fn similarity(a: Option<&str>, b: Option<&str>) -> f64 {
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => (a, b),
        _ => return 0.0,
    };

    let s1 = normalize_text(a);
    let s2 = normalize_text(b);

    if s1 == s2 {
        return 1.0;
    }

    if s1.contains(s2.as_str()) || s2.contains(s1.as_str()) {
        return CONTAINMENT_SCORE;
    }

    let max_len = s1.chars().count().max(s2.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(&s1, &s2);
    (1.0 - distance as f64 / max_len as f64).clamp(0.0, 1.0)
}
