//! String similarity used to compare fragments against catalog names.

/// Normalize a string for comparison (trim and lowercase).
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Calculate Levenshtein distance between two strings.
///
/// Insertion, deletion and substitution each cost 1. Operates on `char`s so
/// accented names count one edit per letter.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    char_distance(&a_chars, &b_chars)
}

/// Levenshtein distance over pre-split characters.
pub(crate) fn char_distance(a_chars: &[char], b_chars: &[char]) -> usize {
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rows instead of the full matrix
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Similarity in `[0, 1]` between two strings after normalization.
///
/// `(L - distance) / L` where `L` is the char length of the longer string.
/// Two empty strings are identical (1.0); empty against non-empty is 0.0.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = normalize(a).chars().collect();
    let b_chars: Vec<char> = normalize(b).chars().collect();
    char_similarity(&a_chars, &b_chars)
}

/// Same as [`similarity`] for inputs that are already normalized and split.
pub(crate) fn char_similarity(a: &[char], b: &[char]) -> f64 {
    if a == b {
        return 1.0;
    }

    let (longer, shorter) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let longer_len = longer.len();
    if longer_len == 0 {
        return 1.0;
    }

    let distance = char_distance(longer, shorter);
    (longer_len - distance) as f64 / longer_len as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("abc", "abc"), 0);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("saturday", "sunday"), 3);
    }

    #[test]
    fn test_levenshtein_counts_chars_not_bytes() {
        assert_eq!(levenshtein_distance("mbappé", "mbappe"), 1);
        assert_eq!(levenshtein_distance("é", ""), 1);
    }

    #[test]
    fn test_levenshtein_symmetric() {
        let pairs = [
            ("lacazette", "lacazete"),
            ("paris saint-germain", "psg"),
            ("", "lille"),
            ("olympique lyonnais", "lyon"),
        ];
        for (a, b) in pairs {
            assert_eq!(levenshtein_distance(a, b), levenshtein_distance(b, a));
            assert_eq!(levenshtein_distance(a, a), 0);
        }
    }

    #[test]
    fn test_similarity_identity() {
        for s in ["Kylian Mbappé", "  PSG ", "", "x"] {
            assert_eq!(similarity(s, s), 1.0);
        }
    }

    #[test]
    fn test_similarity_normalizes_case_and_whitespace() {
        assert_eq!(similarity("  MBAPPÉ ", "Mbappé"), 1.0);
        assert_eq!(similarity("LYON", "lyon"), 1.0);
    }

    #[test]
    fn test_similarity_empty_cases() {
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("   ", ""), 1.0);
        assert_eq!(similarity("lille", ""), 0.0);
        assert_eq!(similarity("", "lille"), 0.0);
    }

    #[test]
    fn test_similarity_partial() {
        // one substitution over six chars
        let score = similarity("MBAPPE", "Mbappé");
        assert!((score - 5.0 / 6.0).abs() < 1e-9);

        assert!(similarity("kitten", "sitting") > 0.5);
        assert!(similarity("abc", "xyz") < 0.5);
        assert!(similarity("PSG", "Paris Saint-Germain") < 0.3);
    }
}
