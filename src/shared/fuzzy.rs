use std::cmp;

/// Levenshtein distance over chars, using two rolling rows.
pub(crate) fn distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0usize; b.len() + 1];
    for (i, ac) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let sub_cost = if ac == bc { 0 } else { 1 };
            current[j + 1] = cmp::min(
                cmp::min(previous[j + 1] + 1, current[j] + 1),
                previous[j] + sub_cost,
            );
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}

/// Scores `needle` against `hay` in `[0, 1]`.
///
/// Every needle token is compared with its best matching hay token, so
/// "paota circle" still finds "Circle Paota".
pub(crate) fn score(needle: &str, hay: &str) -> f64 {
    let hay_tokens: Vec<_> = hay.split_whitespace().collect();
    if hay_tokens.is_empty() {
        return 0.0;
    }
    let mut tokens = 0;
    let mut total: f64 = 0.0;
    for token in needle.split_whitespace() {
        tokens += 1;
        total += hay_tokens
            .iter()
            .map(|hay_token| score_token(token, hay_token))
            .fold(0.0, f64::max);
    }
    if tokens == 0 { 0.0 } else { total / tokens as f64 }
}

fn score_token(token: &str, hay_token: &str) -> f64 {
    if hay_token.starts_with(token) {
        return 1.0;
    }
    let longest = cmp::max(token.chars().count(), hay_token.chars().count());
    1.0 - (distance(token, hay_token) as f64 / longest as f64)
}

#[test]
fn fuzzy_empty_vs_empty() {
    assert_eq!(distance("", ""), 0);
}

#[test]
fn fuzzy_empty_vs_nonempty() {
    assert_eq!(distance("", "abc"), 3);
}

#[test]
fn fuzzy_completely_different() {
    assert_eq!(distance("kitten", "orange"), 6);
}

#[test]
fn fuzzy_transliteration_typo() {
    assert_eq!(distance("sardarpura", "sardarpur"), 1);
}

#[test]
fn fuzzy_devanagari() {
    assert_eq!(distance("पावटा", "पावटा"), 0);
    assert_eq!(distance("पावटा", "पावा"), 1);
}

#[test]
fn fuzzy_longer_sequence() {
    assert_eq!(distance("intention", "execution"), 5);
}

#[test]
fn score_is_token_order_agnostic() {
    assert_eq!(score("paota circle", "circle paota"), 1.0);
}

#[test]
fn score_prefix_is_full_match() {
    assert_eq!(score("ratan", "ratanada"), 1.0);
}

#[test]
fn score_unrelated_is_low() {
    assert!(score("airport", "clock tower") < 0.5);
}
