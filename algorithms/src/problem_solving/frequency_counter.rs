//! Frequency-counter exercises: build a count map per input, then compare
//! maps instead of nesting loops. O(N) each.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

fn frequencies<K: Eq + Hash>(items: impl IntoIterator<Item = K>) -> HashMap<K, usize> {
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

/// True if `squares` holds the square of every value in `values`, with the
/// same multiplicities.
pub fn same(values: &[i64], squares: &[i64]) -> bool {
    if values.len() != squares.len() {
        return false;
    }
    let expected = frequencies(values.iter().map(|&v| i128::from(v) * i128::from(v)));
    let actual = frequencies(squares.iter().map(|&s| i128::from(s)));
    expected == actual
}

/// Case-insensitive anagram check.
pub fn valid_anagram(first: &str, second: &str) -> bool {
    let first = first.to_lowercase();
    let second = second.to_lowercase();
    if first.chars().count() != second.chars().count() {
        return false;
    }

    let mut counter: HashMap<char, usize> = frequencies(first.chars());
    for ch in second.chars() {
        match counter.get_mut(&ch) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }
    true
}

/// Counts of each ASCII letter or digit, lowercased. Anything else is skipped.
pub fn char_count(text: &str) -> BTreeMap<char, usize> {
    let mut result = BTreeMap::new();
    for ch in text.chars().map(|c| c.to_ascii_lowercase()) {
        if ch.is_ascii_alphanumeric() {
            *result.entry(ch).or_insert(0) += 1;
        }
    }
    result
}

/// True if both numbers are made of the same digits, counted with
/// multiplicity (`182` and `281`).
pub fn same_frequency(first: u64, second: u64) -> bool {
    fn digit_counts(mut n: u64) -> [usize; 10] {
        let mut counts = [0; 10];
        loop {
            counts[(n % 10) as usize] += 1;
            n /= 10;
            if n == 0 {
                return counts;
            }
        }
    }

    digit_counts(first) == digit_counts(second)
}
