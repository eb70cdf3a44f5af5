// SPDX-License-Identifier: MIT OR Apache-2.0

//! Levenshtein distance and the normalized "likeness" built on it.
//!
//! Costs O(len(a) * len(b)) time and space per pair, which is too slow to run
//! over very large stores on every keystroke.

/// Classic full-matrix Levenshtein distance over chars.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    distance_chars(&a, &b)
}

pub(crate) fn distance_chars(a: &[char], b: &[char]) -> usize {
    let rows = a.len() + 1;
    let cols = b.len() + 1;
    let mut matrix = vec![0usize; rows * cols];

    for i in 0..rows {
        matrix[i * cols] = i;
    }
    for j in 0..cols {
        matrix[j] = j;
    }

    for i in 1..rows {
        for j in 1..cols {
            let substitution = matrix[(i - 1) * cols + (j - 1)] + usize::from(a[i - 1] != b[j - 1]);
            let deletion = matrix[(i - 1) * cols + j] + 1;
            let insertion = matrix[i * cols + (j - 1)] + 1;
            matrix[i * cols + j] = substitution.min(deletion).min(insertion);
        }
    }

    matrix[rows * cols - 1]
}

/// `edit_distance(query, key) / len(key)`; lower is a closer match.
pub fn likeness(query: &str, key: &str) -> f64 {
    let key_len = key.chars().count();
    edit_distance(query, key) as f64 / key_len.max(1) as f64
}
