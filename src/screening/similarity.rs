//! Token-set overlap used wherever "close enough" beats exact equality.

use std::collections::HashSet;

/// Bag-of-words overlap between two strings, in `[0, 1]`.
///
/// Both inputs are lowercased and split on whitespace; the ratio is the
/// Jaccard index of the resulting token sets. Empty input on either side
/// yields 0.0. Symmetric and order-independent.
pub fn overlap_ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let tokens_a: HashSet<String> = a.to_lowercase().split_whitespace().map(String::from).collect();
    let tokens_b: HashSet<String> = b.to_lowercase().split_whitespace().map(String::from).collect();

    let union = tokens_a.union(&tokens_b).count();
    if union == 0 {
        return 0.0;
    }
    let common = tokens_a.intersection(&tokens_b).count();
    common as f64 / union as f64
}
