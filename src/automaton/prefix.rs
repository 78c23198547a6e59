/// Compute the KMP prefix (failure) function of a pattern.
///
/// `result[i]` is the length of the longest border of `pattern[0..=i]`: the
/// longest proper prefix that is also a suffix of the prefix ending at `i`.
/// `result[0]` is always 0. Amortized O(m): the candidate border length only
/// grows by one per position, bounding the total fallback work.
pub fn prefix_function(pattern: &[char]) -> Vec<usize> {
    let mut prefix = vec![0usize; pattern.len()];

    let mut k = 0; // candidate border length
    for i in 1..pattern.len() {
        while k > 0 && pattern[k] != pattern[i] {
            k = prefix[k - 1];
        }
        if pattern[k] == pattern[i] {
            k += 1;
            prefix[i] = k;
        }
        // otherwise prefix[i] stays 0
    }

    prefix
}
