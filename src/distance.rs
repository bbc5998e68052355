//! Distance between two lists.


/// Sum of the absolute differences between `left` and `right` once both are
/// sorted and paired up by position.
///
/// If the lists differ in length, values past the end of the shorter one are
/// ignored. Each pair differs by at most `u64::MAX`, so the sum is widened to
/// `u128` and cannot overflow for any input that fits in memory.
pub fn total_distance(left: &[i64], right: &[i64]) -> u128 {
    let left = sorted(left);
    let right = sorted(right);

    left.iter()
        .zip(&right)
        .map(|(l, r)| u128::from(l.abs_diff(*r)))
        .sum()
}

fn sorted(values: &[i64]) -> Vec<i64> {
    let mut values = values.to_vec();
    values.sort_unstable();
    values
}
