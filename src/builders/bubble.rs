//! Bubble-type sorting networks.
//!
//! Three quadratic-size constructions that work for any width:
//!
//! - [`bubble`]: odd-even transposition sort. Alternating levels compare
//!   disjoint adjacent pairs, covering all n(n-1)/2 pairs in n levels.
//! - [`bubble_min`]: two triangular passes that bubble the minimum
//!   forward one channel at a time, then the next minimum, and so on.
//! - [`bubble_max`]: the mirror image, bubbling the maximum backward.
//!
//! The min and max variants have depth 2n - 3, the worst of the classical
//! constructions; they exist as a baseline and for their distinctive
//! triangular layout.

use crate::error::{Result, SortnetError};
use crate::network::ComparatorNetwork;

fn check_width(n: usize, label: &str) -> Result<()> {
    if n < 2 {
        return Err(SortnetError::InvalidParameter(format!(
            "{label} network needs at least 2 inputs, got {n}"
        )));
    }
    Ok(())
}

/// Build an odd-even transposition sorting network on `n >= 2` channels.
///
/// Depth is `n` (or 1 when `n = 2`), size is `n(n-1)/2`. Level 0 pairs
/// adjacent channels starting at 0, so the result is in first normal
/// form.
///
/// # Examples
///
/// ```
/// use sortnet::builders::bubble;
///
/// let net = bubble(4).unwrap();
/// assert_eq!(net.depth(), 4);
/// assert_eq!(net.size(), 6);
/// assert!(net.first_normal_form());
/// ```
pub fn bubble(n: usize) -> Result<ComparatorNetwork> {
    check_width(n, "a bubblesort")?;

    let depth = if n == 2 { 1 } else { n };
    let mut net = ComparatorNetwork::new(n, depth);

    for level in 0..depth {
        for lo in (level % 2..n - 1).step_by(2) {
            net.insert_comparator(level, lo, lo + 1)?;
        }
    }

    net.set_name(format!("Bubblesort{n}"));
    Ok(net)
}

/// Build a min-bubblesort network on `n >= 2` channels: depth `2n - 3`,
/// size `n(n-1)/2`, bubbling each successive minimum toward channel 0.
pub fn bubble_min(n: usize) -> Result<ComparatorNetwork> {
    check_width(n, "a min-bubblesort")?;

    let depth = 2 * n - 3;
    let mut net = ComparatorNetwork::new(n, depth);

    // Leading triangle.
    for level in 0..n.min(depth) {
        for j in (level % 2..(level + 1).min(n - 1)).step_by(2) {
            let lo = n - j - 2;
            net.insert_comparator(level, lo, lo + 1)?;
        }
    }

    // Trailing triangle.
    for i in 0..n - 2 {
        let start = (n % 2) ^ (i % 2);

        for j in (start..n - i - 2).step_by(2) {
            let lo = n - j - 2;
            net.insert_comparator(i + n, lo, lo + 1)?;
        }
    }

    net.set_name(format!("BubblesortMin{n}"));
    Ok(net)
}

/// Build a max-bubblesort network on `n >= 2` channels: depth `2n - 3`,
/// size `n(n-1)/2`, bubbling each successive maximum toward channel
/// `n - 1`.
pub fn bubble_max(n: usize) -> Result<ComparatorNetwork> {
    check_width(n, "a max-bubblesort")?;

    let depth = 2 * n - 3;
    let mut net = ComparatorNetwork::new(n, depth);

    // Leading triangle.
    for level in 0..n.min(depth) {
        for lo in (level % 2..(level + 1).min(n - 1)).step_by(2) {
            net.insert_comparator(level, lo, lo + 1)?;
        }
    }

    // Trailing triangle.
    for i in 0..n - 2 {
        let start = (n % 2) ^ (i % 2);

        for lo in (start..n - i - 2).step_by(2) {
            net.insert_comparator(i + n, lo, lo + 1)?;
        }
    }

    net.set_name(format!("BubblesortMax{n}"));
    Ok(net)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bubble_4() {
        let net = bubble(4).unwrap();
        assert_eq!(net.num_inputs(), 4);
        assert_eq!(net.depth(), 4);
        assert_eq!(net.size(), 6);

        // Alternating adjacent pairs.
        assert_eq!(net.comparators(0).collect::<Vec<_>>(), vec![(0, 1), (2, 3)]);
        assert_eq!(net.comparators(1).collect::<Vec<_>>(), vec![(1, 2)]);
        assert_eq!(net.comparators(2).collect::<Vec<_>>(), vec![(0, 1), (2, 3)]);
        assert_eq!(net.comparators(3).collect::<Vec<_>>(), vec![(1, 2)]);
    }

    #[test]
    fn test_bubble_2_is_single_comparator() {
        let net = bubble(2).unwrap();
        assert_eq!(net.depth(), 1);
        assert_eq!(net.size(), 1);
    }

    #[test]
    fn test_bubble_covers_all_pairs() {
        // Across the run, every unordered pair of adjacent-rank channels
        // appears; total size is the full n(n-1)/2.
        for n in 2..=9 {
            let net = bubble(n).unwrap();
            assert_eq!(net.size(), n * (n - 1) / 2, "n = {n}");
        }
    }

    #[test]
    fn test_triangular_shapes() {
        for n in 2..=9 {
            for (net, label) in [
                (bubble_min(n).unwrap(), "min"),
                (bubble_max(n).unwrap(), "max"),
            ] {
                assert_eq!(net.depth(), 2 * n - 3, "{label} n = {n}");
                assert_eq!(net.size(), n * (n - 1) / 2, "{label} n = {n}");
            }
        }
    }

    #[test]
    fn test_min_max_mirror_each_other() {
        let n = 6;
        let min = bubble_min(n).unwrap();
        let max = bubble_max(n).unwrap();

        for level in 0..min.depth() {
            let mirrored: Vec<(usize, usize)> = max
                .comparators(level)
                .map(|(lo, hi)| (n - 1 - hi, n - 1 - lo))
                .collect();
            let mut got: Vec<(usize, usize)> = min.comparators(level).collect();
            got.sort();
            let mut mirrored = mirrored;
            mirrored.sort();
            assert_eq!(got, mirrored, "level {level}");
        }
    }

    #[test]
    fn test_degenerate_width() {
        assert!(bubble(1).is_err());
        assert!(bubble_min(0).is_err());
        assert!(bubble_max(1).is_err());
    }

    #[test]
    fn test_names() {
        assert_eq!(bubble(5).unwrap().name(), "Bubblesort5");
        assert_eq!(bubble_min(5).unwrap().name(), "BubblesortMin5");
        assert_eq!(bubble_max(5).unwrap().name(), "BubblesortMax5");
    }
}
