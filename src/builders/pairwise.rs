//! The pairwise sorting network.

use crate::error::{Result, SortnetError};
use crate::network::ComparatorNetwork;

/// Build the pairwise sorting network on `2^log2n` channels,
/// `log2n >= 1`.
///
/// The first `log2n` levels sort pairs at strides 1, 2, 4, ... with
/// adjacent compare-exchange; the remaining levels merge the sorted
/// pairs with a non-recursive placement pattern indexed by powers of
/// two. Depth and size match the odd-even mergesort exactly:
/// `t(t+1)/2` and `n·t(t-1)/4 + n - 1` for `t = log2n`.
///
/// # Examples
///
/// ```
/// use sortnet::builders::pairwise;
///
/// let net = pairwise(2).unwrap();
/// assert_eq!(net.num_inputs(), 4);
/// assert_eq!(net.depth(), 3);
/// assert_eq!(net.size(), 5);
/// ```
pub fn pairwise(log2n: usize) -> Result<ComparatorNetwork> {
    if log2n < 1 {
        return Err(SortnetError::InvalidParameter(format!(
            "pairwise network exponent must be at least 1, got {log2n}"
        )));
    }

    let n = 1usize << log2n;
    let depth = log2n * (log2n + 1) / 2;
    let mut net = ComparatorNetwork::new(n, depth);
    let mut level = 0;

    // Pair-sorting phase: one level per stride.
    let mut i = 1;
    while i < n {
        for j in 0..i {
            let mut lo = j;

            while lo < n {
                net.insert_comparator(level, lo, lo + i)?;
                lo += 2 * i;
            }
        }

        level += 1;
        i <<= 1;
    }

    // Merge phase: comparators at distance i*j in groups of i, skipping
    // i channels between groups.
    let mut k = 1;
    let mut i = n >> 2;

    while i > 0 {
        let mut j = k;

        while j > 0 {
            let delta = i * j;
            let mut hi = i + delta;
            let mut count = 0;

            while hi < n {
                net.insert_comparator(level, hi - delta, hi)?;
                hi += 1;
                count += 1;

                if count >= i {
                    count = 0;
                    hi += i;
                }
            }

            level += 1;
            j >>= 1;
        }

        k = 2 * k + 1;
        i >>= 1;
    }

    debug_assert_eq!(level, depth);
    net.set_name(format!("Pairwise{n}"));
    Ok(net)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairwise_4() {
        let net = pairwise(2).unwrap();
        assert_eq!(net.num_inputs(), 4);
        assert_eq!(net.depth(), 3);
        assert_eq!(net.size(), 5);

        assert_eq!(net.comparators(0).collect::<Vec<_>>(), vec![(0, 1), (2, 3)]);
        assert_eq!(net.comparators(1).collect::<Vec<_>>(), vec![(0, 2), (1, 3)]);
        assert_eq!(net.comparators(2).collect::<Vec<_>>(), vec![(1, 2)]);
    }

    #[test]
    fn test_closed_form_depth_and_size() {
        for t in 1..=5 {
            let net = pairwise(t).unwrap();
            let n = 1 << t;
            assert_eq!(net.depth(), t * (t + 1) / 2);
            assert_eq!(net.size(), n * t * (t - 1) / 4 + n - 1);
            assert!(net.first_normal_form());
        }
    }

    #[test]
    fn test_rejects_zero_exponent() {
        assert!(pairwise(0).is_err());
    }

    #[test]
    fn test_name() {
        assert_eq!(pairwise(3).unwrap().name(), "Pairwise8");
    }
}
