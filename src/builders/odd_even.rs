//! Batcher's odd-even mergesort network.

use crate::error::{Result, SortnetError};
use crate::network::ComparatorNetwork;

/// Build Batcher's odd-even mergesort network on `2^log2n` channels,
/// `log2n >= 1`.
///
/// The two halves are sorted recursively and merged by `log2n` rounds of
/// strided compare-exchange with the stride halving each round, giving
/// depth `t(t+1)/2` and size `n·t(t-1)/4 + n - 1` for `t = log2n`.
/// The construction is iterative: merge pass `i` contributes the levels
/// for every 2^i-wide block at once.
///
/// # Examples
///
/// ```
/// use sortnet::builders::odd_even;
///
/// let net = odd_even(3).unwrap();
/// assert_eq!(net.num_inputs(), 8);
/// assert_eq!(net.depth(), 6);
/// assert_eq!(net.size(), 19);
/// ```
pub fn odd_even(log2n: usize) -> Result<ComparatorNetwork> {
    if log2n < 1 {
        return Err(SortnetError::InvalidParameter(format!(
            "odd-even network exponent must be at least 1, got {log2n}"
        )));
    }

    let n = 1usize << log2n;
    let depth = log2n * (log2n + 1) / 2;
    let mut net = ComparatorNetwork::new(n, depth);
    let mut level = 0;

    for i in 1..=log2n {
        let p = 1usize << (i - 1);
        let mut j = p;

        while j > 0 {
            for k in ((j % p)..n - j).step_by(2 * j) {
                let upper = (j + k).min(n - j);

                for lo in k..upper {
                    let hi = lo + j;

                    // Compare only within a 2^i-wide block.
                    if (lo >> i) == (hi >> i) {
                        net.insert_comparator(level, lo, hi)?;
                    }
                }
            }

            level += 1;
            j /= 2;
        }
    }

    debug_assert_eq!(level, depth);
    net.set_name(format!("OddEven{n}"));
    Ok(net)
}
