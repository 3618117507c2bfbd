//! Batcher's bitonic sorting network.

use crate::error::{Result, SortnetError};
use crate::network::ComparatorNetwork;

/// A comparator under construction: the channel receiving the minimum
/// and the channel receiving the maximum. Until the twisting pass runs,
/// `min` may exceed `max` (a max-min orientation).
#[derive(Clone, Copy)]
struct Comparator {
    min: usize,
    max: usize,
}

/// Build Batcher's bitonic sorting network on `2^log2n` channels,
/// `log2n >= 1`.
///
/// The textbook construction sorts one half ascending and the other
/// descending, which emits comparators of both orientations. Max-min
/// comparators cannot be stored in a matching table, which has no
/// direction, so a second pass rewrites them: whenever a max-min
/// comparator is found, its endpoints are swapped and the identities of
/// the two channels are exchanged at every later level (a "twist").
/// The twisted network is the standard form of the original and sorts
/// exactly when it does.
///
/// Depth is `t(t+1)/2` and size `n·t(t+1)/4` for `t = log2n`; every
/// level carries `n/2` comparators.
///
/// # Examples
///
/// ```
/// use sortnet::builders::bitonic;
///
/// let net = bitonic(2).unwrap();
/// assert_eq!(net.num_inputs(), 4);
/// assert_eq!(net.depth(), 3);
/// assert_eq!(net.size(), 6);
/// ```
pub fn bitonic(log2n: usize) -> Result<ComparatorNetwork> {
    if log2n < 1 {
        return Err(SortnetError::InvalidParameter(format!(
            "bitonic network exponent must be at least 1, got {log2n}"
        )));
    }

    let n = 1usize << log2n;
    let depth = log2n * (log2n + 1) / 2;

    let mut levels = emit_comparators(n, depth);
    make_all_min_max(&mut levels);

    let mut net = ComparatorNetwork::new(n, depth);

    for (level, comparators) in levels.iter().enumerate() {
        for c in comparators {
            net.insert_comparator(level, c.min, c.max)?;
        }
    }

    net.set_name(format!("Bitonic{n}"));
    Ok(net)
}

/// Emit the raw bitonic comparators level by level, in both min-max and
/// max-min orientations.
fn emit_comparators(n: usize, depth: usize) -> Vec<Vec<Comparator>> {
    let mut levels: Vec<Vec<Comparator>> = vec![Vec::new(); depth];
    let mut level = 0;
    let mut i = 2;

    while i <= n {
        let mut j = i / 2;

        while j > 0 {
            for a in 0..n {
                let b = a ^ j;

                if b > a {
                    levels[level].push(if a & i != 0 {
                        Comparator { min: a, max: b }
                    } else {
                        Comparator { min: b, max: a }
                    });
                }
            }

            level += 1;
            j /= 2;
        }

        i *= 2;
    }

    debug_assert_eq!(level, depth);
    levels
}

/// Rewrite every max-min comparator to min-max form, twisting the two
/// channel identities at all later levels each time.
fn make_all_min_max(levels: &mut [Vec<Comparator>]) {
    for l in 0..levels.len() {
        let (head, tail) = levels.split_at_mut(l + 1);

        for c in head[l].iter_mut() {
            if c.max < c.min {
                std::mem::swap(&mut c.min, &mut c.max);
                twist(tail, c.min, c.max);
            }
        }
    }
}

/// Swap the identities of channels `a` and `b` in every comparator of
/// the given levels.
fn twist(levels: &mut [Vec<Comparator>], a: usize, b: usize) {
    for comparators in levels {
        for c in comparators {
            for endpoint in [&mut c.min, &mut c.max] {
                if *endpoint == a {
                    *endpoint = b;
                } else if *endpoint == b {
                    *endpoint = a;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitonic_4() {
        let net = bitonic(2).unwrap();
        assert_eq!(net.num_inputs(), 4);
        assert_eq!(net.depth(), 3);
        assert_eq!(net.size(), 6);

        // Every level of a bitonic network is a perfect matching.
        for level in 0..net.depth() {
            assert_eq!(net.comparators(level).count(), 2);
        }
    }

    #[test]
    fn test_closed_form_depth_and_size() {
        for t in 1..=5 {
            let net = bitonic(t).unwrap();
            let n = 1 << t;
            assert_eq!(net.depth(), t * (t + 1) / 2);
            assert_eq!(net.size(), n * t * (t + 1) / 4);
        }
    }

    #[test]
    fn test_twisting_leaves_no_max_min() {
        // All comparators stored in the matching table are min-max by
        // construction; check the raw emission pass needed twisting at
        // all for t >= 2.
        let n = 8;
        let depth = 6;
        let raw = emit_comparators(n, depth);
        assert!(raw
            .iter()
            .flatten()
            .any(|c| c.max < c.min));

        let mut twisted = raw;
        make_all_min_max(&mut twisted);
        assert!(twisted
            .iter()
            .flatten()
            .all(|c| c.min < c.max));
    }

    #[test]
    fn test_twisted_levels_stay_matchings() {
        let n = 16;
        let depth = 10;
        let mut levels = emit_comparators(n, depth);
        make_all_min_max(&mut levels);

        for (l, comparators) in levels.iter().enumerate() {
            let mut seen = vec![false; n];
            for c in comparators {
                assert!(!seen[c.min] && !seen[c.max], "channel reused at level {l}");
                seen[c.min] = true;
                seen[c.max] = true;
            }
        }
    }

    #[test]
    fn test_rejects_zero_exponent() {
        assert!(bitonic(0).is_err());
    }

    #[test]
    fn test_name() {
        assert_eq!(bitonic(3).unwrap().name(), "Bitonic8");
    }
}
