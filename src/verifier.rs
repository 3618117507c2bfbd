//! Exhaustive sorting-network verification.
//!
//! By the zero-one principle, a comparator network sorts every input of
//! any totally ordered type iff it sorts every boolean input, so the
//! verifier only has to decide the boolean case. Even that is
//! exponential, and two optimizations make it practical:
//!
//! - Test vectors are enumerated in Gray code order, so consecutive
//!   vectors differ in a single bit. A one-bit input change disturbs
//!   exactly one wire path, letting the verifier update the simulated
//!   network state in O(depth) per vector instead of O(depth × width).
//! - Networks in first normal form use the ternary generator, shrinking
//!   the enumeration from `2^n` to roughly `3^(n/2)` vectors.
//!
//! As a byproduct of a successful run the verifier counts comparators
//! that were never decisive for any boolean input; such comparators are
//! redundant and can be removed without affecting correctness.
//!
//! # Examples
//!
//! ```
//! use sortnet::builders::bitonic;
//! use sortnet::verifier::SortVerifier;
//!
//! let net = bitonic(3).unwrap();
//! let verdict = SortVerifier::new().verify(&net);
//! assert!(verdict.sorts());
//! assert_eq!(verdict.redundant(), Some(0));
//! ```

use bitvec::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SortnetError};
use crate::gray_code::{BinaryGrayCode, GrayCode, TernaryGrayCode};
use crate::network::ComparatorNetwork;

/// Outcome of a verification run.
///
/// The redundant-comparator count is part of the sorting verdict and
/// nothing else: after a failed run the usage bookkeeping reflects only
/// the vectors examined before the failure, so no count is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The network sorts every input; `redundant` comparators were never
    /// decisive and could be removed.
    Sorts {
        /// Number of never-decisive comparators.
        redundant: usize,
    },

    /// Some boolean input comes out of the network unsorted.
    Unsorted,
}

impl Verdict {
    /// Whether the network is a sorting network.
    pub fn sorts(&self) -> bool {
        matches!(self, Verdict::Sorts { .. })
    }

    /// Redundant-comparator count, available only on a sorting verdict.
    pub fn redundant(&self) -> Option<usize> {
        match self {
            Verdict::Sorts { redundant } => Some(*redundant),
            Verdict::Unsorted => None,
        }
    }
}

/// Exhaustive verifier with reusable scratch state.
///
/// The value table holds the simulated wire value at every level and
/// channel for the current test vector; the usage table records which
/// comparators have been decisive so far. Both are kept across runs and
/// reset, not reallocated, each time `verify` is called.
pub struct SortVerifier {
    /// Wire value per level and channel, row-major.
    value: BitVec<u32, Lsb0>,

    /// Whether the comparator on a channel was ever decisive, row-major,
    /// marked on both endpoints.
    used: BitVec<u32, Lsb0>,
}

impl SortVerifier {
    /// Create a verifier with empty scratch tables.
    pub fn new() -> Self {
        Self {
            value: BitVec::new(),
            used: BitVec::new(),
        }
    }

    /// Decide whether `net` sorts all inputs.
    ///
    /// Empty networks (zero inputs or zero comparators) trivially sort.
    /// Runtime is exponential in the number of inputs; callers are
    /// expected to gate large widths themselves, the verifier imposes no
    /// cap. Use [`verify_with`](Self::verify_with) to observe progress
    /// or cancel.
    pub fn verify(&mut self, net: &ComparatorNetwork) -> Verdict {
        match self.verify_with(net, |_| true) {
            Ok(verdict) => verdict,
            // An always-continue hook cannot cancel.
            Err(_) => Verdict::Unsorted,
        }
    }

    /// Decide whether `net` sorts, invoking `progress` once per test
    /// vector with the number of vectors tested so far. The enumeration
    /// has no other suspension point; returning `false` from the hook
    /// aborts with [`SortnetError::Cancelled`].
    pub fn verify_with<F>(&mut self, net: &ComparatorNetwork, mut progress: F) -> Result<Verdict>
    where
        F: FnMut(u64) -> bool,
    {
        let n = net.num_inputs();
        let depth = net.depth();

        if n == 0 || net.size() == 0 {
            return Ok(Verdict::Sorts { redundant: 0 });
        }

        let cells = depth * n;
        self.value.resize(cells, false);
        self.value.fill(false);
        self.used.resize(cells, false);
        self.used.fill(false);

        let normal_form = net.first_normal_form();

        let mut gray: Box<dyn GrayCode> = if normal_form {
            Box::new(TernaryGrayCode::new(n))
        } else {
            Box::new(BinaryGrayCode::new(n))
        };

        if normal_form {
            // The ternary enumeration skips the inputs that make level-0
            // comparators fire, but a first-normal-form level 0 is
            // structurally guaranteed to be decisive.
            for (lo, hi) in net.comparators(0) {
                self.used.set(lo, true);
                self.used.set(hi, true);
            }
        }

        let mut tested: u64 = 0;

        loop {
            if !progress(tested) {
                return Err(SortnetError::Cancelled);
            }

            let flip = gray.next();

            if flip > n {
                break;
            }

            tested += 1;

            if !self.still_sorts(net, gray.as_ref(), flip) {
                return Ok(Verdict::Unsorted);
            }
        }

        let mut redundant = 0;

        for level in 0..depth {
            for (lo, _) in net.comparators(level) {
                if !self.used[level * n + lo] {
                    redundant += 1;
                }
            }
        }

        Ok(Verdict::Sorts { redundant })
    }

    /// Flip input bit `flip` (1-based) and propagate the change down the
    /// network, then check that the disturbed wire ends on the expected
    /// sorted output channel.
    ///
    /// The walk flips the stored value on the current channel at each
    /// level; when the comparator there would move the changed value to
    /// the other side, the walk continues on the partner channel.
    fn still_sorts(&mut self, net: &ComparatorNetwork, gray: &dyn GrayCode, flip: usize) -> bool {
        let n = net.num_inputs();
        let mut ch = flip - 1;

        for level in 0..net.depth() {
            let idx = level * n + ch;
            let v = !self.value[idx];
            self.value.set(idx, v);

            let partner = net.partner(level, ch);

            if partner != ch {
                let pv = self.value[level * n + partner];

                if (pv && ch > partner) || (!pv && ch < partner) {
                    self.used.set(level * n + ch, true);
                    self.used.set(level * n + partner, true);
                    ch = partner;
                }
            }
        }

        // A zero bit guarantees at least one zero in the word, so the
        // subtraction cannot underflow.
        debug_assert!(gray.zeros() + gray.bit(flip) >= 1);
        ch == gray.zeros() + gray.bit(flip) - 1
    }
}

impl Default for SortVerifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparatorNetwork {
    /// Decide whether this network sorts all inputs with a fresh
    /// [`SortVerifier`]. Convenience for one-off checks; reuse a
    /// verifier when testing many networks.
    pub fn verify(&self) -> Verdict {
        SortVerifier::new().verify(self)
    }
}
