//! Deterministic constructions of classical sorting-network topologies.
//!
//! Each builder is a pure function from a width (or a power-of-two
//! exponent) to a populated [`ComparatorNetwork`] whose depth and size
//! follow a closed-form formula:
//!
//! | builder | width | depth | size |
//! |---|---|---|---|
//! | [`bubble`] | any n >= 2 | n (1 if n = 2) | n(n-1)/2 |
//! | [`bubble_min`] | any n >= 2 | 2n - 3 | n(n-1)/2 |
//! | [`bubble_max`] | any n >= 2 | 2n - 3 | n(n-1)/2 |
//! | [`odd_even`] | 2^t, t >= 1 | t(t+1)/2 | n·t(t-1)/4 + n - 1 |
//! | [`bitonic`] | 2^t, t >= 1 | t(t+1)/2 | n·t(t+1)/4 |
//! | [`pairwise`] | 2^t, t >= 1 | t(t+1)/2 | n·t(t-1)/4 + n - 1 |
//!
//! The [`Builder`] enum selects a construction at runtime and handles
//! non-power-of-two widths for the Batcher-family builders by rounding up
//! and pruning back down.

pub mod bitonic;
pub mod bubble;
pub mod odd_even;
pub mod pairwise;

pub use bitonic::bitonic;
pub use bubble::{bubble, bubble_max, bubble_min};
pub use odd_even::odd_even;
pub use pairwise::pairwise;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SortnetError};
use crate::network::ComparatorNetwork;

/// Runtime selector over the available constructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Builder {
    /// Odd-even transposition sort.
    Bubble,
    /// Bubble the minimum forward, one channel at a time.
    BubbleMin,
    /// Bubble the maximum backward, one channel at a time.
    BubbleMax,
    /// Batcher's odd-even mergesort.
    OddEven,
    /// Batcher's bitonic sort.
    Bitonic,
    /// The pairwise sorting network.
    Pairwise,
}

impl Builder {
    /// Every available construction.
    pub const ALL: [Builder; 6] = [
        Builder::Bubble,
        Builder::BubbleMin,
        Builder::BubbleMax,
        Builder::OddEven,
        Builder::Bitonic,
        Builder::Pairwise,
    ];

    /// Display label of the construction.
    pub fn label(self) -> &'static str {
        match self {
            Builder::Bubble => "Bubblesort",
            Builder::BubbleMin => "BubblesortMin",
            Builder::BubbleMax => "BubblesortMax",
            Builder::OddEven => "OddEven",
            Builder::Bitonic => "Bitonic",
            Builder::Pairwise => "Pairwise",
        }
    }

    /// Whether the construction requires a power-of-two width.
    pub fn power_of_two(self) -> bool {
        matches!(self, Builder::OddEven | Builder::Bitonic | Builder::Pairwise)
    }

    /// Build a sorting network with exactly `n` inputs.
    ///
    /// Power-of-two constructions are built at the next power of two and
    /// pruned back down to `n`, which preserves the sorting property for
    /// the narrower width.
    ///
    /// # Errors
    ///
    /// Returns [`SortnetError::InvalidParameter`] when `n < 2`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortnet::builders::Builder;
    ///
    /// let net = Builder::OddEven.build_width(6).unwrap();
    /// assert_eq!(net.num_inputs(), 6);
    /// assert_eq!(net.name(), "OddEven6");
    /// ```
    pub fn build_width(self, n: usize) -> Result<ComparatorNetwork> {
        if n < 2 {
            return Err(SortnetError::InvalidParameter(format!(
                "a sorting network needs at least 2 inputs, got {n}"
            )));
        }

        match self {
            Builder::Bubble => bubble(n),
            Builder::BubbleMin => bubble_min(n),
            Builder::BubbleMax => bubble_max(n),
            Builder::OddEven | Builder::Bitonic | Builder::Pairwise => {
                let rounded = n.next_power_of_two();
                let log2n = rounded.trailing_zeros() as usize;

                let mut net = match self {
                    Builder::OddEven => odd_even(log2n),
                    Builder::Bitonic => bitonic(log2n),
                    Builder::Pairwise => pairwise(log2n),
                    _ => unreachable!(),
                }?;

                if rounded != n {
                    net.prune(n)?;
                    net.set_name(format!("{}{n}", self.label()));
                }

                Ok(net)
            }
        }
    }
}
