//! Gray code generators for exhaustive boolean test vector enumeration.
//!
//! The sorting verifier never materializes the `2^n` boolean test vectors.
//! Instead a generator hands it, one call at a time, the index of the
//! single bit that must flip to reach the next vector in a minimal-change
//! order. A one-bit input change disturbs exactly one wire path through a
//! comparator network, which is what lets the verifier update its state in
//! O(depth) per vector instead of re-simulating the whole network.
//!
//! Two generators are provided:
//!
//! - [`BinaryGrayCode`]: the standard binary reflected Gray code, built
//!   with the nonrecursive Bitner-Ehrlich-Reingold construction. Visits
//!   all `2^n` vectors.
//! - [`TernaryGrayCode`]: a specialization for networks in first normal
//!   form. Bits are driven two at a time through the states
//!   `{00, 01, 11}`; the fourth combination `10` cannot reach the far
//!   side of a first-normal-form level 0, so skipping it shrinks the
//!   enumeration to roughly `3^(n/2)` vectors.
//!
//! Both generators keep a running count of zero bits, which the verifier
//! uses to compute the expected sorted position of a flipped bit.

/// Minimal-change enumeration of boolean vectors.
///
/// The choice between the binary and ternary variants is a per-run
/// runtime decision made by the verifier, so the two implementations sit
/// behind a trait object.
pub trait GrayCode {
    /// Reset to the all-zero word.
    fn reset(&mut self);

    /// Advance to the next vector and return the 1-based index of the
    /// flipped bit. A return value greater than [`bits`](Self::bits)
    /// means the enumeration is complete; the generator never signals
    /// completion any other way, so callers must check.
    fn next(&mut self) -> usize;

    /// Number of bits in the word.
    fn bits(&self) -> usize;

    /// Running count of zero bits in the current word.
    fn zeros(&self) -> usize;

    /// Current value (0 or 1) of the 1-based bit `i`.
    fn bit(&self, i: usize) -> usize;
}

/// Binary reflected Gray code generator.
///
/// Uses the Bitner-Ehrlich-Reingold recursion-removal stack: `next()` is
/// O(1), popping the flip index and rotating two stack entries. For
/// `n = 3` the flip indices run `1, 2, 1, 3, 1, 2, 1`, the ruler
/// sequence; exactly `2^n - 1` in-range indices are produced before the
/// completion signal.
///
/// # Examples
///
/// ```
/// use sortnet::gray_code::{BinaryGrayCode, GrayCode};
///
/// let mut g = BinaryGrayCode::new(3);
/// let flips: Vec<usize> = (0..7).map(|_| g.next()).collect();
/// assert_eq!(flips, vec![1, 2, 1, 3, 1, 2, 1]);
/// assert!(g.next() > 3);
/// ```
pub struct BinaryGrayCode {
    /// Number of real bits.
    bits: usize,

    /// Current word, 1-based, with guard entries past `bits` that absorb
    /// the terminal flip.
    word: Vec<usize>,

    /// Recursion-removal stack.
    stack: Vec<usize>,

    /// Count of zero bits among the real bits.
    zeros: usize,
}

impl BinaryGrayCode {
    /// Create a generator over `n` bits, positioned at the all-zero word.
    pub fn new(n: usize) -> Self {
        let mut g = Self {
            bits: n,
            word: vec![0; n + 4],
            stack: vec![0; n + 4],
            zeros: n,
        };
        g.reset();
        g
    }
}

impl GrayCode for BinaryGrayCode {
    fn reset(&mut self) {
        self.zeros = self.bits;

        for i in 0..self.word.len() {
            self.word[i] = 0;
            self.stack[i] = i + 1;
        }
    }

    fn next(&mut self) -> usize {
        let i = self.stack[0];
        self.stack[0] = 1;
        self.stack[i - 1] = self.stack[i];
        self.stack[i] = i + 1;
        self.word[i] ^= 1;

        // The terminal flip lands on a guard entry and may transiently
        // wrap the count; it is never read after completion.
        if self.word[i] == 1 {
            self.zeros = self.zeros.wrapping_sub(1);
        } else {
            self.zeros = self.zeros.wrapping_add(1);
        }

        i
    }

    #[inline(always)]
    fn bits(&self) -> usize {
        self.bits
    }

    #[inline(always)]
    fn zeros(&self) -> usize {
        self.zeros
    }

    #[inline(always)]
    fn bit(&self, i: usize) -> usize {
        debug_assert!(i <= self.bits);
        self.word[i]
    }
}

/// Ternary reflected Gray code generator for first-normal-form networks.
///
/// Bit pairs `(2i-1, 2i)` form ternary digits over `{00, 01, 11}`, with
/// digit `i` popped off the shared recursion stack and a per-digit
/// direction flag choosing which of the two legal transitions fires.
/// When `n` is odd the last digit spans the real bit `n` and a virtual
/// guard bit; a flip landing on the virtual bit leaves the real vector
/// unchanged, so it is consumed internally and the walk continues with
/// the next flip. The zero count therefore tracks real bits only.
pub struct TernaryGrayCode {
    base: BinaryGrayCode,

    /// Number of ternary digits, `ceil(bits / 2)`.
    digits: usize,

    /// Per-digit transition direction.
    direction: Vec<usize>,
}

impl TernaryGrayCode {
    /// Create a generator over `n` bits, positioned at the all-zero word.
    pub fn new(n: usize) -> Self {
        let base = BinaryGrayCode::new(n);
        let digits = (n + 1) / 2;
        let direction = vec![0; base.word.len()];

        Self {
            base,
            digits,
            direction,
        }
    }
}

impl GrayCode for TernaryGrayCode {
    fn reset(&mut self) {
        self.base.reset();
        self.direction.iter_mut().for_each(|d| *d = 0);
    }

    fn next(&mut self) -> usize {
        loop {
            let i = self.base.stack[0];
            self.base.stack[0] = 1;

            if i > self.digits {
                return self.base.bits + 1;
            }

            // The digit's state and direction pick which bit of the pair
            // flips on this transition.
            let j = 2 * i - self.base.word[2 * i - self.direction[i]];
            self.base.word[j] ^= 1;

            // An equal-valued pair (00 or 11) is an endpoint of the
            // digit's transition sequence: reverse it and yield to the
            // next digit.
            if self.base.word[2 * i] == self.base.word[2 * i - 1] {
                self.direction[i] ^= 1;
                self.base.stack[i - 1] = self.base.stack[i];
                self.base.stack[i] = i + 1;
            }

            if j <= self.base.bits {
                if self.base.word[j] == 1 {
                    self.base.zeros -= 1;
                } else {
                    self.base.zeros += 1;
                }

                return j;
            }

            // Virtual bit of the trailing half pair: the real vector is
            // unchanged, keep walking.
        }
    }

    #[inline(always)]
    fn bits(&self) -> usize {
        self.base.bits
    }

    #[inline(always)]
    fn zeros(&self) -> usize {
        self.base.zeros
    }

    #[inline(always)]
    fn bit(&self, i: usize) -> usize {
        self.base.bit(i)
    }
}
