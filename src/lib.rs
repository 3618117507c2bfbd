//! Sortnet - Construction and Verification of Comparator Sorting Networks
//!
//! A comparator network is a fixed-depth circuit of compare-exchange
//! elements applied to parallel data channels; a sorting network is one
//! that sorts every possible input. This crate provides:
//!
//! - **ComparatorNetwork**: the matching-table representation, with
//!   construction, pruning, and a text description format
//! - **Builders**: deterministic constructions of the classical parallel
//!   topologies (bubble-type, Batcher odd-even merge, Batcher bitonic
//!   merge, pairwise merge)
//! - **Gray code generators**: binary and ternary reflected minimal-change
//!   enumerations of boolean test vectors
//! - **SortVerifier**: an exhaustive zero-one-principle verifier that
//!   updates network state in O(depth) per test vector and flags
//!   redundant comparators
//!
//! # Examples
//!
//! ## Building and verifying a network
//!
//! ```
//! use sortnet::builders::odd_even;
//!
//! let net = odd_even(3).unwrap(); // 8 inputs
//! assert_eq!(net.depth(), 6);
//! assert_eq!(net.size(), 19);
//!
//! let verdict = net.verify();
//! assert!(verdict.sorts());
//! assert_eq!(verdict.redundant(), Some(0));
//! ```
//!
//! ## Parsing a text description
//!
//! ```
//! use sortnet::ComparatorNetwork;
//!
//! // One line per level, channel pairs as integers.
//! let net = ComparatorNetwork::parse("0 1 2 3\n0 2 1 3\n1 2\n").unwrap();
//! assert_eq!(net.num_inputs(), 4);
//! assert!(net.verify().sorts());
//! ```
//!
//! # Performance
//!
//! Verification is exponential in the number of inputs: `2^n` test
//! vectors in general, about `3^(n/2)` for networks in first normal
//! form. The Gray-code-driven incremental simulation costs O(depth) per
//! vector, so widths into the twenties are practical; beyond roughly 30
//! inputs callers should warn their users before invoking verification.
//! The crate itself imposes no cap and exposes a per-vector progress
//! hook for cancellation.

// Module declarations
pub mod builders;
pub mod error;
pub mod gray_code;
pub mod network;
pub mod verifier;

// Re-exports for convenient access
pub use builders::Builder;
pub use error::{Result, SortnetError};
pub use gray_code::{BinaryGrayCode, GrayCode, TernaryGrayCode};
pub use network::ComparatorNetwork;
pub use verifier::{SortVerifier, Verdict};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = "Sortnet";

/// Get version string
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}
