//! Error types for the sortnet crate.
//!
//! This module provides a unified error type for all operations in the
//! crate, using the `thiserror` crate for ergonomic error handling.
//!
//! Every structural request that cannot be honored (out-of-range comparator
//! insertion, invalid prune targets, malformed descriptions) returns an
//! explicit error so misuse is observable to the caller.

use thiserror::Error;

/// The main error type for sortnet operations.
#[derive(Error, Debug)]
pub enum SortnetError {
    /// Level index at or beyond the network depth.
    #[error("Invalid level: level {level}, depth {depth}")]
    InvalidLevel {
        /// The level that was addressed
        level: usize,
        /// The network depth
        depth: usize,
    },

    /// Channel index at or beyond the number of inputs.
    #[error("Invalid channel: channel {channel}, inputs {inputs}")]
    InvalidChannel {
        /// The channel that was addressed
        channel: usize,
        /// The number of inputs
        inputs: usize,
    },

    /// Prune target outside the permitted range `2..inputs`.
    #[error("Invalid prune target: requested {requested} inputs, have {inputs}")]
    InvalidPruneTarget {
        /// The requested number of inputs
        requested: usize,
        /// The current number of inputs
        inputs: usize,
    },

    /// Invalid parameter value (builder width, exponent, and the like).
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A network description contained a token that is not an unsigned
    /// integer.
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 0-based line number of the offending token
        line: usize,
        /// What went wrong
        message: String,
    },

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Verification was cancelled by the caller's progress hook.
    #[error("Verification cancelled")]
    Cancelled,
}

/// A specialized `Result` type for sortnet operations.
pub type Result<T> = std::result::Result<T, SortnetError>;
