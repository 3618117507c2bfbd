//! ComparatorNetwork - the matching-table representation of a comparator
//! network.
//!
//! A comparator network is a fixed-depth circuit of compare-exchange
//! elements ("comparators") on parallel data channels. Each level of the
//! network is a matching on the channels: a comparator joins channels `i`
//! and `j` at level `l` iff `partner(l, i) == j && partner(l, j) == i`,
//! and a channel with no comparator at a level is matched to itself. The
//! matching representation allows the sorting verifier to follow a single
//! changed wire through the network in time proportional to depth.
//!
//! # Design
//!
//! - The table is a single flat `Vec<usize>` in row-major order
//!   (`table[level * num_inputs + channel]`), owned exclusively by the
//!   network instance.
//! - The size (comparator count) is cached and kept exact across every
//!   structural mutation, so `size()` is O(1).
//! - Structural misuse (out-of-range levels or channels, invalid prune
//!   targets) returns an explicit [`SortnetError`] instead of being
//!   silently ignored.
//!
//! # Examples
//!
//! ```
//! use sortnet::ComparatorNetwork;
//!
//! let mut net = ComparatorNetwork::new(4, 2);
//! net.insert_comparator(0, 0, 1).unwrap();
//! net.insert_comparator(0, 2, 3).unwrap();
//! net.insert_comparator(1, 1, 2).unwrap();
//!
//! assert_eq!(net.size(), 3);
//! assert!(net.first_normal_form());
//! ```

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, SortnetError};

/// A comparator network stored as a per-level matching table.
///
/// Channels are integers in `[0, num_inputs)`; levels are integers in
/// `[0, depth)`. All comparators at one level execute in parallel, so
/// each level is a matching (no channel used twice).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparatorNetwork {
    /// Display name, e.g. `"OddEven16"`. Presentational metadata only.
    name: String,

    /// Number of input channels.
    num_inputs: usize,

    /// Number of levels.
    depth: usize,

    /// Cached number of comparators.
    size: usize,

    /// Row-major matching table: `table[level * num_inputs + channel]`
    /// holds the channel's partner at that level, or the channel itself
    /// when idle.
    table: Vec<usize>,
}

impl ComparatorNetwork {
    /// Create a network of the given width and depth with no comparators.
    ///
    /// Every entry of the matching table starts out self-referencing
    /// (idle).
    ///
    /// # Examples
    ///
    /// ```
    /// use sortnet::ComparatorNetwork;
    ///
    /// let net = ComparatorNetwork::new(8, 3);
    /// assert_eq!(net.num_inputs(), 8);
    /// assert_eq!(net.depth(), 3);
    /// assert_eq!(net.size(), 0);
    /// ```
    pub fn new(num_inputs: usize, depth: usize) -> Self {
        let mut table = Vec::with_capacity(num_inputs * depth);
        for _ in 0..depth {
            table.extend(0..num_inputs);
        }

        Self {
            name: String::new(),
            num_inputs,
            depth,
            size: 0,
            table,
        }
    }

    #[inline(always)]
    fn idx(&self, level: usize, channel: usize) -> usize {
        debug_assert!(level < self.depth && channel < self.num_inputs);
        level * self.num_inputs + channel
    }

    /// Get number of input channels.
    #[inline(always)]
    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    /// Get depth (number of levels).
    #[inline(always)]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Get size (number of comparators).
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the display name.
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Get the channel matched to `channel` at `level`, which is
    /// `channel` itself when no comparator touches it there.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `level >= depth` or
    /// `channel >= num_inputs`.
    #[inline]
    pub fn partner(&self, level: usize, channel: usize) -> usize {
        self.table[self.idx(level, channel)]
    }

    /// Iterate over the comparators at one level as `(lo, hi)` channel
    /// pairs with `lo < hi`, in increasing order of `lo`.
    pub fn comparators(&self, level: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let row = &self.table[level * self.num_inputs..(level + 1) * self.num_inputs];
        row.iter()
            .enumerate()
            .filter(|&(ch, &p)| p > ch)
            .map(|(ch, &p)| (ch, p))
    }

    /// Insert a comparator between channels `i` and `j` at `level`.
    ///
    /// If either endpoint already carries a comparator at that level, the
    /// old comparator is detached first so the matching stays symmetric
    /// and the cached size stays exact.
    ///
    /// # Errors
    ///
    /// Returns [`SortnetError::InvalidLevel`] or
    /// [`SortnetError::InvalidChannel`] when an index is out of range,
    /// and [`SortnetError::InvalidParameter`] when `i == j`.
    pub fn insert_comparator(&mut self, level: usize, i: usize, j: usize) -> Result<()> {
        if level >= self.depth {
            return Err(SortnetError::InvalidLevel {
                level,
                depth: self.depth,
            });
        }

        for channel in [i, j] {
            if channel >= self.num_inputs {
                return Err(SortnetError::InvalidChannel {
                    channel,
                    inputs: self.num_inputs,
                });
            }
        }

        if i == j {
            return Err(SortnetError::InvalidParameter(format!(
                "comparator endpoints must differ, got channel {i} twice"
            )));
        }

        self.detach(level, i);
        self.detach(level, j);

        let (a, b) = (self.idx(level, i), self.idx(level, j));
        self.table[a] = j;
        self.table[b] = i;
        self.size += 1;

        Ok(())
    }

    /// Remove the comparator touching `channel` at `level`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SortnetError::InvalidLevel`] or
    /// [`SortnetError::InvalidChannel`] when an index is out of range.
    pub fn remove_comparator(&mut self, level: usize, channel: usize) -> Result<()> {
        if level >= self.depth {
            return Err(SortnetError::InvalidLevel {
                level,
                depth: self.depth,
            });
        }

        if channel >= self.num_inputs {
            return Err(SortnetError::InvalidChannel {
                channel,
                inputs: self.num_inputs,
            });
        }

        self.detach(level, channel);
        Ok(())
    }

    /// Set both endpoints of the comparator on `channel` at `level` back
    /// to idle, if one exists, and decrement the cached size.
    fn detach(&mut self, level: usize, channel: usize) {
        let p = self.table[self.idx(level, channel)];

        if p != channel {
            let (a, b) = (self.idx(level, channel), self.idx(level, p));
            self.table[a] = channel;
            self.table[b] = p;
            self.size -= 1;
        }
    }

    /// Prune the network down to `n` inputs.
    ///
    /// Comparators with one endpoint on a removed channel are cleared to
    /// idle on their retained endpoint; comparators between two removed
    /// channels drop out with the channels. The cached size is recomputed
    /// by rescanning the pruned table.
    ///
    /// # Errors
    ///
    /// Returns [`SortnetError::InvalidPruneTarget`] unless
    /// `2 <= n < num_inputs`.
    pub fn prune(&mut self, n: usize) -> Result<()> {
        if n < 2 || n >= self.num_inputs {
            return Err(SortnetError::InvalidPruneTarget {
                requested: n,
                inputs: self.num_inputs,
            });
        }

        let mut table = Vec::with_capacity(n * self.depth);

        for level in 0..self.depth {
            for channel in 0..n {
                let p = self.partner(level, channel);
                table.push(if p >= n { channel } else { p });
            }
        }

        self.table = table;
        self.num_inputs = n;
        self.size = self.compute_size();

        Ok(())
    }

    /// Count the comparators by scanning the matching table.
    fn compute_size(&self) -> usize {
        self.table
            .iter()
            .enumerate()
            .filter(|&(idx, &p)| p > idx % self.num_inputs.max(1))
            .count()
    }

    /// First normal form test. A comparator network is in first normal
    /// form if level 0 consists of comparators between channels `i` and
    /// `i + 1` for every even `i < num_inputs - 1`, with the last channel
    /// idle when `num_inputs` is odd. An empty network is not in first
    /// normal form.
    ///
    /// The sorting verifier uses this to switch to the ternary Gray code
    /// generator, which shrinks the exhaustive enumeration from `2^n` to
    /// about `3^(n/2)` vectors.
    pub fn first_normal_form(&self) -> bool {
        if self.depth == 0 || self.num_inputs == 0 {
            return false;
        }

        let n = self.num_inputs;

        for i in (0..n - 1).step_by(2) {
            if self.table[i] != i + 1 {
                return false;
            }
        }

        // Odd width leaves the last channel idle at level 0.
        n % 2 == 0 || self.table[n - 1] == n - 1
    }

    /// Parse a network from its text description.
    ///
    /// Line `k` (0-based) describes level `k`: a whitespace-separated
    /// sequence of unsigned integers in which each consecutive pair
    /// `a b` denotes a comparator between channels `a` and `b`. Blank
    /// lines are idle levels. The number of inputs is inferred as one
    /// plus the maximum channel index seen; the depth is the number of
    /// lines. An odd trailing integer on a line is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`SortnetError::Parse`] when a token is not an unsigned
    /// integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortnet::ComparatorNetwork;
    ///
    /// let net = ComparatorNetwork::parse("0 1 2 3\n1 2\n").unwrap();
    /// assert_eq!(net.num_inputs(), 4);
    /// assert_eq!(net.depth(), 2);
    /// assert_eq!(net.size(), 3);
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let mut levels: Vec<Vec<(usize, usize)>> = Vec::new();
        let mut max_channel: Option<usize> = None;

        for (lineno, line) in text.lines().enumerate() {
            let tokens = line
                .split_whitespace()
                .map(|t| {
                    t.parse::<usize>().map_err(|_| SortnetError::Parse {
                        line: lineno,
                        message: format!("expected an unsigned integer, found {t:?}"),
                    })
                })
                .collect::<Result<Vec<usize>>>()?;

            let mut pairs = Vec::with_capacity(tokens.len() / 2);

            // tuples() drops an odd trailing token.
            for (a, b) in tokens.into_iter().tuples() {
                max_channel = Some(max_channel.map_or(a.max(b), |m| m.max(a).max(b)));
                pairs.push((a, b));
            }

            levels.push(pairs);
        }

        let num_inputs = max_channel.map_or(0, |m| m + 1);
        let mut net = Self::new(num_inputs, levels.len());

        for (level, pairs) in levels.iter().enumerate() {
            for &(a, b) in pairs {
                if a != b {
                    net.insert_comparator(level, a, b)?;
                }
            }
        }

        Ok(net)
    }

    /// Read a network from a file holding a text description.
    ///
    /// The network is named after the file stem.
    pub fn read_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let mut net = Self::parse(&text)?;

        if let Some(stem) = path.file_stem() {
            net.name = stem.to_string_lossy().into_owned();
        }

        Ok(net)
    }

    /// Render the network in the text description format accepted by
    /// [`parse`](Self::parse): one line per level, comparators as `a b`
    /// pairs in increasing channel order, idle levels as blank lines.
    pub fn to_description(&self) -> String {
        let mut out = String::new();

        for level in 0..self.depth {
            let line = self
                .comparators(level)
                .map(|(lo, hi)| format!("{lo} {hi}"))
                .join(" ");
            out.push_str(&line);
            out.push('\n');
        }

        out
    }

    /// Write the text description to a file.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_description())?;
        Ok(())
    }
}
