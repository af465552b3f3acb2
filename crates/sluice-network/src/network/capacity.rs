//! Edge capacities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Capacity of an edge: a finite amount or unbounded.
///
/// Finite values are validated as non-negative when an edge is added. Ordering places every
/// finite value below [`Capacity::Unbounded`], so `min` over a path picks the tightest edge.
/// In serialized form a finite capacity is a plain integer and `Unbounded` is `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Capacity {
    Finite(i64),
    Unbounded,
}

impl Capacity {
    pub const ZERO: Self = Self::Finite(0);

    pub fn finite(self) -> Option<i64> {
        match self {
            Self::Finite(c) => Some(c),
            Self::Unbounded => None,
        }
    }

    pub fn is_unbounded(self) -> bool {
        matches!(self, Self::Unbounded)
    }

    pub fn is_positive(self) -> bool {
        match self {
            Self::Finite(c) => c > 0,
            Self::Unbounded => true,
        }
    }

    /// Capacity left once `flow` units are committed.
    pub fn remaining_after(self, flow: i64) -> Self {
        match self {
            Self::Finite(c) => Self::Finite(c - flow),
            Self::Unbounded => Self::Unbounded,
        }
    }

    /// Whether `flow` lies within `[0, self]`.
    pub fn admits(self, flow: i64) -> bool {
        flow >= 0
            && match self {
                Self::Finite(c) => flow <= c,
                Self::Unbounded => true,
            }
    }
}

impl From<u32> for Capacity {
    fn from(value: u32) -> Self {
        Self::Finite(i64::from(value))
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(c) => write!(f, "{c}"),
            Self::Unbounded => f.write_str("unbounded"),
        }
    }
}

impl std::iter::Sum for Capacity {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, c| match (acc, c) {
            (Self::Finite(a), Self::Finite(b)) => Self::Finite(a.saturating_add(b)),
            _ => Self::Unbounded,
        })
    }
}
