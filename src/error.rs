use std::fmt;

use thiserror::Error;

use crate::min_heap::HeapErr;

/// Why a bit-string could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// A digit other than `0` or `1`.
    InvalidDigit(char),
    /// Input ended in the middle of a code.
    Truncated,
    /// A bit asked to descend below a leaf. Only a single-leaf tree can
    /// produce this, on a `1` bit, since its one code is `0`.
    PastLeaf,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::InvalidDigit(c) => write!(f, "invalid digit {:?}", c),
            MalformedReason::Truncated => write!(f, "input ended mid-code"),
            MalformedReason::PastLeaf => write!(f, "bit descends past a leaf"),
        }
    }
}

#[derive(Error, Debug)]
pub enum HuffmanError {
    #[error("cannot build a tree from an empty alphabet")]
    EmptyInput,

    #[error("symbol {symbol} has no entry in the code table")]
    UnknownSymbol { symbol: String },

    #[error("malformed bit-string at bit {offset}: {reason}")]
    MalformedBitString {
        offset: usize,
        reason: MalformedReason,
    },

    #[error("symbol {symbol} appears in more than one leaf")]
    DuplicateSymbol { symbol: String },

    #[error("node weight overflowed usize")]
    WeightOverflow,

    #[error("heap error: {0}")]
    Heap(#[from] HeapErr),
}

impl HuffmanError {
    pub(crate) fn unknown_symbol<S: fmt::Debug>(symbol: &S) -> Self {
        HuffmanError::UnknownSymbol {
            symbol: format!("{:?}", symbol),
        }
    }

    pub(crate) fn duplicate_symbol<S: fmt::Debug>(symbol: &S) -> Self {
        HuffmanError::DuplicateSymbol {
            symbol: format!("{:?}", symbol),
        }
    }

    pub(crate) fn malformed(offset: usize, reason: MalformedReason) -> Self {
        HuffmanError::MalformedBitString { offset, reason }
    }
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
