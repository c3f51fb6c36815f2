use std::fmt;
use std::str::FromStr;

use crate::error::{HuffmanError, MalformedReason};

/// A logical sequence of binary digits. Bits are kept one per `bool`; no
/// packing into bytes happens here.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    pub fn new() -> Self {
        BitString { bits: Vec::new() }
    }

    pub fn with_capacity(bit_count: usize) -> Self {
        BitString {
            bits: Vec::with_capacity(bit_count),
        }
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Append every bit of `other` in order.
    pub fn extend_from_bits(&mut self, other: &BitString) {
        self.bits.extend_from_slice(&other.bits);
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.bits.capacity()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// True if `prefix` is a (not necessarily proper) prefix of `self`.
    pub fn starts_with(&self, prefix: &BitString) -> bool {
        self.bits.starts_with(&prefix.bits)
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for BitString {
    type Err = HuffmanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(offset, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(HuffmanError::malformed(
                    offset,
                    MalformedReason::InvalidDigit(other),
                )),
            })
            .collect()
    }
}

impl From<Vec<bool>> for BitString {
    fn from(bits: Vec<bool>) -> Self {
        BitString { bits }
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        BitString {
            bits: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BitString {
    type Item = bool;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, bool>>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits.iter().copied()
    }
}
