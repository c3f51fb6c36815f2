use std::collections::BTreeMap;

use log::debug;

use crate::bit_string::BitString;
use crate::hufftree::{HuffNode, HuffmanTree};

/// Symbol → code, derived once from a finished tree.
///
/// Codes are root-to-leaf paths, `0` for left and `1` for right. A tree that
/// is a single leaf gives its symbol the one-bit code `0`, so every encoded
/// symbol occupies at least one bit and decoding can count symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S> {
    codes: BTreeMap<S, BitString>,
}

impl<S: Ord + Clone> CodeTable<S> {
    pub fn from_tree(tree: &HuffmanTree<S>) -> Self {
        let mut codes = BTreeMap::new();

        if let HuffNode::Leaf { symbol, .. } = tree.root() {
            codes.insert(symbol.clone(), BitString::from(vec![false]));
            debug!("code table for single-symbol alphabet");
            return CodeTable { codes };
        }

        let mut stack = vec![(tree.root(), BitString::new())];
        while let Some((node, path)) = stack.pop() {
            match node {
                HuffNode::Leaf { symbol, .. } => {
                    codes.insert(symbol.clone(), path);
                }
                HuffNode::Internal { left, right, .. } => {
                    let mut right_path = path.clone();
                    right_path.push(true);
                    stack.push((right.as_ref(), right_path));

                    let mut left_path = path;
                    left_path.push(false);
                    stack.push((left.as_ref(), left_path));
                }
            }
        }

        let table = CodeTable { codes };
        debug!(
            "code table: {} symbols, longest code {} bits",
            table.len(),
            table.max_code_length()
        );
        table
    }

    pub fn get(&self, symbol: &S) -> Option<&BitString> {
        self.codes.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, &BitString)> + '_ {
        self.codes.iter()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &S> + '_ {
        self.codes.keys()
    }

    pub fn max_code_length(&self) -> usize {
        self.codes.values().map(BitString::len).max().unwrap_or(0)
    }

    /// Number of bits `symbols` would encode to, or `None` if one of them is
    /// missing from the table or the count overflows `usize`.
    pub fn encoded_len(&self, symbols: &[S]) -> Option<usize> {
        symbols.iter().try_fold(0usize, |acc, s| {
            self.codes.get(s).and_then(|code| acc.checked_add(code.len()))
        })
    }

    /// True if no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&BitString> = self.codes.values().collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !b.starts_with(a))
        })
    }
}

/// Derive the code table of `tree`.
pub fn build_code_table<S: Ord + Clone>(tree: &HuffmanTree<S>) -> CodeTable<S> {
    CodeTable::from_tree(tree)
}
