use std::fmt;

use crate::builder::TreeBuilder;
use crate::code_table::CodeTable;
use crate::error::{HuffmanError, Result};
use crate::frequency::{build_histogram, Histogram};

/// A node of the code tree. Each internal node owns both of its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode<S> {
    Leaf {
        weight: usize,
        symbol: S,
    },
    Internal {
        weight: usize,
        left: Box<HuffNode<S>>,
        right: Box<HuffNode<S>>,
    },
}

impl<S> HuffNode<S> {
    pub fn leaf(symbol: S, weight: usize) -> Self {
        HuffNode::Leaf { weight, symbol }
    }

    /// Join two subtrees under a new internal node; `a` goes left.
    pub fn merge(a: Self, b: Self) -> Result<Self> {
        let weight = a
            .weight()
            .checked_add(b.weight())
            .ok_or(HuffmanError::WeightOverflow)?;
        Ok(HuffNode::Internal {
            weight,
            left: Box::new(a),
            right: Box::new(b),
        })
    }

    pub fn weight(&self) -> usize {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    pub fn symbol(&self) -> Option<&S> {
        match self {
            HuffNode::Leaf { symbol, .. } => Some(symbol),
            HuffNode::Internal { .. } => None,
        }
    }

    /// The child reached by `bit` (`false` is left), or `None` at a leaf.
    pub fn child(&self, bit: bool) -> Option<&HuffNode<S>> {
        match self {
            HuffNode::Leaf { .. } => None,
            HuffNode::Internal { left, right, .. } => Some(if bit { right } else { left }),
        }
    }
}

/// A finished Huffman code tree. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: HuffNode<S>,
}

/// A leaf as seen from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeafInfo<'a, S> {
    pub symbol: &'a S,
    pub weight: usize,
    pub depth: usize,
}

impl<S> HuffmanTree<S> {
    pub(crate) fn from_root(root: HuffNode<S>) -> Self {
        HuffmanTree { root }
    }

    pub fn root(&self) -> &HuffNode<S> {
        &self.root
    }

    pub fn into_root(self) -> HuffNode<S> {
        self.root
    }

    /// Total weight, equal to the length of the input the tree was counted from.
    pub fn weight(&self) -> usize {
        self.root.weight()
    }

    /// Leaves from left to right with their depth.
    pub fn leaves(&self) -> Vec<LeafInfo<'_, S>> {
        let mut out = Vec::new();
        let mut stack = vec![(&self.root, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                HuffNode::Leaf { weight, symbol } => out.push(LeafInfo {
                    symbol,
                    weight: *weight,
                    depth,
                }),
                HuffNode::Internal { left, right, .. } => {
                    stack.push((right, depth + 1));
                    stack.push((left, depth + 1));
                }
            }
        }
        out
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().len()
    }

    /// Depth of the deepest leaf; 0 for a single-leaf tree.
    pub fn depth(&self) -> usize {
        self.leaves().iter().map(|l| l.depth).max().unwrap_or(0)
    }

    /// Sum over leaves of weight × depth. This can exceed `usize` even when
    /// the total weight fits, which is reported as
    /// [`HuffmanError::WeightOverflow`].
    pub fn weighted_path_length(&self) -> Result<usize> {
        self.leaves().iter().try_fold(0usize, |acc, l| {
            l.weight
                .checked_mul(l.depth)
                .and_then(|cost| acc.checked_add(cost))
                .ok_or(HuffmanError::WeightOverflow)
        })
    }
}

impl<S: Ord + Clone + fmt::Debug> HuffmanTree<S> {
    /// Count `symbols` and build the tree with the default builder.
    pub fn from_symbols(symbols: &[S]) -> Result<Self> {
        Self::from_histogram(&build_histogram(symbols))
    }

    pub fn from_histogram(histogram: &Histogram<S>) -> Result<Self> {
        TreeBuilder::default().build(histogram.weighted_leaves())
    }

    pub fn code_table(&self) -> CodeTable<S> {
        CodeTable::from_tree(self)
    }
}

impl<S: fmt::Display> fmt::Display for HuffmanTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_node(&self.root, f)
    }
}

fn fmt_node<S: fmt::Display>(node: &HuffNode<S>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match node {
        HuffNode::Leaf { weight, symbol } => write!(f, "({}:{})", symbol, weight),
        HuffNode::Internal {
            weight,
            left,
            right,
        } => {
            write!(f, "(*:{} ", weight)?;
            fmt_node(left, f)?;
            f.write_str(" ")?;
            fmt_node(right, f)?;
            f.write_str(")")
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample() -> HuffmanTree<char> {
        let bc = HuffNode::merge(HuffNode::leaf('c', 1), HuffNode::leaf('b', 2)).unwrap();
        let root = HuffNode::merge(HuffNode::leaf('a', 3), bc).unwrap();
        HuffmanTree::from_root(root)
    }

    #[test]
    fn merge_sums_weights() {
        let tree = sample();
        assert_eq!(tree.weight(), 6);
        match tree.root() {
            HuffNode::Internal { left, right, .. } => {
                assert_eq!(left.weight() + right.weight(), 6);
            }
            HuffNode::Leaf { .. } => panic!("root should be internal"),
        }
    }

    #[test]
    fn merge_overflow_is_reported() {
        let err = HuffNode::merge(HuffNode::leaf(0u8, usize::MAX), HuffNode::leaf(1u8, 1));
        assert!(matches!(err, Err(HuffmanError::WeightOverflow)));
    }

    #[test]
    fn path_length_overflow_is_reported() {
        // Total weight is exactly usize::MAX, so the build succeeds, but the
        // two depth-2 leaves push weight × depth past it.
        let third = usize::MAX / 3;
        let tree = TreeBuilder::default()
            .build(vec![('a', third), ('b', third), ('c', third)])
            .unwrap();
        assert_eq!(tree.weight(), usize::MAX);
        assert!(matches!(
            tree.weighted_path_length(),
            Err(HuffmanError::WeightOverflow)
        ));
    }

    #[test]
    fn leaves_left_to_right() {
        let tree = sample();
        let leaves: Vec<(char, usize, usize)> = tree
            .leaves()
            .iter()
            .map(|l| (*l.symbol, l.weight, l.depth))
            .collect();
        assert_eq!(leaves, vec![('a', 3, 1), ('c', 1, 2), ('b', 2, 2)]);
        assert_eq!(tree.leaf_count(), 3);
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.weighted_path_length().unwrap(), 3 + 2 + 4);
    }

    #[test]
    fn single_leaf_tree() {
        let tree = HuffmanTree::from_symbols(&['z', 'z', 'z']).unwrap();
        assert!(tree.root().is_leaf());
        assert_eq!(tree.root().symbol(), Some(&'z'));
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.weighted_path_length().unwrap(), 0);
    }

    #[test]
    fn child_follows_bits() {
        let tree = sample();
        let right = tree.root().child(true).unwrap();
        assert_eq!(right.child(false).and_then(HuffNode::symbol), Some(&'c'));
        assert!(tree.root().child(false).unwrap().child(false).is_none());
    }

    #[test]
    fn display_lists_preorder() {
        assert_eq!(sample().to_string(), "(*:6 (a:3) (*:3 (c:1) (b:2)))");
    }

    #[test]
    fn empty_symbols_fail() {
        assert!(matches!(
            HuffmanTree::<u8>::from_symbols(&[]),
            Err(HuffmanError::EmptyInput)
        ));
    }
}
