//! Greedy minimum-weight merging of weighted leaves into a [`HuffmanTree`].
//!
//! Every node handed to the merge loop carries a sequence number. Input leaves
//! are numbered in input order and each merged node gets the next unused
//! number, so nodes are totally ordered by `(weight, sequence)`. The two
//! smallest under that order are merged, the first one becoming the left
//! child. Both strategies below follow that rule and produce identical trees.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use log::{debug, trace};

use crate::error::{HuffmanError, Result};
use crate::hufftree::{HuffNode, HuffmanTree};
use crate::min_heap::MinHeap;

/// How the two lightest nodes are found on each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildStrategy {
    /// Binary min-heap, O(n log n).
    #[default]
    Heap,
    /// Rescan the whole working set each round, O(n²). Fine for small alphabets.
    LinearScan,
}

#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    strategy: BuildStrategy,
}

/// A subtree waiting to be merged, ordered by weight then sequence number.
struct Ranked<S> {
    seq: usize,
    node: HuffNode<S>,
}

impl<S> Ranked<S> {
    fn key(&self) -> (usize, usize) {
        (self.node.weight(), self.seq)
    }
}

impl<S> PartialEq for Ranked<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<S> Eq for Ranked<S> {}

impl<S> PartialOrd for Ranked<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for Ranked<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strategy(mut self, strategy: BuildStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn current_strategy(&self) -> BuildStrategy {
        self.strategy
    }

    /// Build a tree from `(symbol, weight)` leaves.
    ///
    /// Fails with [`HuffmanError::EmptyInput`] when there are no leaves and
    /// with [`HuffmanError::DuplicateSymbol`] when a symbol is listed twice.
    pub fn build<S, I>(&self, leaves: I) -> Result<HuffmanTree<S>>
    where
        S: Ord + fmt::Debug,
        I: IntoIterator<Item = (S, usize)>,
    {
        let leaves: Vec<(S, usize)> = leaves.into_iter().collect();
        if leaves.is_empty() {
            return Err(HuffmanError::EmptyInput);
        }

        let mut seen = BTreeSet::new();
        for (symbol, _) in &leaves {
            if !seen.insert(symbol) {
                return Err(HuffmanError::duplicate_symbol(symbol));
            }
        }

        let alphabet = leaves.len();
        let ranked: Vec<Ranked<S>> = leaves
            .into_iter()
            .enumerate()
            .map(|(seq, (symbol, weight))| Ranked {
                seq,
                node: HuffNode::leaf(symbol, weight),
            })
            .collect();

        let root = match self.strategy {
            BuildStrategy::Heap => merge_with_heap(ranked)?,
            BuildStrategy::LinearScan => merge_with_scan(ranked)?,
        };

        debug!(
            "built huffman tree: {} symbols, total weight {}, strategy {:?}",
            alphabet,
            root.weight(),
            self.strategy
        );
        Ok(HuffmanTree::from_root(root))
    }
}

fn merge_pair<S>(x: Ranked<S>, y: Ranked<S>, seq: usize) -> Result<Ranked<S>> {
    trace!(
        "merge #{} (w={}) + #{} (w={}) -> #{}",
        x.seq,
        x.node.weight(),
        y.seq,
        y.node.weight(),
        seq
    );
    Ok(Ranked {
        seq,
        node: HuffNode::merge(x.node, y.node)?,
    })
}

fn merge_with_heap<S>(ranked: Vec<Ranked<S>>) -> Result<HuffNode<S>> {
    let mut next_seq = ranked.len();
    let mut heap = MinHeap::build(ranked);

    while heap.heap_size() > 1 {
        let x = heap.extract_min()?;
        let y = heap.extract_min()?;
        heap.insert(merge_pair(x, y, next_seq)?);
        next_seq += 1;
    }

    let root = heap
        .into_vec()
        .into_iter()
        .next()
        .ok_or(HuffmanError::EmptyInput)?;
    Ok(root.node)
}

fn take_min<S>(working: &mut Vec<Ranked<S>>) -> Result<Ranked<S>> {
    let idx = working
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.cmp(b))
        .map(|(i, _)| i)
        .ok_or(HuffmanError::EmptyInput)?;
    Ok(working.swap_remove(idx))
}

fn merge_with_scan<S>(mut working: Vec<Ranked<S>>) -> Result<HuffNode<S>> {
    let mut next_seq = working.len();

    while working.len() > 1 {
        let x = take_min(&mut working)?;
        let y = take_min(&mut working)?;
        working.push(merge_pair(x, y, next_seq)?);
        next_seq += 1;
    }

    working
        .pop()
        .map(|r| r.node)
        .ok_or(HuffmanError::EmptyInput)
}

/// Build a tree with the default [`TreeBuilder`].
pub fn build_tree<S, I>(leaves: I) -> Result<HuffmanTree<S>>
where
    S: Ord + fmt::Debug,
    I: IntoIterator<Item = (S, usize)>,
{
    TreeBuilder::default().build(leaves)
}

#[cfg(test)]
mod test {
    use super::*;

    fn depths(tree: &HuffmanTree<char>) -> Vec<(char, usize)> {
        let mut d: Vec<_> = tree.leaves().iter().map(|l| (*l.symbol, l.depth)).collect();
        d.sort();
        d
    }

    #[test]
    fn aaabbc_code_lengths() {
        let tree = build_tree(vec![('a', 3), ('b', 2), ('c', 1)]).unwrap();
        assert_eq!(depths(&tree), vec![('a', 1), ('b', 2), ('c', 2)]);
        assert_eq!(tree.weighted_path_length().unwrap(), 9);
    }

    #[test]
    fn smaller_node_goes_left() {
        let tree = build_tree(vec![('a', 3), ('b', 2), ('c', 1)]).unwrap();
        assert_eq!(tree.to_string(), "(*:6 (a:3) (*:3 (c:1) (b:2)))");
    }

    #[test]
    fn ties_break_by_input_order() {
        let tree = build_tree(vec![('x', 1), ('y', 1), ('z', 1), ('w', 1)]).unwrap();
        assert_eq!(
            tree.to_string(),
            "(*:4 (*:2 (x:1) (y:1)) (*:2 (z:1) (w:1)))"
        );
    }

    #[test]
    fn merged_nodes_lose_ties_to_older_nodes() {
        // After merging a+b (w=2) the working set holds c:2 (seq 2) and the
        // merged node (seq 4); c is older so it is picked first.
        let tree = build_tree(vec![('a', 1), ('b', 1), ('c', 2), ('d', 5)]).unwrap();
        assert_eq!(
            tree.to_string(),
            "(*:9 (*:4 (c:2) (*:2 (a:1) (b:1))) (d:5))"
        );
    }

    #[test]
    fn strategies_agree() {
        let leaves = vec![
            ('a', 5),
            ('b', 9),
            ('c', 12),
            ('d', 13),
            ('e', 16),
            ('f', 45),
            ('g', 5),
            ('h', 1),
        ];
        let heap = TreeBuilder::new().build(leaves.clone()).unwrap();
        let scan = TreeBuilder::new()
            .strategy(BuildStrategy::LinearScan)
            .build(leaves)
            .unwrap();
        assert_eq!(heap, scan);
    }

    #[test]
    fn single_leaf_is_the_tree() {
        let tree = build_tree(vec![('q', 7)]).unwrap();
        assert_eq!(tree.root(), &HuffNode::leaf('q', 7));
    }

    #[test]
    fn zero_weights_are_allowed() {
        let tree = build_tree(vec![('a', 0), ('b', 0), ('c', 4)]).unwrap();
        assert_eq!(tree.leaf_count(), 3);
        assert_eq!(tree.weight(), 4);
    }

    #[test]
    fn empty_input_fails() {
        let err = build_tree(Vec::<(char, usize)>::new()).unwrap_err();
        assert!(matches!(err, HuffmanError::EmptyInput));
        let err = TreeBuilder::new()
            .strategy(BuildStrategy::LinearScan)
            .build(Vec::<(char, usize)>::new())
            .unwrap_err();
        assert!(matches!(err, HuffmanError::EmptyInput));
    }

    #[test]
    fn duplicate_symbol_fails() {
        let err = build_tree(vec![('a', 1), ('b', 2), ('a', 3)]).unwrap_err();
        match err {
            HuffmanError::DuplicateSymbol { symbol } => assert_eq!(symbol, "'a'"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn default_strategy_is_heap() {
        assert_eq!(TreeBuilder::new().current_strategy(), BuildStrategy::Heap);
    }
}
