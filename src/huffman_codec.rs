use std::fmt;

use crate::bit_string::BitString;
use crate::code_table::CodeTable;
use crate::decoder;
use crate::encoder;
use crate::error::Result;
use crate::hufftree::HuffmanTree;

/// A tree together with the table derived from it.
#[derive(Debug, Clone)]
pub struct HuffmanCodec<S> {
    tree: HuffmanTree<S>,
    encode_table: CodeTable<S>,
}

impl<S: Ord + Clone + fmt::Debug> HuffmanCodec<S> {
    pub fn new(tree: HuffmanTree<S>) -> Self {
        let encode_table = CodeTable::from_tree(&tree);
        HuffmanCodec { tree, encode_table }
    }

    /// Count `symbols` and build the codec for their alphabet.
    pub fn from_symbols(symbols: &[S]) -> Result<Self> {
        Ok(Self::new(HuffmanTree::from_symbols(symbols)?))
    }

    pub fn tree(&self) -> &HuffmanTree<S> {
        &self.tree
    }

    pub fn table(&self) -> &CodeTable<S> {
        &self.encode_table
    }

    pub fn encode(&self, symbols: &[S]) -> Result<BitString> {
        encoder::encode(&self.encode_table, symbols)
    }

    pub fn decode(&self, bits: &BitString) -> Result<Vec<S>> {
        decoder::decode(&self.tree, bits)
    }

    pub fn decode_str(&self, bits: &str) -> Result<Vec<S>> {
        decoder::decode_str(&self.tree, bits)
    }
}
