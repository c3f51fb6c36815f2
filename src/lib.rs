//! # huffman_greedy
//!
//! Minimum-redundancy prefix codes built by greedy weight-minimal merging.
//!
//! ## Quick Start
//!
//! ```rust
//! use huffman_greedy::{build_code_table, build_histogram, build_tree, decode, encode};
//!
//! let text: Vec<char> = "aaabbc".chars().collect();
//! let tree = build_tree(build_histogram(&text).weighted_leaves())?;
//! let table = build_code_table(&tree);
//!
//! let bits = encode(&table, &text)?;
//! assert_eq!(bits.len(), 9);
//! assert_eq!(decode(&tree, &bits)?, text);
//! # Ok::<(), huffman_greedy::HuffmanError>(())
//! ```

pub mod bit_string;
pub mod builder;
pub mod code_table;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod frequency;
pub mod huffman_codec;
pub mod hufftree;

// Internal modules - not part of public API
mod min_heap;

pub use bit_string::BitString;
pub use builder::{build_tree, BuildStrategy, TreeBuilder};
pub use code_table::{build_code_table, CodeTable};
pub use decoder::{decode, decode_str};
pub use encoder::encode;
pub use error::{HuffmanError, MalformedReason, Result};
pub use min_heap::HeapErr;
pub use frequency::{build_histogram, Histogram};
pub use huffman_codec::HuffmanCodec;
pub use hufftree::{HuffNode, HuffmanTree, LeafInfo};
