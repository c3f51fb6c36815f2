use log::{debug, trace};

use crate::bit_string::BitString;
use crate::error::{HuffmanError, MalformedReason, Result};
use crate::hufftree::{HuffNode, HuffmanTree};

/// Where the cursor sits between bits. Reaching a leaf emits its symbol and
/// drops straight back to `AtRoot`, so a leaf is never a resting state.
enum State<'a, S> {
    AtRoot,
    AtInternal(&'a HuffNode<S>),
}

/// Decode `bits`, which must be an exact concatenation of codes from `tree`.
pub fn decode<S: Clone>(tree: &HuffmanTree<S>, bits: &BitString) -> Result<Vec<S>> {
    walk(tree, bits.iter().map(Ok))
}

/// Like [`decode`], reading `0`/`1` text and rejecting any other character.
pub fn decode_str<S: Clone>(tree: &HuffmanTree<S>, bits: &str) -> Result<Vec<S>> {
    walk(
        tree,
        bits.chars().enumerate().map(|(offset, c)| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            other => Err(HuffmanError::malformed(
                offset,
                MalformedReason::InvalidDigit(other),
            )),
        }),
    )
}

fn walk<S, I>(tree: &HuffmanTree<S>, bits: I) -> Result<Vec<S>>
where
    S: Clone,
    I: IntoIterator<Item = Result<bool>>,
{
    let root = tree.root();
    let mut out = Vec::new();
    let mut state = State::AtRoot;
    let mut offset = 0;

    for bit in bits {
        let bit = bit?;

        let node = match state {
            State::AtRoot => root,
            State::AtInternal(node) => node,
        };

        let next = match node {
            // Single-leaf tree: its code is one `0` bit.
            HuffNode::Leaf { .. } if !bit => node,
            _ => node
                .child(bit)
                .ok_or_else(|| HuffmanError::malformed(offset, MalformedReason::PastLeaf))?,
        };

        state = match next {
            HuffNode::Leaf { symbol, .. } => {
                trace!("bit {}: emit symbol #{}", offset, out.len());
                out.push(symbol.clone());
                State::AtRoot
            }
            HuffNode::Internal { .. } => State::AtInternal(next),
        };
        offset += 1;
    }

    if let State::AtInternal(_) = state {
        return Err(HuffmanError::malformed(offset, MalformedReason::Truncated));
    }

    debug!("decoded {} bits into {} symbols", offset, out.len());
    Ok(out)
}
