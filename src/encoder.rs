use std::fmt;

use log::debug;

use crate::bit_string::BitString;
use crate::code_table::CodeTable;
use crate::error::{HuffmanError, Result};

/// Concatenate the code of every symbol in `symbols`, in order.
///
/// Fails with [`HuffmanError::UnknownSymbol`] on the first symbol the table
/// has no code for; nothing is returned in that case.
pub fn encode<S: Ord + Clone + fmt::Debug>(
    table: &CodeTable<S>,
    symbols: &[S],
) -> Result<BitString> {
    let mut bits = BitString::with_capacity(table.encoded_len(symbols).unwrap_or(0));
    for symbol in symbols {
        let code = table
            .get(symbol)
            .ok_or_else(|| HuffmanError::unknown_symbol(symbol))?;
        bits.extend_from_bits(code);
    }
    debug!("encoded {} symbols into {} bits", symbols.len(), bits.len());
    Ok(bits)
}
