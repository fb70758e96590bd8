use log::debug;

use super::bits::Bitstream;
use super::codebook::{Codebook, ReverseCodebook};
use crate::common::{Result, StegError};

/// Concatenate the codeword of every symbol of `text`, in order.
pub fn encode(text: &str, codebook: &Codebook) -> Result<Bitstream> {
    let mut stream = Bitstream::new();
    for symbol in text.chars() {
        let codeword = codebook
            .get(symbol)
            .ok_or(StegError::UnknownSymbol(symbol))?;
        stream.extend_from_slice(codeword.bits());
    }
    debug!(
        "Encoded {} symbols into {} bits",
        text.chars().count(),
        stream.len()
    );
    Ok(stream)
}

/// Greedy prefix decoding: grow a candidate bit by bit and emit a symbol as
/// soon as the candidate equals a codeword.
///
/// Fails if the stream ends mid-codeword, or if the candidate grows longer
/// than any codeword without matching.
pub fn decode(stream: &Bitstream, reverse: &ReverseCodebook) -> Result<String> {
    let mut text = String::new();
    let mut candidate: Vec<bool> = Vec::with_capacity(reverse.max_len());

    for (position, bit) in stream.iter().enumerate() {
        candidate.push(bit);
        if let Some(symbol) = reverse.get(&candidate) {
            text.push(symbol);
            candidate.clear();
        } else if candidate.len() >= reverse.max_len() {
            return Err(StegError::CorruptEncoding(format!(
                "no codeword matches the {} bits ending at bit {}",
                candidate.len(),
                position
            )));
        }
    }

    if !candidate.is_empty() {
        return Err(StegError::CorruptEncoding(format!(
            "stream ended with {} unmatched trailing bits",
            candidate.len()
        )));
    }
    Ok(text)
}
