//! LZ77 tokens and their inverse.

use anyhow::{bail, Result};

/// One step of an LZ77 parse.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Token {
    Literal(u8),
    /// Copy `length` bytes starting `distance` bytes back.
    Match { length: u16, distance: u16 },
}

impl Token {
    /// Number of input bytes the token covers.
    #[inline]
    pub fn covered(&self) -> usize {
        match *self {
            Token::Literal(_) => 1,
            Token::Match { length, .. } => length as usize,
        }
    }
}

/// Rebuild the input a token stream was parsed from.
///
/// Fails on a back-reference that reaches before the start of the output.
pub fn reconstruct(tokens: &[Token]) -> Result<Vec<u8>> {
    let total: usize = tokens.iter().map(Token::covered).sum();
    let mut out = Vec::with_capacity(total);
    for (i, token) in tokens.iter().enumerate() {
        match *token {
            Token::Literal(b) => out.push(b),
            Token::Match { length, distance } => {
                let distance = distance as usize;
                if distance == 0 || distance > out.len() {
                    bail!("token {}: distance {} reaches before the start of {} bytes", i, distance, out.len());
                }
                let start = out.len() - distance;
                // Byte by byte: the source may overlap what is being written.
                for k in 0..length as usize {
                    let b = out[start + k];
                    out.push(b);
                }
            }
        }
    }
    Ok(out)
}
