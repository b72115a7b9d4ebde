//! Guard-padded input window.
//!
//! A [`Window`] owns one block of input plus [`WINDOW_PADDING`] zeroed bytes
//! past its logical end, so word-wide reads near the end of the data stay
//! inside the allocation. Positions are absolute offsets into the block; the
//! hash chain folds them with [`Window::window_mask`], and the match finder
//! never looks further back than [`Window::max_distance`].
//!
//! Sliding and refilling belong to the surrounding compressor. Blocks are
//! independent, so a block is simply loaded whole.

use crate::config::{self, WINDOW_PADDING};
use crate::error::ConfigError;
use crate::matcher::types::{max_distance_for, Pos};

#[derive(Clone, Debug)]
pub struct Window {
    buf: Vec<u8>,
    len: usize,
    window_bits: u32,
}

impl Window {
    /// Copy `data` into a new padded window of `1 << window_bits` history.
    pub fn new(data: &[u8], window_bits: u32) -> Result<Self, ConfigError> {
        config::check_window_bits(window_bits)?;
        if data.len() > (Pos::MAX as usize) - WINDOW_PADDING {
            return Err(ConfigError::InputTooLarge(data.len()));
        }
        let mut buf = Vec::with_capacity(data.len() + WINDOW_PADDING);
        buf.extend_from_slice(data);
        buf.resize(data.len() + WINDOW_PADDING, 0);
        Ok(Window {
            buf,
            len: data.len(),
            window_bits,
        })
    }

    /// All bytes including the guard padding. This is what the match finder reads.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Logical contents, without padding.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Valid bytes from `pos` to the logical end.
    #[inline]
    pub fn lookahead(&self, pos: Pos) -> u32 {
        (self.len as u32).saturating_sub(pos)
    }

    #[inline]
    pub fn window_bits(&self) -> u32 {
        self.window_bits
    }

    #[inline]
    pub fn window_size(&self) -> u32 {
        1u32 << self.window_bits
    }

    #[inline]
    pub fn window_mask(&self) -> u32 {
        self.window_size() - 1
    }

    /// Farthest usable back-reference.
    #[inline]
    pub fn max_distance(&self) -> u32 {
        max_distance_for(self.window_bits)
    }
}
