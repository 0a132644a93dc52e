//! Bit-level I/O: dense bit buffers, MSB-first.
//!
//! The coder produces and consumes individual bits; this module packs them
//! eight per byte, most-significant bit first, with the exact bit count
//! carried alongside so the zero padding in the final byte is never
//! mistaken for payload.

use crate::error::{Error, Result};

/// A finite bit sequence packed MSB-first into bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitstream {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl Bitstream {
    /// Wrap packed bytes with an explicit bit count. `bit_len` must land
    /// inside the final byte: `8*(len-1) < bit_len <= 8*len` (or both zero).
    ///
    /// # Errors
    ///
    /// Returns [`Error::CorruptFrame`] when the count and the byte length
    /// disagree.
    pub fn from_parts(bytes: Vec<u8>, bit_len: usize) -> Result<Self> {
        let fits = bit_len <= bytes.len() * 8;
        let reaches_last_byte = bytes.is_empty() || bit_len > (bytes.len() - 1) * 8;
        if !fits || !reaches_last_byte {
            return Err(Error::CorruptFrame("bit length disagrees with byte length"));
        }
        Ok(Self { bytes, bit_len })
    }

    /// Number of meaningful bits.
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// True if no bits were emitted.
    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// The packed bytes, final byte zero-padded.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The bit at position `i` (0 = first emitted).
    ///
    /// # Panics
    ///
    /// Panics if `i >= bit_len()`.
    pub fn bit(&self, i: usize) -> u8 {
        assert!(i < self.bit_len);
        (self.bytes[i / 8] >> (7 - (i % 8))) & 1
    }

    /// Iterate over the meaningful bits in order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..self.bit_len).map(move |i| self.bit(i))
    }
}

/// Accumulates bits MSB-first into a byte buffer.
#[derive(Debug, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    cur: u8,
    used: u8,
}

impl BitWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one bit (0 or 1).
    pub fn push(&mut self, bit: u8) {
        debug_assert!(bit <= 1, "tried to write an invalid bit");
        self.cur = (self.cur << 1) | bit;
        self.used += 1;
        if self.used == 8 {
            self.bytes.push(self.cur);
            self.cur = 0;
            self.used = 0;
        }
    }

    /// Bits written so far.
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8 + usize::from(self.used)
    }

    /// Flush the partial byte (zero-padded) and produce the stream.
    pub fn finish(mut self) -> Bitstream {
        let bit_len = self.bit_len();
        if self.used > 0 {
            self.bytes.push(self.cur << (8 - self.used));
        }
        Bitstream { bytes: self.bytes, bit_len }
    }
}

/// Reads bits off a [`Bitstream`], synthesizing the conventional tail once
/// the stream runs out: exactly one `1` bit, then `0`s forever. The tail
/// lets a fixed-precision decoder finish consuming the last true symbols
/// without the encoder flushing termination bits.
#[derive(Debug)]
pub struct BitReader<'a> {
    stream: &'a Bitstream,
    pos: usize,
    one_synthesized: bool,
}

impl<'a> BitReader<'a> {
    /// Start reading at the first bit.
    pub fn new(stream: &'a Bitstream) -> Self {
        Self { stream, pos: 0, one_synthesized: false }
    }

    /// Read up to 16 bits MSB-first into a value window. A stream shorter
    /// than 16 bits is zero-padded on the right (left-shifted by the number
    /// of missing bits); the synthetic `1` is not consumed here.
    pub fn read_value16(&mut self) -> u32 {
        let mut value = 0u32;
        let mut got = 0;
        while got < 16 && self.pos < self.stream.bit_len() {
            value = (value << 1) | u32::from(self.stream.bit(self.pos));
            self.pos += 1;
            got += 1;
        }
        value << (16 - got)
    }

    /// The next bit of the stream, or the synthetic tail past the end.
    pub fn next_bit(&mut self) -> u8 {
        if self.pos < self.stream.bit_len() {
            let bit = self.stream.bit(self.pos);
            self.pos += 1;
            bit
        } else if !self.one_synthesized {
            self.one_synthesized = true;
            1
        } else {
            0
        }
    }
}
