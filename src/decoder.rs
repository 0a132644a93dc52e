//! Decode side: mirrors the encoder's interval evolution while consuming
//! bits on demand through a 16-bit value window.

use crate::bitio::{BitReader, Bitstream};
use crate::error::{Error, Result};
use crate::interval::{Interval, Renorm, FULL};
use crate::model::{Model, Symbol, EOF_SYMBOL};

/// Arithmetic decoder over a static [`Model`].
///
/// The model must be byte-identical to the one used by the matching encode
/// pass; with a mismatched model or corrupted stream the decoded symbols
/// are garbage (the algorithm cannot detect this), but never a panic.
pub struct ArithDecoder<'a> {
    model: &'a Model,
    interval: Interval,
    value: u32,
    reader: BitReader<'a>,
}

impl<'a> ArithDecoder<'a> {
    /// Create a decoder positioned at the start of `bits`. Loads the
    /// initial 16-bit value window, zero-padded if the stream is shorter.
    pub fn new(model: &'a Model, bits: &'a Bitstream) -> Self {
        let mut reader = BitReader::new(bits);
        let value = reader.read_value16();
        Self {
            model,
            interval: Interval::full(),
            value,
            reader,
        }
    }

    /// Decode the next symbol. Returns [`EOF_SYMBOL`] when the message is
    /// complete; calling again past that point is unspecified (garbage
    /// symbols, never a panic).
    pub fn decode_symbol(&mut self) -> Symbol {
        let total = self.model.total();
        let range = self.interval.range();
        // Scaled position of the value inside the current interval. The
        // saturating low subtraction only matters for malformed streams.
        let offset = u64::from(self.value.saturating_sub(self.interval.low())) + 1;
        let scaled = ((offset * u64::from(total) - 1) / u64::from(range)) as u32;

        let index = self.model.find(scaled);
        self.interval.narrow(
            self.model.cum_below(index),
            self.model.cum(index),
            total,
        );

        let symbol = self.model.symbol_at(index);
        if symbol == EOF_SYMBOL {
            // message complete; no renormalization after the sentinel
            return symbol;
        }

        loop {
            let case = self.interval.classify();
            if case == Renorm::Settled {
                break;
            }
            self.interval.expand(case);
            // Fold the value by the same offset, shift in the next stream
            // bit, and truncate to the 16-bit window. The wrapping
            // subtraction is unreachable for well-formed streams.
            self.value = ((self.value.wrapping_sub(case.offset()) << 1)
                | u32::from(self.reader.next_bit()))
                & (FULL - 1);
        }

        symbol
    }
}

/// Decode a whole message, stopping at the end-of-message sentinel. The
/// sentinel itself is not part of the returned bytes.
///
/// # Errors
///
/// Returns [`Error::MissingSentinel`] if `total` symbols are decoded
/// without reaching the sentinel — a truncated stream or mismatched model.
pub fn decode(model: &Model, bits: &Bitstream) -> Result<Vec<u8>> {
    let mut decoder = ArithDecoder::new(model, bits);
    let mut message = Vec::with_capacity(model.total() as usize - 1);

    // a well-formed stream holds exactly `total` symbols, sentinel included
    for _ in 0..model.total() {
        let symbol = decoder.decode_symbol();
        if symbol == EOF_SYMBOL {
            return Ok(message);
        }
        message.push(symbol as u8);
    }
    Err(Error::MissingSentinel)
}
