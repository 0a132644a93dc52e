//! Encode side: interval narrowing plus bit-plus-follow renormalization.

use crate::bitio::{BitWriter, Bitstream};
use crate::error::Result;
use crate::interval::{Interval, Renorm, QUARTER};
use crate::model::{Model, Symbol};

/// Arithmetic encoder over a static [`Model`].
///
/// Feed symbols with [`encode_symbol`](Self::encode_symbol), then call
/// [`finish`](Self::finish), which appends the end-of-message sentinel,
/// flushes the final interval disambiguation bits and hands back the
/// bitstream.
pub struct ArithEncoder<'a> {
    model: &'a Model,
    interval: Interval,
    pending: u32,
    writer: BitWriter,
}

impl<'a> ArithEncoder<'a> {
    /// Create an encoder for one message.
    pub fn new(model: &'a Model) -> Self {
        Self {
            model,
            interval: Interval::full(),
            pending: 0,
            writer: BitWriter::new(),
        }
    }

    /// Encode one symbol.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSymbol`](crate::Error::UnknownSymbol) if the
    /// symbol is not in the model's alphabet.
    pub fn encode_symbol(&mut self, symbol: Symbol) -> Result<()> {
        let index = self.model.index_of(symbol)?;
        self.encode_index(index);
        Ok(())
    }

    /// Encode the sentinel, flush the final disambiguation bits and return
    /// the finished bitstream.
    pub fn finish(mut self) -> Bitstream {
        self.encode_index(0);
        // One last bit-plus-follow pins the decoder's value window inside
        // the settled interval: low < QUARTER means [QUARTER, HALF) fits
        // inside it, otherwise [HALF, THREE_QUARTERS) does.
        self.pending += 1;
        let bit = u8::from(self.interval.low() >= QUARTER);
        self.emit(bit);
        self.writer.finish()
    }

    fn encode_index(&mut self, index: usize) {
        self.interval.narrow(
            self.model.cum_below(index),
            self.model.cum(index),
            self.model.total(),
        );

        loop {
            let case = self.interval.classify();
            match case {
                Renorm::LowerHalf => self.emit(0),
                Renorm::UpperHalf => self.emit(1),
                Renorm::Straddle => self.pending += 1,
                Renorm::Settled => break,
            }
            self.interval.expand(case);
        }
    }

    // Bit-plus-follow: the settled bit, then the deferred straddle bits
    // with opposite polarity.
    fn emit(&mut self, bit: u8) {
        self.writer.push(bit);
        while self.pending > 0 {
            self.writer.push(bit ^ 1);
            self.pending -= 1;
        }
    }
}

/// Encode a whole message (sentinel appended internally).
///
/// # Errors
///
/// Returns [`Error::UnknownSymbol`](crate::Error::UnknownSymbol) if a byte
/// of `message` is absent from the model — i.e. the model was built from
/// different data.
pub fn encode(model: &Model, message: &[u8]) -> Result<Bitstream> {
    let mut encoder = ArithEncoder::new(model);
    for &byte in message {
        encoder.encode_symbol(Symbol::from(byte))?;
    }
    Ok(encoder.finish())
}
