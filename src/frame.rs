//! Container framing: a self-describing byte blob holding the model and
//! the packed bitstream.
//!
//! The coder core works over in-memory models and bit sequences; this
//! module persists the four facts a round-trip needs: the alphabet in
//! first-appearance order, each symbol's frequency, the meaningful-bit
//! count of the final packed byte, and the packed bitstream itself.
//!
//! Layout (all integers big-endian):
//!
//! ```text
//! u16            n            alphabet size, sentinel excluded
//! n x (u8, u32)  sym, count   first-appearance order, individual counts
//! u8             last_bits    meaningful bits in the final packed byte
//!                             (1..=8; 0 only for an empty stream)
//! u32            n_bytes      packed stream length in bytes
//! n_bytes x u8                packed bits, MSB-first, zero-padded
//! ```
//!
//! The fixed-width binary header represents any symbol byte unambiguously,
//! so no delimiter escaping is needed. The sentinel is not stored: it is
//! always alphabet index 0 with count 1.

use std::io::{Read, Write};

use crate::bitio::Bitstream;
use crate::decoder::decode;
use crate::encoder::encode;
use crate::error::{Error, Result};
use crate::model::Model;

/// Write a model + bitstream pair as one frame.
///
/// # Errors
///
/// Propagates I/O errors from the writer.
pub fn write_frame<W: Write>(w: &mut W, model: &Model, bits: &Bitstream) -> Result<()> {
    let n = (model.len() - 1) as u16; // sentinel excluded
    w.write_all(&n.to_be_bytes())?;
    for i in 1..model.len() {
        w.write_all(&[model.symbol_at(i) as u8])?;
        w.write_all(&model.count(i).to_be_bytes())?;
    }

    let last_bits = match bits.bit_len() % 8 {
        0 if bits.is_empty() => 0u8,
        0 => 8,
        r => r as u8,
    };
    w.write_all(&[last_bits])?;
    w.write_all(&(bits.as_bytes().len() as u32).to_be_bytes())?;
    w.write_all(bits.as_bytes())?;
    Ok(())
}

/// Read one frame back into a model + bitstream pair.
///
/// # Errors
///
/// Returns [`Error::CorruptFrame`] for structurally invalid headers and
/// [`Error::Io`] for short reads.
pub fn read_frame<R: Read>(r: &mut R) -> Result<(Model, Bitstream)> {
    let mut u16_buf = [0u8; 2];
    r.read_exact(&mut u16_buf)?;
    let n = u16::from_be_bytes(u16_buf);
    if n > 256 {
        return Err(Error::CorruptFrame("alphabet larger than 256 symbols"));
    }

    let mut pairs = Vec::with_capacity(usize::from(n));
    for _ in 0..n {
        let mut entry = [0u8; 5];
        r.read_exact(&mut entry)?;
        let count = u32::from_be_bytes([entry[1], entry[2], entry[3], entry[4]]);
        pairs.push((entry[0], count));
    }
    let model = Model::from_counts(&pairs)?;

    let mut byte_buf = [0u8; 1];
    r.read_exact(&mut byte_buf)?;
    let last_bits = byte_buf[0];
    if last_bits > 8 {
        return Err(Error::CorruptFrame("more than 8 meaningful bits in a byte"));
    }

    let mut u32_buf = [0u8; 4];
    r.read_exact(&mut u32_buf)?;
    let n_bytes = u32::from_be_bytes(u32_buf) as usize;

    // sized by what the reader actually yields, so a junk length field
    // cannot force a huge upfront allocation
    let mut packed = Vec::new();
    r.take(n_bytes as u64).read_to_end(&mut packed)?;
    if packed.len() != n_bytes {
        return Err(Error::CorruptFrame("truncated bitstream"));
    }

    let bit_len = match (n_bytes, last_bits) {
        (0, 0) => 0,
        (0, _) => return Err(Error::CorruptFrame("trailing bits without bytes")),
        (_, 0) => return Err(Error::CorruptFrame("empty final byte")),
        (bytes, bits) => (bytes - 1) * 8 + usize::from(bits),
    };
    let bits = Bitstream::from_parts(packed, bit_len)?;
    Ok((model, bits))
}

/// Compress a message into a self-describing frame.
///
/// # Errors
///
/// Returns [`Error::FrequencyOverflow`] for messages of 2^14 bytes or
/// more.
pub fn compress(message: &[u8]) -> Result<Vec<u8>> {
    let model = Model::build(message)?;
    let bits = encode(&model, message)?;
    let mut out = Vec::with_capacity(bits.as_bytes().len() + 8 + 5 * model.len());
    write_frame(&mut out, &model, &bits)?;
    Ok(out)
}

/// Decompress a frame produced by [`compress`].
///
/// # Errors
///
/// Returns [`Error::CorruptFrame`] / [`Error::Io`] for malformed frames
/// and [`Error::MissingSentinel`] if the stream does not terminate.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let (model, bits) = read_frame(&mut &data[..])?;
    decode(&model, &bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_roundtrip() {
        let model = Model::build(b"abracadabra").unwrap();
        let bits = encode(&model, b"abracadabra").unwrap();

        let mut blob = Vec::new();
        write_frame(&mut blob, &model, &bits).unwrap();
        let (model2, bits2) = read_frame(&mut &blob[..]).unwrap();

        assert_eq!(model, model2);
        assert_eq!(bits, bits2);
    }

    #[test]
    fn compress_then_decompress() {
        let message = b"the quick brown fox jumps over the lazy dog";
        let blob = compress(message).unwrap();
        assert_eq!(decompress(&blob).unwrap(), message);
    }

    #[test]
    fn empty_message_frame() {
        let blob = compress(b"").unwrap();
        assert_eq!(decompress(&blob).unwrap(), b"");
    }

    #[test]
    fn delimiter_like_symbols_survive_framing() {
        // bytes that would clash with a textual header: pipe, colon,
        // newline, NUL
        let message = b"|:\n\x00|:\n\x00||\n\n";
        let blob = compress(message).unwrap();
        assert_eq!(decompress(&blob).unwrap(), message.to_vec());
    }

    #[test]
    fn truncated_frame_is_an_error() {
        let blob = compress(b"hello hello hello").unwrap();
        for cut in [0, 1, 3, blob.len() / 2, blob.len() - 1] {
            assert!(decompress(&blob[..cut]).is_err());
        }
    }

    #[test]
    fn corrupt_header_fields_are_rejected() {
        // alphabet size over 256
        let mut blob = Vec::new();
        blob.extend_from_slice(&300u16.to_be_bytes());
        assert!(matches!(
            decompress(&blob),
            Err(Error::CorruptFrame(_)) | Err(Error::Io(_))
        ));

        // zero count for a declared symbol
        let mut blob = Vec::new();
        blob.extend_from_slice(&1u16.to_be_bytes());
        blob.push(b'a');
        blob.extend_from_slice(&0u32.to_be_bytes());
        blob.push(0);
        blob.extend_from_slice(&0u32.to_be_bytes());
        assert!(decompress(&blob).is_err());

        // meaningful-bit count above 8
        let mut blob = Vec::new();
        blob.extend_from_slice(&0u16.to_be_bytes());
        blob.push(9);
        blob.extend_from_slice(&1u32.to_be_bytes());
        blob.push(0xff);
        assert!(decompress(&blob).is_err());
    }
}
