//! # Arithmetic Coding
//!
//! *Entropy coding at the Shannon limit, one interval at a time.*
//!
//! ## Intuition First
//!
//! Picture the unit interval `[0, 1)` carved into slices, one per symbol,
//! each slice as wide as that symbol's probability. Encoding a message means
//! repeatedly zooming into the slice of the next symbol: after the whole
//! message, you are left with a tiny sub-interval, and *any* number inside it
//! identifies the message. Frequent symbols shrink the interval only a
//! little (few bits), rare symbols shrink it a lot (many bits) — exactly the
//! `-log2 p` bits information theory says each symbol is worth.
//!
//! ## The Problem
//!
//! Real hardware has no infinite-precision fractions. The classic fix is to
//! track the interval as a pair of 16-bit integers and *renormalize*: every
//! time the interval falls entirely into one half of the universe, the
//! leading bit is settled, so emit it and double the interval back up. The
//! awkward case is an interval straddling the midpoint while shrinking — the
//! *underflow* case — handled by deferring bits with the bit-plus-follow
//! technique.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon            Entropy as the fundamental limit
//! 1952  Huffman            Optimal prefix codes (whole-bit granularity)
//! 1976  Pasco, Rissanen    First practical arithmetic codes
//! 1979  Rissanen & Langdon Generalized arithmetic coding
//! 1987  Witten/Neal/Cleary The CACM reference implementation (E1/E2/E3)
//! 1995  JPEG / JBIG        Binary arithmetic coders go mainstream
//! 2003  H.264 CABAC        Context-adaptive binary arithmetic coding
//! ```
//!
//! This crate implements the Witten-Neal-Cleary scheme with a *static*
//! order-0 model: the frequency table is built from the full message before
//! encoding begins and transmitted alongside the bitstream.
//!
//! ## Mathematical Formulation
//!
//! With cumulative frequencies `cum[i]` and total `T`, symbol `i` narrows
//! the current integer interval `[low, high]` (16-bit universe) to:
//!
//! ```text
//! range = high - low + 1
//! high' = low + range * cum[i]   / T - 1
//! low'  = low + range * cum[i-1] / T
//! ```
//!
//! Renormalization keeps the interval wider than a quarter of the universe,
//! so with `T <= 2^14` every count-1 symbol keeps a non-empty sub-range and
//! every product fits 32-bit unsigned arithmetic. This bound is a checked
//! precondition of [`Model::build`], not a silent wraparound.
//!
//! ## Complexity Analysis
//!
//! - **Time**: `O(1)` arithmetic per symbol plus `O(|alphabet|)` for the
//!   cumulative-table scan on decode (alphabets are at most 257 entries).
//! - **Space**: `O(|alphabet|)` for the model, `O(1)` coder state.
//!
//! ## Failure Modes
//!
//! 1. **Precision overflow**: messages of more than 2^14 symbols (including
//!    the end-of-message sentinel) could narrow a rare symbol's sub-range
//!    to nothing and stall renormalization; rejected at model build time.
//! 2. **Model mismatch**: decoding with a table that does not match the
//!    encode pass yields garbage symbols — undetectable from the bitstream
//!    alone, but never a panic.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - [`Model`]: alphabet + cumulative frequency table, sentinel at index 0.
//! - [`ArithEncoder`] / [`ArithDecoder`]: symbol-at-a-time coder halves
//!   sharing the same [interval](interval::Interval) arithmetic.
//! - [`encode`] / [`decode`]: whole-message entry points.
//! - [`compress`] / [`decompress`]: container framing (model + packed
//!   bitstream) for self-describing byte blobs.
//!
//! ## References
//!
//! - Witten, I. H., Neal, R. M., Cleary, J. G. (1987). "Arithmetic Coding
//!   for Data Compression." *Communications of the ACM*, 30(6).
//! - Rissanen, J., Langdon, G. G. (1979). "Arithmetic Coding." *IBM Journal
//!   of Research and Development*, 23(2).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bitio;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod frame;
pub mod interval;
pub mod model;

pub use bitio::{BitReader, BitWriter, Bitstream};
pub use decoder::{decode, ArithDecoder};
pub use encoder::{encode, ArithEncoder};
pub use error::{Error, Result};
pub use frame::{compress, decompress};
pub use model::{Model, Symbol, EOF_SYMBOL, MAX_TOTAL};
