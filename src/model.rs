//! Static order-0 frequency model.
//!
//! The model is built once from the full message before coding starts and is
//! read-only afterwards. It holds the alphabet (distinct symbols in
//! first-occurrence order, with the end-of-message sentinel always at index
//! 0) and the cumulative frequency table aligned 1:1 with it. Encoder and
//! decoder must be given byte-identical models for round-trips to hold.

use crate::error::{Error, Result};

/// One unit of the message alphabet. Byte values occupy `0..=255`; the
/// value [`EOF_SYMBOL`] is reserved for the end-of-message sentinel.
pub type Symbol = u16;

/// The reserved end-of-message symbol, appended exactly once per message.
/// Always alphabet index 0.
pub const EOF_SYMBOL: Symbol = 256;

/// Largest admissible total frequency count: the classic Witten-Neal-Cleary
/// bound for a 16-bit interval universe. A fully renormalized interval can
/// settle as narrow as `QUARTER + 2`, so totals above 2^14 would let a
/// count-1 symbol truncate to an empty sub-range; `range * cum` products
/// staying within `u32` follows a fortiori.
pub const MAX_TOTAL: u32 = 1 << 14;

const NO_INDEX: u16 = u16::MAX;

/// Alphabet and cumulative frequency table for one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    alphabet: Vec<Symbol>,
    cum_freq: Vec<u32>,
    index: Vec<u16>, // symbol -> alphabet index, NO_INDEX if absent
}

impl Model {
    /// Build the model for a message. The end-of-message sentinel is
    /// accounted for implicitly: it gets alphabet index 0 and frequency 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FrequencyOverflow`] if the message (plus sentinel)
    /// holds more than [`MAX_TOTAL`] (2^14) symbols.
    pub fn build(message: &[u8]) -> Result<Self> {
        let total = message.len() + 1;
        if total > MAX_TOTAL as usize {
            return Err(Error::FrequencyOverflow(total));
        }

        let mut index = vec![NO_INDEX; usize::from(EOF_SYMBOL) + 1];
        let mut alphabet = vec![EOF_SYMBOL];
        let mut counts = vec![1u32]; // sentinel occurs exactly once
        index[usize::from(EOF_SYMBOL)] = 0;

        for &byte in message {
            let s = usize::from(byte);
            if index[s] == NO_INDEX {
                index[s] = alphabet.len() as u16;
                alphabet.push(Symbol::from(byte));
                counts.push(0);
            }
            counts[usize::from(index[s])] += 1;
        }

        let mut cum_freq = counts;
        for i in 1..cum_freq.len() {
            cum_freq[i] += cum_freq[i - 1];
        }

        Ok(Self { alphabet, cum_freq, index })
    }

    /// Rebuild a model from `(symbol, count)` pairs in first-appearance
    /// order, as recovered from a container header. The sentinel is not
    /// part of `pairs`; it is re-inserted at index 0 with count 1.
    ///
    /// # Errors
    ///
    /// Rejects duplicate symbols, zero counts and totals above
    /// [`MAX_TOTAL`].
    pub fn from_counts(pairs: &[(u8, u32)]) -> Result<Self> {
        let mut index = vec![NO_INDEX; usize::from(EOF_SYMBOL) + 1];
        let mut alphabet = vec![EOF_SYMBOL];
        let mut cum_freq = vec![1u32];
        index[usize::from(EOF_SYMBOL)] = 0;

        let mut total: u64 = 1;
        for &(byte, count) in pairs {
            let s = usize::from(byte);
            if index[s] != NO_INDEX {
                return Err(Error::CorruptFrame("duplicate symbol in header"));
            }
            if count == 0 {
                return Err(Error::CorruptFrame("zero frequency count"));
            }
            total += u64::from(count);
            if total > u64::from(MAX_TOTAL) {
                return Err(Error::FrequencyOverflow(total as usize));
            }
            index[s] = alphabet.len() as u16;
            alphabet.push(Symbol::from(byte));
            cum_freq.push(total as u32);
        }

        Ok(Self { alphabet, cum_freq, index })
    }

    /// Number of alphabet entries, sentinel included.
    pub fn len(&self) -> usize {
        self.alphabet.len()
    }

    /// Always false: the sentinel is present in every model.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Total frequency count, equal to message length plus one.
    pub fn total(&self) -> u32 {
        *self.cum_freq.last().unwrap_or(&1)
    }

    /// The symbol at an alphabet index.
    pub fn symbol_at(&self, index: usize) -> Symbol {
        self.alphabet[index]
    }

    /// Cumulative frequency through alphabet index `i` (inclusive).
    pub fn cum(&self, i: usize) -> u32 {
        self.cum_freq[i]
    }

    /// Cumulative frequency strictly below alphabet index `i`.
    pub fn cum_below(&self, i: usize) -> u32 {
        if i == 0 {
            0
        } else {
            self.cum_freq[i - 1]
        }
    }

    /// Individual frequency of the symbol at alphabet index `i`.
    pub fn count(&self, i: usize) -> u32 {
        self.cum(i) - self.cum_below(i)
    }

    /// Alphabet index of a symbol.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSymbol`] for symbols absent from the
    /// alphabet — encoding such a symbol is a caller contract violation.
    pub fn index_of(&self, symbol: Symbol) -> Result<usize> {
        match self.index.get(usize::from(symbol)) {
            Some(&i) if i != NO_INDEX => Ok(usize::from(i)),
            _ => Err(Error::UnknownSymbol(symbol)),
        }
    }

    /// Smallest alphabet index whose cumulative frequency exceeds `f`, i.e.
    /// the index `i` with `cum[i-1] <= f < cum[i]`. Clamps to the last
    /// index for out-of-range `f` (only reachable from malformed streams).
    pub fn find(&self, f: u32) -> usize {
        self.cum_freq
            .iter()
            .position(|&c| c > f)
            .unwrap_or(self.cum_freq.len() - 1)
    }

    /// The cumulative frequency table, aligned 1:1 with the alphabet.
    pub fn cum_freq(&self) -> &[u32] {
        &self.cum_freq
    }

    /// The alphabet in first-occurrence order, sentinel first.
    pub fn alphabet(&self) -> &[Symbol] {
        &self.alphabet
    }
}
