//! Error types for arithmetic coding.

use thiserror::Error;

/// Error variants for coding operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The message is too long: total frequency counts must stay at or
    /// below 2^14 so a fully narrowed interval still spans every symbol.
    #[error("total frequency {0} exceeds the 2^14 precision limit")]
    FrequencyOverflow(usize),

    /// A symbol handed to the encoder is not part of the model's alphabet.
    #[error("symbol {0} is not in the alphabet")]
    UnknownSymbol(u16),

    /// The bitstream ran out without ever decoding the end-of-message
    /// symbol. Indicates a truncated stream or a mismatched model.
    #[error("bitstream ended without an end-of-message symbol")]
    MissingSentinel,

    /// The container header is structurally invalid.
    #[error("corrupt frame: {0}")]
    CorruptFrame(&'static str),

    /// An I/O error occurred while reading or writing a frame.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for coding operations.
pub type Result<T> = std::result::Result<T, Error>;
