//! # Vshide - Hide messages inside a single character
//!
//! Vshide is a steganography tool that hides a short byte sequence inside one
//! visible "host" character by appending a run of invisible Unicode variation
//! selectors, one selector per byte.
//!
//! ## Overview
//!
//! - The **host** is any visible character the caller picks (an emoji works well)
//! - Each payload byte maps to one invisible selector codepoint:
//!   bytes 0-15 use U+FE00..U+FE0F, bytes 16-255 use U+E0100..U+E01EF
//! - The **carrier** is the host followed by the selector run - it renders as
//!   just the host, but carries the full message
//! - Decoding strips the anchor scalar and inverts the mapping; anything that
//!   is not a selector is skipped (tolerant mode) or rejected (strict mode)
//!
//! The codec is pure and stateless: no I/O, no shared state, safe to call from
//! any thread.
//!
//! ## Example Usage
//!
//! ```rust
//! use vshide::{encode, decode};
//!
//! let encoded = encode("X", "Hi").unwrap();
//!
//! // Renders as just "X" - the message is invisible
//! assert_eq!(encoded.carrier.chars().next(), Some('X'));
//! assert_eq!(encoded.hidden_bytes, 2);
//!
//! // Tolerant decode never fails
//! let decoded = decode(&encoded.carrier);
//! assert_eq!(decoded.message, "Hi");
//! ```
//!
//! ## Modules
//!
//! - [`selector`]: The byte <-> variation-selector codepoint mapping
//! - [`payload`]: Typed byte sequence with fallible text conversion
//! - [`encoder`]: Carrier construction
//! - [`decoder`]: Payload recovery (tolerant or strict)
//! - [`draft`]: File-backed store for the last encoded carrier

pub mod decoder;
pub mod draft;
pub mod encoder;
pub mod payload;
pub mod selector;

// Re-export commonly used items at the crate root
pub use decoder::{
    decode, decode_bytes, decode_bytes_with_config, decode_with_config, DecodeMode,
    DecodedMessage, DecoderConfig, DecoderError,
};
pub use draft::{DraftError, DraftStore};
pub use encoder::{
    encode, encode_bytes, encode_bytes_with_config, encode_with_config, EncodedMessage,
    EncoderConfig, EncoderError,
};
pub use payload::{Payload, PayloadError};
