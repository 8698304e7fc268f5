//! Typed payload bytes with explicit text conversion.
//!
//! The carrier hides one byte per selector, so a text message must first be
//! lowered to bytes. Only characters whose scalar value fits in 0-255 (the
//! Latin-1 range) can be represented; anything else is rejected at this
//! boundary instead of being silently truncated.

use thiserror::Error;

/// Errors from converting text into payload bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    #[error("Character '{character}' at position {index} does not fit in one byte (U+{code:04X})")]
    CharacterOutOfRange {
        character: char,
        index: usize,
        code: u32,
    },
}

/// An ordered sequence of payload bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Payload(Vec<u8>);

impl Payload {
    /// Converts a text message into payload bytes.
    ///
    /// Each character's scalar value must fit in 0-255. Returns
    /// `PayloadError::CharacterOutOfRange` for the first character that
    /// doesn't, naming the character and its position.
    pub fn from_text(message: &str) -> Result<Self, PayloadError> {
        let mut bytes = Vec::with_capacity(message.len());

        for (index, character) in message.chars().enumerate() {
            let code = character as u32;
            if code > 0xFF {
                return Err(PayloadError::CharacterOutOfRange {
                    character,
                    index,
                    code,
                });
            }
            bytes.push(code as u8);
        }

        Ok(Self(bytes))
    }

    /// Reinterprets the bytes as text, one scalar U+0000..U+00FF per byte.
    ///
    /// This is the exact inverse of [`Payload::from_text`] and is total over
    /// all byte values.
    pub fn to_text(&self) -> String {
        self.0
            .iter()
            .map(|&b| char::from(b))
            .collect()
    }

    /// The raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the payload, returning the raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Number of payload bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the payload carries no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Payload {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}
