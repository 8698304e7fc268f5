//! Carrier construction.
//!
//! Encoding appends one invisible selector per payload byte after the host
//! string, in payload order, with no delimiters or length prefix. The result
//! renders as just the host but carries the full message.

use thiserror::Error;

use crate::payload::{Payload, PayloadError};
use crate::selector::selector_for_byte;

/// Errors that can occur during encoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncoderError {
    #[error("Empty host: the carrier needs a visible anchor character")]
    EmptyHost,

    #[error("Host is composed of {count} scalar values; strict decoding strips exactly one")]
    MultiScalarHost { count: usize },

    #[error(transparent)]
    Payload(#[from] PayloadError),
}

/// Result of encoding a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedMessage {
    /// The carrier - host followed by the invisible selector run.
    pub carrier: String,
    /// Number of payload bytes hidden in the carrier.
    pub hidden_bytes: usize,
}

/// Configuration for the encoder.
#[derive(Debug, Clone, Default)]
pub struct EncoderConfig {
    /// Whether to output verbose information.
    pub verbose: bool,
    /// Reject hosts made of more than one Unicode scalar value.
    ///
    /// Decoding strips exactly one scalar as the anchor, so the trailing
    /// scalars of a composed host (emoji + modifier, for example) survive
    /// only because tolerant decoding skips them. Enable this when carriers
    /// will be decoded in strict mode.
    pub require_single_scalar_host: bool,
}

/// Hides a text message inside a host character.
///
/// # Arguments
/// * `host` - The visible character that anchors the carrier (may be an emoji)
/// * `message` - The message to hide; every character must fit in one byte
///
/// # Returns
/// An `EncodedMessage` whose carrier decodes back to `message` exactly.
/// An empty message yields the host unchanged.
pub fn encode(host: &str, message: &str) -> Result<EncodedMessage, EncoderError> {
    encode_with_config(host, message, &EncoderConfig::default())
}

/// Hides a text message with custom configuration.
pub fn encode_with_config(
    host: &str,
    message: &str,
    config: &EncoderConfig,
) -> Result<EncodedMessage, EncoderError> {
    let payload = Payload::from_text(message)?;
    encode_bytes_with_config(host, payload.as_bytes(), config)
}

/// Hides raw bytes inside a host character.
pub fn encode_bytes(host: &str, payload: &[u8]) -> Result<EncodedMessage, EncoderError> {
    encode_bytes_with_config(host, payload, &EncoderConfig::default())
}

/// Hides raw bytes with custom configuration.
pub fn encode_bytes_with_config(
    host: &str,
    payload: &[u8],
    config: &EncoderConfig,
) -> Result<EncodedMessage, EncoderError> {
    if host.is_empty() {
        return Err(EncoderError::EmptyHost);
    }

    let anchor_scalars = host.chars().count();
    if anchor_scalars > 1 {
        if config.require_single_scalar_host {
            return Err(EncoderError::MultiScalarHost {
                count: anchor_scalars,
            });
        }
        if config.verbose {
            eprintln!(
                "Host is {} scalar values; carrier will need tolerant decoding",
                anchor_scalars
            );
        }
    }

    let mut carrier = String::with_capacity(host.len() + payload.len() * 4);
    carrier.push_str(host);

    for &byte in payload {
        carrier.push(selector_for_byte(byte));
    }

    if config.verbose {
        eprintln!("Hid {} bytes behind the anchor", payload.len());
    }

    Ok(EncodedMessage {
        carrier,
        hidden_bytes: payload.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_selectors() {
        // 'H' is 72 -> high block 0xE0100 + 56; 'i' is 105 -> 0xE0100 + 89
        let encoded = encode("X", "Hi").unwrap();
        let scalars: Vec<u32> = encoded.carrier.chars().map(|c| c as u32).collect();
        assert_eq!(scalars, vec!['X' as u32, 0xE0138, 0xE0159]);
        assert_eq!(encoded.hidden_bytes, 2);
    }

    #[test]
    fn test_encode_low_block_byte() {
        // Byte 7 lands in the low block
        let encoded = encode("X", "\u{0007}").unwrap();
        let scalars: Vec<u32> = encoded.carrier.chars().map(|c| c as u32).collect();
        assert_eq!(scalars, vec!['X' as u32, 0xFE07]);
    }

    #[test]
    fn test_encode_empty_message_returns_host() {
        let encoded = encode("\u{1F60A}", "").unwrap();
        assert_eq!(encoded.carrier, "\u{1F60A}");
        assert_eq!(encoded.hidden_bytes, 0);
    }

    #[test]
    fn test_encode_empty_host() {
        assert_eq!(encode("", "secret"), Err(EncoderError::EmptyHost));
    }

    #[test]
    fn test_encode_out_of_range_character() {
        let result = encode("X", "\u{0100}");
        assert!(matches!(result, Err(EncoderError::Payload(_))));
    }

    #[test]
    fn test_multi_scalar_host_allowed_by_default() {
        // Thumbs up + skin tone modifier is two scalars
        let host = "\u{1F44D}\u{1F3FD}";
        let encoded = encode(host, "ok").unwrap();
        assert!(encoded.carrier.starts_with(host));
    }

    #[test]
    fn test_multi_scalar_host_rejected_when_required() {
        let config = EncoderConfig {
            require_single_scalar_host: true,
            ..Default::default()
        };
        let result = encode_with_config("\u{1F44D}\u{1F3FD}", "ok", &config);
        assert_eq!(result, Err(EncoderError::MultiScalarHost { count: 2 }));
    }

    #[test]
    fn test_encode_bytes() {
        let encoded = encode_bytes("A", &[0, 15, 16, 255]).unwrap();
        let scalars: Vec<u32> = encoded.carrier.chars().skip(1).map(|c| c as u32).collect();
        assert_eq!(scalars, vec![0xFE00, 0xFE0F, 0xE0100, 0xE01EF]);
    }
}
