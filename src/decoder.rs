//! Payload recovery.
//!
//! Decoding walks the carrier's Unicode scalar values (never raw UTF-16-style
//! units - selectors above U+FFFF are single scalars), drops exactly one
//! leading scalar as the anchor, and inverts the selector mapping on the rest.
//!
//! Two modes:
//! - **Tolerant** (default): scalars outside both selector blocks are skipped.
//!   This matches how the carrier survives copy/paste through software that
//!   inserts stray formatting characters, and it absorbs the trailing scalars
//!   of composed hosts. Tolerant decoding never fails.
//! - **Strict**: the first foreign scalar aborts the decode with a typed error.

use thiserror::Error;

use crate::payload::Payload;
use crate::selector::byte_for_selector;

/// Errors that can occur during strict decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecoderError {
    #[error("Foreign codepoint U+{codepoint:04X} at scalar position {index} (strict mode)")]
    ForeignCodepoint { codepoint: u32, index: usize },
}

/// How the decoder treats scalars outside the selector blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeMode {
    /// Skip foreign scalars silently.
    #[default]
    Tolerant,
    /// Fail on the first foreign scalar.
    Strict,
}

/// Configuration for the decoder.
#[derive(Debug, Clone, Default)]
pub struct DecoderConfig {
    /// Foreign-scalar handling.
    pub mode: DecodeMode,
    /// Whether to output verbose information.
    pub verbose: bool,
}

/// Result of decoding a carrier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMessage {
    /// The recovered message.
    pub message: String,
    /// Number of payload bytes recovered.
    pub hidden_bytes: usize,
    /// Number of foreign scalars skipped (always 0 in strict mode).
    pub skipped: usize,
}

/// Recovers the hidden message from a carrier, skipping foreign scalars.
///
/// This is the tolerant mode and never fails: an empty carrier or a carrier
/// with no selectors decodes to the empty message.
pub fn decode(carrier: &str) -> DecodedMessage {
    decode_with_config(carrier, &DecoderConfig::default())
        .expect("tolerant decoding never fails")
}

/// Recovers the hidden message with custom configuration.
///
/// Only `DecodeMode::Strict` can return an error.
pub fn decode_with_config(
    carrier: &str,
    config: &DecoderConfig,
) -> Result<DecodedMessage, DecoderError> {
    let (payload, skipped) = decode_payload(carrier, config)?;

    Ok(DecodedMessage {
        message: payload.to_text(),
        hidden_bytes: payload.len(),
        skipped,
    })
}

/// Recovers the raw hidden bytes from a carrier, skipping foreign scalars.
pub fn decode_bytes(carrier: &str) -> Payload {
    decode_bytes_with_config(carrier, &DecoderConfig::default())
        .expect("tolerant decoding never fails")
}

/// Recovers the raw hidden bytes with custom configuration.
pub fn decode_bytes_with_config(
    carrier: &str,
    config: &DecoderConfig,
) -> Result<Payload, DecoderError> {
    decode_payload(carrier, config).map(|(payload, _)| payload)
}

/// Single pass over the carrier's scalars after the anchor.
fn decode_payload(
    carrier: &str,
    config: &DecoderConfig,
) -> Result<(Payload, usize), DecoderError> {
    let mut bytes = Vec::new();
    let mut skipped = 0usize;

    // The first scalar is the anchor, not data
    for (index, c) in carrier.chars().enumerate().skip(1) {
        match byte_for_selector(c) {
            Some(byte) => bytes.push(byte),
            None => match config.mode {
                DecodeMode::Tolerant => skipped += 1,
                DecodeMode::Strict => {
                    return Err(DecoderError::ForeignCodepoint {
                        codepoint: c as u32,
                        index,
                    });
                }
            },
        }
    }

    if config.verbose {
        eprintln!(
            "Recovered {} bytes ({} foreign scalars skipped)",
            bytes.len(),
            skipped
        );
    }

    Ok((Payload::from(bytes), skipped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;

    #[test]
    fn test_decode_round_trip() {
        let encoded = encode("X", "Hi").unwrap();
        let decoded = decode(&encoded.carrier);
        assert_eq!(decoded.message, "Hi");
        assert_eq!(decoded.hidden_bytes, 2);
        assert_eq!(decoded.skipped, 0);
    }

    #[test]
    fn test_decode_control_character() {
        let encoded = encode("X", "\u{0007}").unwrap();
        assert_eq!(decode(&encoded.carrier).message, "\u{0007}");
    }

    #[test]
    fn test_decode_empty_carrier() {
        let decoded = decode("");
        assert_eq!(decoded.message, "");
        assert_eq!(decoded.hidden_bytes, 0);
    }

    #[test]
    fn test_decode_anchor_only() {
        assert_eq!(decode("\u{1F60A}").message, "");
    }

    #[test]
    fn test_decode_skips_foreign_scalars() {
        // "A" hides byte 65; a stray 'z' before the selector is ignored
        let carrier = format!("A{}{}", 'z', '\u{E0131}'); // 0xE0100 + 65 - 16
        let decoded = decode(&carrier);
        assert_eq!(decoded.message, "A");
        assert_eq!(decoded.skipped, 1);
    }

    #[test]
    fn test_decode_strict_rejects_foreign_scalars() {
        let carrier = format!("A{}{}", 'z', '\u{E0131}');
        let config = DecoderConfig {
            mode: DecodeMode::Strict,
            ..Default::default()
        };
        let result = decode_with_config(&carrier, &config);
        assert_eq!(
            result,
            Err(DecoderError::ForeignCodepoint {
                codepoint: 'z' as u32,
                index: 1,
            })
        );
    }

    #[test]
    fn test_decode_strict_accepts_clean_carrier() {
        let encoded = encode("X", "Hello").unwrap();
        let config = DecoderConfig {
            mode: DecodeMode::Strict,
            ..Default::default()
        };
        let decoded = decode_with_config(&encoded.carrier, &config).unwrap();
        assert_eq!(decoded.message, "Hello");
        assert_eq!(decoded.skipped, 0);
    }

    #[test]
    fn test_decode_multi_scalar_host_tolerant() {
        // Composed host: trailing anchor scalar is skipped, not misread
        let host = "\u{1F44D}\u{1F3FD}";
        let encoded = encode(host, "ok").unwrap();
        let decoded = decode(&encoded.carrier);
        assert_eq!(decoded.message, "ok");
        assert_eq!(decoded.skipped, 1);
    }

    #[test]
    fn test_decode_bytes() {
        let encoded = crate::encoder::encode_bytes("A", &[0, 15, 16, 255]).unwrap();
        let payload = decode_bytes(&encoded.carrier);
        assert_eq!(payload.as_bytes(), &[0, 15, 16, 255]);
    }

    #[test]
    fn test_decode_anchor_above_bmp_is_one_scalar() {
        // The anchor is one scalar even when it sits above U+FFFF
        let encoded = encode("\u{1F600}", "A").unwrap();
        assert_eq!(decode(&encoded.carrier).message, "A");
    }
}
