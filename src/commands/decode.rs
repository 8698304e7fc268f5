//! Decode command - recover the hidden message from a carrier.

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Args;

use vshide::{decode_with_config, DecodeMode, DecoderConfig, DraftStore};

use super::CommandExecutor;

/// Recover the hidden message from a carrier.
///
/// By default foreign codepoints (anything that is not a variation selector
/// after the anchor) are skipped silently, so a carrier survives stray
/// formatting characters picked up in transit. Use --strict to fail on the
/// first foreign codepoint instead.
#[derive(Args, Debug)]
pub struct DecodeCommand {
    /// The carrier text (reads from stdin if neither this nor --draft is given)
    #[arg(short, long, conflicts_with = "draft")]
    pub carrier: Option<String>,

    /// Use the carrier saved by the last encode
    #[arg(short, long)]
    pub draft: bool,

    /// Fail on the first foreign codepoint instead of skipping it
    #[arg(short, long)]
    pub strict: bool,

    /// Verbose output (shows recovered and skipped counts)
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for DecodeCommand {
    fn execute(&self) -> Result<()> {
        let carrier: String = if let Some(c) = &self.carrier {
            c.clone()
        } else if self.draft {
            let store = DraftStore::open_default().context("Failed to open draft store")?;
            store
                .load()
                .context("Failed to load draft")?
                .context("No draft saved yet - run 'vshide encode' first")?
        } else {
            eprintln!("Reading carrier from stdin (Ctrl+D to finish):");
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read carrier from stdin")?;
            buffer.trim_end_matches('\n').to_string()
        };

        let config = DecoderConfig {
            mode: if self.strict {
                DecodeMode::Strict
            } else {
                DecodeMode::Tolerant
            },
            verbose: self.verbose,
        };

        let decoded = decode_with_config(&carrier, &config).context("Failed to decode carrier")?;

        println!("{}", decoded.message);

        if self.verbose {
            eprintln!();
            eprintln!(
                "Recovered {} bytes, skipped {} foreign scalars",
                decoded.hidden_bytes, decoded.skipped
            );
        }

        Ok(())
    }
}
