//! Encode command - hide a message inside a host character.

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Args;

use vshide::{encode_with_config, DraftStore, EncoderConfig};

use super::CommandExecutor;

/// Hide a message inside a single visible character.
///
/// The host can be any character (an emoji works well). The output carrier
/// renders as just the host; the message travels in invisible variation
/// selectors appended after it.
///
/// The carrier is saved as the draft so `vshide decode --draft` can recover
/// it later, unless --no-draft is given.
#[derive(Args, Debug)]
pub struct EncodeCommand {
    /// The visible host character that anchors the carrier
    #[arg(short = 'H', long, default_value = "\u{1F60A}")]
    pub host: String,

    /// Message to hide (reads from stdin if not provided)
    ///
    /// Every character must fit in one byte (Latin-1 range).
    #[arg(short, long)]
    pub message: Option<String>,

    /// Reject hosts made of more than one Unicode scalar value
    ///
    /// Required if the carrier will be decoded with --strict.
    #[arg(long)]
    pub single_scalar_host: bool,

    /// Don't save the carrier to the draft store
    #[arg(long)]
    pub no_draft: bool,

    /// Verbose output (shows hidden byte count)
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for EncodeCommand {
    fn execute(&self) -> Result<()> {
        let message = match &self.message {
            Some(m) => m.clone(),
            None => {
                eprintln!("Reading message from stdin (Ctrl+D to finish):");
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read message from stdin")?;
                buffer.trim_end_matches('\n').to_string()
            }
        };

        if message.is_empty() {
            anyhow::bail!("Message cannot be empty");
        }

        let config = EncoderConfig {
            verbose: self.verbose,
            require_single_scalar_host: self.single_scalar_host,
        };

        let encoded = encode_with_config(&self.host, &message, &config)
            .context("Failed to encode message")?;

        println!("{}", encoded.carrier);

        if self.verbose {
            eprintln!();
            eprintln!("Hid {} bytes behind '{}'", encoded.hidden_bytes, self.host);
        }

        if !self.no_draft {
            let store = DraftStore::open_default().context("Failed to open draft store")?;
            store
                .save(&encoded.carrier)
                .context("Failed to save draft")?;

            if self.verbose {
                eprintln!("Draft saved to {}", store.path().display());
            }
        }

        Ok(())
    }
}
