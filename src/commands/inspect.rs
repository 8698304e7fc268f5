//! Inspect command - analyze a carrier without decoding it.

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Args;

use vshide::selector::{byte_for_selector, LOW_CAPACITY};
use vshide::DraftStore;

use super::CommandExecutor;

/// Analyze a carrier: anchor, hidden byte count, selector breakdown.
///
/// Useful to check whether a pasted string actually carries hidden data, and
/// whether it would survive a strict decode.
#[derive(Args, Debug)]
pub struct InspectCommand {
    /// The carrier text (reads from stdin if neither this nor --draft is given)
    #[arg(short, long, conflicts_with = "draft")]
    pub carrier: Option<String>,

    /// Inspect the carrier saved by the last encode
    #[arg(short, long)]
    pub draft: bool,
}

impl CommandExecutor for InspectCommand {
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

        let mut scalars = carrier.chars();

        let anchor = match scalars.next() {
            Some(a) => a,
            None => {
                println!("Empty carrier - nothing to inspect");
                return Ok(());
            }
        };

        let mut low = 0usize;
        let mut high = 0usize;
        let mut foreign = 0usize;

        for c in scalars {
            match byte_for_selector(c) {
                Some(b) if (b as u32) < LOW_CAPACITY => low += 1,
                Some(_) => high += 1,
                None => foreign += 1,
            }
        }

        println!("Carrier Analysis");
        println!("================");
        println!("  Anchor: '{}' (U+{:04X})", anchor, anchor as u32);
        println!("  Hidden bytes: {}", low + high);
        println!("    Low block (U+FE00..U+FE0F):    {}", low);
        println!("    High block (U+E0100..U+E01EF): {}", high);
        println!("  Foreign scalars after anchor: {}", foreign);

        if foreign > 0 {
            println!();
            println!("  Note: strict decoding would fail; tolerant decoding skips these");
        }

        Ok(())
    }
}
