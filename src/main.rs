//! Vshide - Hide messages inside a single character
//!
//! A CLI tool for variation-selector steganography: messages travel as
//! invisible Unicode selectors appended to one visible host character.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{CommandExecutor, DecodeCommand, EncodeCommand, InspectCommand};

/// Vshide - Hide messages inside a single character
///
/// Hide your messages in plain sight: the carrier renders as one character,
/// the message rides along in invisible Unicode variation selectors.
#[derive(Parser)]
#[command(name = "vshide")]
#[command(version)]
#[command(about = "Hide messages inside a single character using invisible Unicode selectors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hide a message inside a host character
    Encode(EncodeCommand),

    /// Recover the hidden message from a carrier
    Decode(DecodeCommand),

    /// Analyze a carrier without decoding it
    Inspect(InspectCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode(cmd) => cmd.execute(),
        Commands::Decode(cmd) => cmd.execute(),
        Commands::Inspect(cmd) => cmd.execute(),
    }
}
