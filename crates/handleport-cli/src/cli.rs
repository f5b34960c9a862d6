use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "handlectl", version, about = "Resource handle descriptor tool")]
pub struct Cli {
    /// Log filter (RUST_LOG syntax)
    #[arg(long, default_value = "info")]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode an encoded descriptor file and print it
    Inspect {
        /// Path to the encoded descriptor
        path: PathBuf,

        /// Print JSON instead of the one-line summary
        #[arg(long)]
        json: bool,
    },
    /// Encode a JSON descriptor into its binary form
    Encode {
        /// Path to the JSON descriptor
        input: PathBuf,

        /// Where to write the encoded bytes
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Merge two encoded descriptors (set overlay fields win, slot lists concatenate)
    Merge {
        /// Path to the base descriptor
        base: PathBuf,

        /// Path to the overlay descriptor
        overlay: PathBuf,

        /// Where to write the merged descriptor
        #[arg(short, long)]
        output: PathBuf,
    },
}
