mod cli;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use handleport_core::ResourceHandle;
use handleport_proto::{codec, ResourceHandleProto};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log).context("invalid --log filter")?)
        .init();

    match cli.command {
        Command::Inspect { path, json } => inspect(&path, json),
        Command::Encode { input, output } => encode(&input, &output),
        Command::Merge {
            base,
            overlay,
            output,
        } => merge(&base, &overlay, &output),
    }
}

fn inspect(path: &Path, json: bool) -> Result<()> {
    let proto = read_descriptor(path)?;
    let handle = ResourceHandle::try_from(proto)
        .with_context(|| format!("converting {}", path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&handle)?);
    } else {
        println!("{handle}");
    }
    Ok(())
}

fn encode(input: &Path, output: &Path) -> Result<()> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let handle: ResourceHandle =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", input.display()))?;

    write_descriptor(output, &ResourceHandleProto::from(&handle))
}

fn merge(base: &Path, overlay: &Path, output: &Path) -> Result<()> {
    let base = read_descriptor(base)?;
    let overlay = read_descriptor(overlay)?;

    write_descriptor(output, &codec::merge(base, overlay))
}

fn read_descriptor(path: &Path) -> Result<ResourceHandleProto> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    codec::decode(&bytes).with_context(|| format!("decoding {}", path.display()))
}

fn write_descriptor(path: &Path, proto: &ResourceHandleProto) -> Result<()> {
    let bytes = codec::encode(proto);
    std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote descriptor");
    Ok(())
}
