//! Reads an HTML fragment and prints equivalent tagwright construction code.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "tagwright",
    version,
    about = "Generate tagwright construction code from an HTML fragment"
)]
struct Cli {
    /// Input file; reads stdin when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let html = match &cli.input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    println!("{}", tagwright::codegen::generate(&html));
    Ok(())
}
