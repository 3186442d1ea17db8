// main.rs
//
// Build the logo with the default parameters and write it as SVG.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vimlogo::{LogoParams, build_logo, io::svg};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Where to write the SVG; parent directories are created.
    #[arg(short, long, default_value = "output/vimlogo.svg")]
    output: PathBuf,

    /// Print the SVG to stdout instead of writing a file.
    #[arg(long)]
    print: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let logo = build_logo(&LogoParams::default()).context("building the logo")?;

    if args.print {
        println!("{}", svg::to_string(&logo));
    } else {
        svg::write_logo(&args.output, &logo)
            .with_context(|| format!("writing {}", args.output.display()))?;
    }
    Ok(())
}
