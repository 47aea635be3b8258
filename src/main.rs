//! poly2path CLI
//!
//! Usage:
//!   poly2path --input <FILE> [--output <FILE>]
//!
//! Options:
//!   -i, --input <FILE>   Source SVG file
//!   -o, --output <FILE>  Destination file (defaults to overwriting the input)
//!   -h, --help           Print help

use std::path::PathBuf;

use clap::Parser;

use poly2path::convert_file;

#[derive(Parser)]
#[command(name = "poly2path")]
#[command(about = "Rewrite SVG <polygon> elements as equivalent <path> elements")]
struct Cli {
    /// Source SVG file
    #[arg(short, long)]
    input: PathBuf,

    /// Destination file (defaults to overwriting the input)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = convert_file(&cli.input, cli.output.as_deref()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
