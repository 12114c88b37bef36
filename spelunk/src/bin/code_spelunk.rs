// src/bin/code_spelunk.rs
use anyhow::Result;
use clap::Parser;

use spelunk::cli::{SpelunkArgs, init_logging, run_spelunk};

fn main() -> Result<()> {
    let args = SpelunkArgs::parse();
    init_logging(args.verbose);
    run_spelunk(args)
}
