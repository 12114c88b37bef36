// src/bin/what.rs
use anyhow::Result;
use clap::Parser;

use spelunk::cli::{WhatArgs, init_logging, run_what};

fn main() -> Result<()> {
    let args = WhatArgs::parse();
    init_logging(args.verbose);
    run_what(&args)
}
