//! Phraze CLI binary.

use clap::Parser;
use phraze::cli::{args::PhrazeArgs, commands::execute_command};
use std::process;

fn main() {
    // Parse command line arguments using clap
    let args = PhrazeArgs::parse();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
