//! Smart Garage - vehicle fleet simulator with maintenance scheduling
//!
//! A CLI that manages a small fleet (cars, sports cars, trucks), their
//! operational state and their maintenance history, persisted as one JSON
//! blob per garage.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
