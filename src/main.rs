use clap::Parser;
use colored::*;
use order_formatter::cli::{self, Args};
use std::process;

fn main() {
    let args = Args::parse();

    cli::setup_logging(&args);

    match cli::run(&args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("{} {:#}", "Error:".bright_red().bold(), error);
            process::exit(1);
        }
    }
}
