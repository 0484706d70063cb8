//! edgedump — render a binary edge list dump as a text report.

mod config;
mod convert;

use std::process;

use clap::{CommandFactory, Parser};

use config::{Cli, Config};

fn main() {
    let Some(config) = Config::from_cli(Cli::parse()) else {
        // No input named: show usage and exit cleanly without touching files.
        if let Err(e) = Cli::command().print_help() {
            eprintln!("error: {e}");
        }
        return;
    };

    // Diagnostics go to stderr; stdout carries the user-facing messages.
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = convert::run(&config) {
        println!("error: {e:#}");
        process::exit(convert::error_class(&e).exit_code());
    }
}
