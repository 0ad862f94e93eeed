//! memshell entry point: an interactive loop over one in-memory namespace.
//!
//! Commands are read from stdin one per line; output goes to stdout, error
//! messages and logs (see `RUST_LOG`) to stderr.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use memshell::{Command, Config, DirStore, FsError, Outcome, Shell};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = Config::default();
    let store = DirStore::new(config.store_root()).context("Failed to open the export directory")?;
    let mut shell = Shell::new(config, store);

    println!("Welcome to memshell! Type 'help' for commands, 'exit' to quit.");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    let mut line = Vec::new();

    loop {
        print!("{}", shell.config().prompt());
        stdout.flush()?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            // end of input behaves like `exit`
            println!();
            return Ok(());
        }

        let command = match Command::parse(&String::from_utf8_lossy(&line)) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                report(&e);
                continue;
            }
        };
        if let Command::Edit(name) = &command
            && shell.tree().find_file(name).is_some()
        {
            println!(
                "Enter content, finish with a line containing only '{}':",
                shell.config().edit_terminator()
            );
        }

        match shell.execute(command, &mut input) {
            Ok(Outcome::Silent) => {}
            Ok(Outcome::Print(text)) => println!("{text}"),
            Ok(Outcome::Exit) => return Ok(()),
            Err(e) => report(&e),
        }
    }
}

fn report(error: &FsError) {
    eprintln!("{error}");
}
