//! Contact Book - Main entry point
//!
//! Runs the interactive assistant bot: a line-oriented REPL that parses
//! commands, dispatches them against the address book, and renders results
//! and errors. Logging goes to stderr so the conversation on stdout stays
//! clean.

use anyhow::Result;
use contact_book::commands::{execute, help_text, parse_input};
use contact_book::{AddressBook, Config};
use std::io::{self, BufRead, Write};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only to keep stdout for the conversation)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting assistant bot with a {}-day birthday window",
        config.birthday_window_days
    );

    let mut book = AddressBook::new();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Welcome to the assistant bot!");
    println!("Type 'help' to see available commands.");

    loop {
        print!("Enter a command: ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF: behave like an explicit exit
            println!("Good bye!");
            break;
        }

        let (command, args) = parse_input(&line);

        // REPL-only commands never reach the dispatcher.
        match command.as_str() {
            "" => continue,
            "close" | "exit" => {
                println!("Good bye!");
                break;
            }
            "hello" => {
                println!("How can I help you?");
                continue;
            }
            "help" => {
                println!("{}", help_text());
                continue;
            }
            _ => {}
        }

        // Single boundary: handlers return a string or a typed error, and
        // this is the one place errors become user-facing text.
        match execute(&command, &args, &mut book, &config) {
            Ok(message) => println!("{}", message),
            Err(e) => {
                debug!("command '{}' failed: {}", command, e);
                println!("{}", e);
            }
        }
    }

    info!("Assistant bot shutdown complete");
    Ok(())
}
