//! # Greeter
//!
//! Simple interactive greeting program. Prints a default greeting, a greeting
//! with a fixed name and a greeting with a name read from standard input
//! (press Enter at the prompt for the default).

use anyhow::{anyhow, Result};
use env_logger::{Builder, Env};
use log::debug;
use std::io::{self, Write};

mod greeting;

use greeting::say_hello;

const PROMPT: &str = "Enter your name (or press Enter for default): ";

fn logger_init() {
    let env = Env::default().filter_or("RUST_LOG", "info");
    Builder::from_env(env).init();
}

/// Reads one line from standard input and returns it trimmed of surrounding
/// whitespace.
///
/// # Errors
///
/// Returns an error if standard input is closed before a line is available
/// or the read itself fails.
fn read_name() -> Result<String> {
    print!("{PROMPT}");
    io::stdout().flush()?;
    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input)?;
    if bytes == 0 {
        return Err(anyhow!("Standard input closed before a name was read!"));
    }
    Ok(input.trim().to_string())
}

fn run() -> Result<()> {
    println!("{}", say_hello(None));
    println!("{}", say_hello(Some("Python Developer")));

    let name = read_name()?;
    debug!("Read name from stdin: {:?}.", name);
    if name.is_empty() {
        println!("{}", say_hello(None));
    } else {
        println!("{}", say_hello(Some(&name)));
    }
    Ok(())
}

fn main() {
    logger_init();
    match run() {
        Ok(_) => (),
        Err(err_msg) => {
            eprintln!("Greeter error: {}", err_msg);
            std::process::exit(1);
        }
    }
}
