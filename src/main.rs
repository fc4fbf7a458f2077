use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use calcpad::{Calculator, Config, parse_keys};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// A keypad calculator. Feed it key presses such as "12+3=" and it prints
/// what the calculator screen shows.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Keys to press: 0-9 . + - * / = and c to clear. Reads lines from
    /// stdin when omitted.
    keys: Option<String>,

    /// Config file to use instead of the default location.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reject an operator or "=" while no operand has been typed.
    #[arg(long)]
    strict: bool,

    /// Screen width in characters.
    #[arg(long)]
    width: Option<usize>,

    /// Print the screen after every key press.
    #[arg(short, long)]
    trace: bool,

    /// Print the final state as JSON instead of the screen.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    if args.strict {
        config.strict_operands = true;
    }
    if let Some(width) = args.width {
        config.display_width = width;
        config.validate()?;
    }

    let mut calculator = Calculator::new(&config);

    match &args.keys {
        Some(keys) => press_keys(&mut calculator, keys, args.trace)?,
        None => {
            for line in io::stdin().lock().lines() {
                let line = line.context("Failed to read keys from stdin")?;
                press_keys(&mut calculator, &line, args.trace)?;
                if !args.trace && !args.json {
                    println!("{}", calculator.display_string());
                }
            }
        }
    }

    if args.json {
        println!("{}", serde_json::to_string(&calculator.snapshot())?);
    } else if args.keys.is_some() && !args.trace {
        println!("{}", calculator.display_string());
    }

    Ok(())
}

fn press_keys(calculator: &mut Calculator, line: &str, trace: bool) -> Result<()> {
    for key in parse_keys(line)? {
        // Rejected keys leave the state untouched, so keep going.
        if let Err(err) = calculator.press(key) {
            warn!(%key, %err, "key rejected");
        }
        if trace {
            println!("{}\t{}", key, calculator.display_string());
        }
    }
    Ok(())
}
