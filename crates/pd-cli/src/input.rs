//! Paycheque acquisition: argument parsing, interactive prompt, and the
//! fallback-to-default policy. The evaluator never sees an invalid
//! amount; everything unparsable is substituted here.

use std::io::{self, BufRead, Write};

use pd_mechanics::{DEFAULT_BASE_AMOUNT, Money};

/// Resolve the paycheque amount for this run.
///
/// A supplied argument that does not parse falls back to the default
/// with a notice on stderr. With no argument and `interactive` set, the
/// user is prompted once; an empty or unparsable reply also falls back.
pub fn acquire_amount(arg: Option<&str>, interactive: bool) -> Money {
    match arg {
        Some(raw) => parse_or_default(raw),
        None if interactive => prompt(),
        None => DEFAULT_BASE_AMOUNT,
    }
}

fn parse_or_default(raw: &str) -> Money {
    raw.parse().unwrap_or_else(|e| {
        eprintln!("{e}; using default {DEFAULT_BASE_AMOUNT}");
        DEFAULT_BASE_AMOUNT
    })
}

fn prompt() -> Money {
    print!("Enter your biweekly paycheque amount [{DEFAULT_BASE_AMOUNT}]: $");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return DEFAULT_BASE_AMOUNT;
    }
    let reply = line.trim();
    if reply.is_empty() {
        return DEFAULT_BASE_AMOUNT;
    }
    parse_or_default(reply)
}
