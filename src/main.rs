// wffcheck: well-formed formula validator for propositional logic

mod diagnostics;
mod parser;

use std::io::{self, BufRead};
use std::process;

use parser::parser::validate;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        let program_name = std::env::args()
            .next()
            .unwrap_or_else(|| "wffcheck".to_string());
        eprintln!("Usage: {} [FORMULA]", program_name);
        eprintln!();
        eprintln!("Validates a propositional-logic formula. With no arguments,");
        eprintln!("reads one formula per line from stdin.");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  {} \"(p and q)\"", program_name);
        eprintln!("  {} \"¬(p ∨ q) ⇒ r\"  # exits 1: missing outer parens", program_name);
        eprintln!();
        eprintln!("Exit code 0 if every input is well formed, 1 otherwise.");
        process::exit(0);
    }

    let mut all_valid = true;

    if args.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    eprintln!("Error reading stdin: {}", err);
                    process::exit(1);
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            if !report(&line) {
                all_valid = false;
            }
        }
    } else {
        // The formula may arrive shell-split into several arguments.
        let formula = args.join(" ");
        all_valid = report(&formula);
    }

    process::exit(if all_valid { 0 } else { 1 });
}

/// Validate one input and print the outcome. Returns whether it was valid.
fn report(input: &str) -> bool {
    match validate(input) {
        Ok(formula) => {
            let mut atoms: Vec<char> = formula.atoms().into_iter().collect();
            atoms.sort_unstable();
            let atoms: Vec<String> = atoms.iter().map(|a| a.to_string()).collect();

            println!("valid: {}", formula);
            println!("atoms: {}", atoms.join(", "));
            true
        }
        Err(err) => {
            eprintln!("invalid: {}", err);
            false
        }
    }
}
