//! Interactive candidate selection on the terminal.
//!
//! Candidates are listed on stderr, numbered from 1. The answer may be a
//! number or a candidate's exact name. Ctrl+C or EOF abandons the lookup.

use std::io::IsTerminal;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use terraform_helper::{Disambiguator, DocumentKind};

/// What a line of user input means for a given candidate list.
#[derive(Debug, PartialEq, Eq)]
pub enum Choice {
    Picked(usize),
    Invalid,
}

/// Interpret one answer against `candidates`.
pub fn parse_choice(input: &str, candidates: &[String]) -> Choice {
    let input = input.trim();
    if let Ok(n) = input.parse::<usize>() {
        if (1..=candidates.len()).contains(&n) {
            return Choice::Picked(n - 1);
        }
        return Choice::Invalid;
    }
    candidates
        .iter()
        .position(|c| c.eq_ignore_ascii_case(input))
        .map_or(Choice::Invalid, Choice::Picked)
}

/// Selector that asks on the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalSelector;

impl Disambiguator for TerminalSelector {
    fn select(&self, kind: DocumentKind, candidates: &[String]) -> Result<String, String> {
        if candidates.is_empty() {
            return Err("no matches to select from".to_string());
        }
        if !std::io::stdin().is_terminal() {
            return Err(format!(
                "{} {kind} match and stdin is not a terminal; refine the search term",
                candidates.len()
            ));
        }

        eprintln!();
        eprintln!("  Multiple {kind} found, please select one:");
        eprintln!();
        let width = candidates.len().to_string().len();
        for (i, name) in candidates.iter().enumerate() {
            eprintln!("    {:>width$}) {name}", i + 1);
        }
        eprintln!();

        let mut rl = DefaultEditor::new().map_err(|e| format!("prompt failed: {e}"))?;
        let prompt = format!("  Select [1-{}]: ", candidates.len());

        loop {
            match rl.readline(&prompt) {
                Ok(line) => match parse_choice(&line, candidates) {
                    Choice::Picked(i) => return Ok(candidates[i].clone()),
                    Choice::Invalid => {
                        eprintln!("  '{}' is not one of the listed options.", line.trim());
                    }
                },
                Err(ReadlineError::Interrupted) => return Err("interrupted".to_string()),
                Err(ReadlineError::Eof) => return Err("no selection made".to_string()),
                Err(e) => return Err(format!("prompt failed: {e}")),
            }
        }
    }
}
