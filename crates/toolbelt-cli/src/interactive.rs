//! Interactive help browser
//!
//! Uses dialoguer for the prompt. Each answer is a name or a listing
//! number; `0` or one of the quit words (`exit`, `quit`, `stop`, `end`,
//! `break`) leaves.

use std::io::IsTerminal;

use colored::Colorize;
use dialoguer::Input;
use toolbelt_help::{HelpRegistry, render};

use crate::error::{CliError, Result};

/// What to do with one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Quit,
    /// Blank input, prompt again
    Skip,
    Show(String),
}

const QUIT_WORDS: [&str; 5] = ["exit", "quit", "stop", "end", "break"];

/// Answer one line of input.
pub fn respond(registry: &HelpRegistry, input: &str) -> Reply {
    let input = input.trim();
    if input.is_empty() {
        return Reply::Skip;
    }
    if input == "0" || QUIT_WORDS.iter().any(|word| input.eq_ignore_ascii_case(word)) {
        return Reply::Quit;
    }
    match registry.resolve(input) {
        Ok(desc) => Reply::Show(render::detail(desc)),
        Err(_) => Reply::Show(registry.helpme(Some(input))),
    }
}

/// Run the prompt loop until the user leaves.
pub fn run(registry: &HelpRegistry) -> Result<()> {
    if !std::io::stdin().is_terminal() {
        return Err(CliError::user("--interactive needs a terminal on stdin"));
    }

    println!("{}", "Available utilities".bold());
    println!();
    print!("{}", registry.helpme_numbered());
    println!();
    println!(
        "Enter a name or number ({} or {} to leave).",
        "0".cyan(),
        "exit".cyan()
    );

    loop {
        let input: String = Input::new()
            .with_prompt("helpme")
            .allow_empty(true)
            .interact_text()?;

        match respond(registry, &input) {
            Reply::Quit => return Ok(()),
            Reply::Skip => continue,
            Reply::Show(text) => {
                println!();
                print!("{text}");
                println!();
            }
        }
    }
}
