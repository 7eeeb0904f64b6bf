use std::io::{self, BufRead};

use rustyline::{error::ReadlineError, DefaultEditor};

use crate::cli::core::{CliMode, CommandError, LoopControl, ShellContext};
use crate::cli::output;
use crate::errors::CliError;

/// Runs the shell: interactive by default, stdin script mode when
/// `CREDIT_APP_CLI_SCRIPT` is set.
pub fn run_cli() -> Result<(), CliError> {
    let mode = CliMode::from_env();
    let mut context = ShellContext::new(mode)?;

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context, io::stdin().lock()),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = DefaultEditor::new()?;
    output::info("Credit application shell. Type `help` to list commands.");

    while context.running {
        match editor.readline(&context.prompt()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.trim()).ok();
                }
                step(context, &line)?;
            }
            Err(ReadlineError::Interrupted) => {
                output::hint("Type `exit` or press Ctrl-D to leave.");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

/// Feeds every line of `input` to the shell until it runs out or `exit` is read.
pub(crate) fn run_script(context: &mut ShellContext, input: impl BufRead) -> Result<(), CliError> {
    for line in input.lines() {
        if !context.running {
            break;
        }
        step(context, &line?)?;
    }
    Ok(())
}

/// Command failures are printed and the session goes on.
fn step(context: &mut ShellContext, line: &str) -> Result<(), CliError> {
    match execute(context, line) {
        Ok(LoopControl::Continue) => Ok(()),
        Ok(LoopControl::Exit) => {
            context.running = false;
            Ok(())
        }
        Err(err) => context.report_error(err),
    }
}

fn execute(context: &mut ShellContext, line: &str) -> Result<LoopControl, CommandError> {
    let tokens = match tokenize(line) {
        Ok(tokens) => tokens,
        Err(message) => {
            context.print_warning(&message);
            return Ok(LoopControl::Continue);
        }
    };

    match tokens.split_first() {
        Some((name, rest)) if !name.starts_with('#') => {
            let args: Vec<&str> = rest.iter().map(String::as_str).collect();
            context.dispatch(name, &args)
        }
        _ => Ok(LoopControl::Continue),
    }
}

/// Splits a line shell-style so quoted arguments such as street names stay whole.
pub(crate) fn tokenize(line: &str) -> Result<Vec<String>, String> {
    shell_words::split(line).map_err(|err| format!("cannot parse line: {}", err))
}
