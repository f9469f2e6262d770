// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::ShellState;
use crate::ui_str;
use std::io::{self, Write};

/// The vocabulary completed when the word under the cursor isn't a path.
pub const COMMAND_NAMES: [&str; 4] = ["help", "exit", "go", "show"];

/// One submitted line, split on whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand<'a> {
    Empty,
    Help,
    Exit,
    Go(Option<&'a str>),
    Show(Option<&'a str>),
    TooManyArguments(&'a str),
    Unknown(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Continue,
    Exit,
}

impl<'a> ShellCommand<'a> {
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return ShellCommand::Empty;
        };
        let argument = words.next();
        if words.next().is_some() {
            return ShellCommand::TooManyArguments(name);
        }
        match (name, argument) {
            ("help", None) => ShellCommand::Help,
            ("exit", None) => ShellCommand::Exit,
            ("help" | "exit", Some(_)) => ShellCommand::TooManyArguments(name),
            ("go", path) => ShellCommand::Go(path),
            ("show", path) => ShellCommand::Show(path),
            (unknown, _) => ShellCommand::Unknown(unknown),
        }
    }
}

/// Run one submitted line, writing any output to `term`.
///
/// # Errors
///
/// Returns an error if writing to `term` fails.
pub fn dispatch(
    line: &str,
    state: &mut ShellState,
    term: &mut dyn Write,
) -> io::Result<CommandOutcome> {
    let command = ShellCommand::parse(line);
    tracing::debug!(message = "dispatch", command = ?command);

    match command {
        ShellCommand::Empty => {}
        ShellCommand::Help => term.write_all(ui_str::HELP_TEXT.as_bytes())?,
        ShellCommand::Exit => return Ok(CommandOutcome::Exit),
        ShellCommand::Go(path) => go(path.unwrap_or("~"), state, term)?,
        ShellCommand::Show(path) => show(path.unwrap_or("."), state, term)?,
        ShellCommand::TooManyArguments(name) => {
            term.write_all(ui_str::too_many_arguments(name).as_bytes())?;
        }
        ShellCommand::Unknown(name) => {
            term.write_all(ui_str::unknown_command(name).as_bytes())?;
        }
    }
    Ok(CommandOutcome::Continue)
}

fn go(typed: &str, state: &mut ShellState, term: &mut dyn Write) -> io::Result<()> {
    let target = state.resolve(typed);
    if !target.is_dir() {
        return term.write_all(ui_str::not_a_directory("go", typed).as_bytes());
    }
    tracing::debug!(message = "change directory", target = %target.display());
    state.cwd = target;
    Ok(())
}

fn show(typed: &str, state: &ShellState, term: &mut dyn Write) -> io::Result<()> {
    let target = state.resolve(typed);
    if !target.is_dir() {
        return term.write_all(ui_str::not_a_directory("show", typed).as_bytes());
    }
    let entries = match std::fs::read_dir(&target) {
        Ok(entries) => entries,
        Err(error) => {
            return term.write_all(ui_str::unreadable_directory(typed, &error).as_bytes());
        }
    };

    let mut names: Vec<String> = entries
        .filter_map(Result::ok)
        .map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            if entry.file_type().is_ok_and(|it| it.is_dir()) {
                format!("{name}/")
            } else {
                name
            }
        })
        .collect();
    names.sort();

    for name in &names {
        writeln!(term, "{name}")?;
    }
    Ok(())
}
