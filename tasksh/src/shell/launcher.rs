// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{COMMAND_NAMES, CommandOutcome, ShellState, dispatch};
use miette::IntoDiagnostic;
use std::io::{self, Read, Write};
use tasksh_readline::{FilesystemPath, Provider, ProviderList, Readline, ReadlineConfig,
                      ReadlineError, ReadlineEvent, StaticVocabulary, TerminalSession};

/// Command names by default, filesystem entries once the word looks like a path.
///
/// # Errors
///
/// Returns [`ReadlineError::OutOfMemory`] if the vocabulary can't be allocated.
pub fn create_providers(state: &ShellState) -> Result<ProviderList, ReadlineError> {
    Ok(ProviderList::new(StaticVocabulary::try_new(COMMAND_NAMES)?).with_provider(
        FilesystemPath::new()
            .with_base_dir(state.cwd.clone())
            .with_home_dir(state.start_dir.clone()),
    ))
}

/// Keep relative path completion in step with `go`.
pub fn sync_path_providers(providers: &mut ProviderList, state: &ShellState) {
    for provider in &mut providers.others {
        if let Provider::FilesystemPath(it) = provider {
            it.set_base_dir(state.cwd.clone());
        }
    }
}

/// Put stdin in editor mode and run the shell until `exit` or end of input. The
/// terminal is restored on every way out.
///
/// # Errors
///
/// Returns an error if stdin isn't a terminal, the working directory is unknown, or
/// terminal I/O fails.
pub fn run_interactive_shell() -> miette::Result<()> {
    let start_dir = std::env::current_dir().into_diagnostic()?;
    let mut state = ShellState::new(start_dir);
    let mut readline = Readline::new(ReadlineConfig::default(), create_providers(&state)?);

    let session = TerminalSession::try_new()?;
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    run_shell_loop(&mut readline, &mut state, &mut stdin, &mut stdout)?;
    session.end()?;
    Ok(())
}

/// Prompt, read, dispatch, repeat.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `term` fails.
pub fn run_shell_loop(
    readline: &mut Readline,
    state: &mut ShellState,
    input: &mut dyn Read,
    term: &mut dyn Write,
) -> Result<(), ReadlineError> {
    loop {
        let prompt = state.prompt();
        let mut print_prompt = |term: &mut dyn Write| term.write_all(prompt.as_bytes());

        match readline.read_line(input, term, &mut print_prompt)? {
            ReadlineEvent::Line(line) => {
                // Command names are ASCII; a stray non-UTF-8 byte can only end up in a
                // path argument, which then fails to resolve and is reported.
                let line = String::from_utf8_lossy(&line);
                let outcome = dispatch(&line, state, term)?;
                term.flush()?;
                if outcome == CommandOutcome::Exit {
                    return Ok(());
                }
                sync_path_providers(readline.providers_mut(), state);
            }
            ReadlineEvent::Eof(_) => {
                term.write_all(b"\n")?;
                term.flush()?;
                return Ok(());
            }
        }
    }
}
