// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

pub const REPORT_FOOTER: &str = "Run `tasksh --help` to see the available options.";

pub const HELP_TEXT: &str = "\
Commands:
  help          Show this message
  exit          Leave the shell
  go [path]     Change directory (`~` is where the shell started)
  show [path]   List the entries of a directory

Keys:
  Tab           Complete a command or path
  Left / Right  Jump a word back / forward
  Ctrl+A / E    Jump to the start / end of the line
  Ctrl+U        Clear the line
  Ctrl+W        Delete the previous word
";

#[must_use]
pub fn unknown_command(name: &str) -> String {
    format!("Unknown command: {name}. Type `help` to see the available commands.\n")
}

#[must_use]
pub fn too_many_arguments(name: &str) -> String {
    format!("{name}: too many arguments\n")
}

#[must_use]
pub fn not_a_directory(command: &str, path: &str) -> String {
    format!("{command}: not a directory: {path}\n")
}

#[must_use]
pub fn unreadable_directory(path: &str, error: &std::io::Error) -> String {
    format!("show: can't read {path}: {error}\n")
}
