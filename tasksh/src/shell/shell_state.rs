// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::{Component, Path, PathBuf};

/// Where the shell is. `~` in prompts and paths stands for `start_dir`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    pub start_dir: PathBuf,
    pub cwd: PathBuf,
}

impl ShellState {
    #[must_use]
    pub fn new(start_dir: PathBuf) -> Self {
        Self {
            cwd: start_dir.clone(),
            start_dir,
        }
    }

    /// `~$ ` in the start directory, `~/sub/dir$ ` below it, the absolute path
    /// anywhere else.
    #[must_use]
    pub fn prompt(&self) -> String {
        match self.cwd.strip_prefix(&self.start_dir) {
            Ok(relative) if relative.as_os_str().is_empty() => "~$ ".to_string(),
            Ok(relative) => format!("~/{}$ ", relative.display()),
            Err(_) => format!("{}$ ", self.cwd.display()),
        }
    }

    /// Resolve a path typed by the user: `~` and `~/..` against the start directory,
    /// absolute paths as is, everything else against the current directory. `.` and
    /// `..` are folded lexically so the prompt stays readable.
    #[must_use]
    pub fn resolve(&self, typed: &str) -> PathBuf {
        let joined = if typed == "~" {
            self.start_dir.clone()
        } else if let Some(rest) = typed.strip_prefix("~/") {
            self.start_dir.join(rest)
        } else {
            self.cwd.join(typed)
        };
        normalize_lexically(&joined)
    }
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}
