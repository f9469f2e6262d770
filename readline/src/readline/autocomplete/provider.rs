// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ReadlineError, WordList};
use std::path::{Path, PathBuf};

/// Decides whether a provider wants to handle the word under the cursor.
pub type ApplicabilityFn = fn(prefix: &str) -> bool;

/// Fixed vocabulary, e.g. the shell's command names. Refreshing is a no-op.
#[derive(Debug, Clone)]
pub struct StaticVocabulary {
    words: WordList,
    predicate: Option<ApplicabilityFn>,
}

impl StaticVocabulary {
    /// A vocabulary with no predicate. As the default provider it is used whenever no
    /// other provider claims the prefix; in the ordered list it is never selected.
    ///
    /// # Errors
    ///
    /// Returns [`ReadlineError::OutOfMemory`] if the word list can't grow.
    pub fn try_new<I, S>(words: I) -> Result<Self, ReadlineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            words: WordList::try_from_words(words)?,
            predicate: None,
        })
    }

    #[must_use]
    pub fn with_predicate(mut self, predicate: ApplicabilityFn) -> Self {
        self.predicate = Some(predicate);
        self
    }

    #[must_use]
    pub fn word_list(&self) -> &WordList { &self.words }

    #[must_use]
    pub fn is_applicable(&self, prefix: &str) -> bool {
        self.predicate.is_some_and(|predicate| predicate(prefix))
    }
}

/// Entries of the directory named by the path typed so far. Directories are listed with
/// a trailing `/` so completing one leaves the cursor ready for the next segment.
#[derive(Debug, Clone, Default)]
pub struct FilesystemPath {
    words: WordList,
    /// Relative paths resolve against this; the process working directory when unset.
    base_dir: Option<PathBuf>,
    /// What a leading `~` stands for; the base directory when unset.
    home_dir: Option<PathBuf>,
}

impl FilesystemPath {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    /// Point relative paths at a new directory, e.g. after the shell changed directory.
    pub fn set_base_dir(&mut self, base_dir: impl Into<PathBuf>) {
        self.base_dir = Some(base_dir.into());
    }

    #[must_use]
    pub fn with_home_dir(mut self, home_dir: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(home_dir.into());
        self
    }

    #[must_use]
    pub fn word_list(&self) -> &WordList { &self.words }

    /// Claims anything that looks like a path: it has a `/` in it, or starts with `.`
    /// or `~`.
    #[must_use]
    pub fn is_applicable(&self, prefix: &str) -> bool {
        prefix.contains('/') || prefix.starts_with('.') || prefix.starts_with('~')
    }

    /// Replace the word list with the sorted entries of the directory part of `prefix`
    /// (everything up to and including its last `/`). A directory that can't be read
    /// leaves the list empty.
    ///
    /// # Errors
    ///
    /// Returns [`ReadlineError::OutOfMemory`] if the word list can't grow.
    pub fn refresh(&mut self, prefix: &str) -> Result<(), ReadlineError> {
        self.words.clear();

        let dir_part = prefix.rfind('/').map_or("", |slash| &prefix[..=slash]);
        let dir = self.resolve(dir_part);
        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(error) => {
                tracing::debug!(
                    message = "path completion skipped, directory unreadable",
                    dir = %dir.display(),
                    error = ?error
                );
                return Ok(());
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name().into_string().ok()?;
                let is_dir = entry.file_type().is_ok_and(|it| it.is_dir());
                Some(if is_dir { format!("{name}/") } else { name })
            })
            .collect();
        names.sort();

        for name in &names {
            self.words.append(name)?;
        }
        Ok(())
    }

    fn resolve(&self, dir_part: &str) -> PathBuf {
        let base = self
            .base_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        if let Some(after_tilde) = dir_part.strip_prefix('~') {
            let home = self.home_dir.as_deref().unwrap_or(base.as_path());
            return join_relative(home, after_tilde);
        }
        // Joining an absolute path replaces the base.
        base.join(dir_part)
    }
}

fn join_relative(root: &Path, rest: &str) -> PathBuf {
    root.join(rest.trim_start_matches('/'))
}

/// A source of completion candidates. The set is closed, so dispatch is a `match`.
#[derive(Debug, Clone)]
pub enum Provider {
    StaticVocabulary(StaticVocabulary),
    FilesystemPath(FilesystemPath),
}

impl Provider {
    #[must_use]
    pub fn word_list(&self) -> &WordList {
        match self {
            Provider::StaticVocabulary(it) => it.word_list(),
            Provider::FilesystemPath(it) => it.word_list(),
        }
    }

    #[must_use]
    pub fn is_applicable(&self, prefix: &str) -> bool {
        match self {
            Provider::StaticVocabulary(it) => it.is_applicable(prefix),
            Provider::FilesystemPath(it) => it.is_applicable(prefix),
        }
    }

    /// # Errors
    ///
    /// Returns [`ReadlineError::OutOfMemory`] if the word list can't grow.
    pub fn refresh(&mut self, prefix: &str) -> Result<(), ReadlineError> {
        match self {
            Provider::StaticVocabulary(_) => Ok(()),
            Provider::FilesystemPath(it) => it.refresh(prefix),
        }
    }
}

impl From<StaticVocabulary> for Provider {
    fn from(it: StaticVocabulary) -> Self { Provider::StaticVocabulary(it) }
}

impl From<FilesystemPath> for Provider {
    fn from(it: FilesystemPath) -> Self { Provider::FilesystemPath(it) }
}

/// The default vocabulary plus ordered providers consulted before it. The first
/// provider whose predicate accepts the prefix wins; the default is the fallback.
#[derive(Debug, Clone)]
pub struct ProviderList {
    pub default: StaticVocabulary,
    pub others: Vec<Provider>,
}

impl ProviderList {
    #[must_use]
    pub fn new(default: StaticVocabulary) -> Self {
        Self {
            default,
            others: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_provider(mut self, provider: impl Into<Provider>) -> Self {
        self.others.push(provider.into());
        self
    }

    /// Pick the provider for `prefix`, refreshing it first. Returns its word list and
    /// the part of `prefix` candidates must start with: for a claimed prefix this is
    /// the text after the last `/`, for the default it is the whole prefix.
    ///
    /// # Errors
    ///
    /// Returns [`ReadlineError::OutOfMemory`] if a refresh can't grow its word list.
    pub fn select<'p>(
        &mut self,
        prefix: &'p str,
    ) -> Result<(&WordList, &'p str), ReadlineError> {
        for (index, provider) in self.others.iter_mut().enumerate() {
            if provider.is_applicable(prefix) {
                provider.refresh(prefix)?;
                let match_prefix = prefix
                    .rfind('/')
                    .map_or(prefix, |slash| &prefix[slash + 1..]);
                tracing::debug!(
                    message = "completion provider selected",
                    index = index + 1,
                    prefix,
                    match_prefix
                );
                return Ok((provider.word_list(), match_prefix));
            }
        }
        Ok((self.default.word_list(), prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::try_create_temp_dir;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn names(list: &WordList) -> Vec<String> { list.iter().cloned().collect() }

    #[test_case("src/ma", true)]
    #[test_case("./", true)]
    #[test_case("..", true)]
    #[test_case("~", true)]
    #[test_case("help", false)]
    #[test_case("", false)]
    fn test_filesystem_path_applicability(prefix: &str, expected: bool) {
        assert_eq!(FilesystemPath::new().is_applicable(prefix), expected);
    }

    #[test]
    fn test_static_vocabulary_without_predicate_never_applies() {
        let vocabulary = StaticVocabulary::try_new(["help"]).unwrap();
        assert!(!vocabulary.is_applicable("he"));
        let vocabulary = vocabulary.with_predicate(|prefix| prefix.starts_with('-'));
        assert!(vocabulary.is_applicable("--ver"));
    }

    #[test]
    fn test_refresh_lists_sorted_entries_with_dir_suffix() {
        let dir = try_create_temp_dir().unwrap();
        std::fs::create_dir(dir.join("src")).unwrap();
        std::fs::write(dir.join("main.rs"), b"").unwrap();
        std::fs::write(dir.join("Cargo.toml"), b"").unwrap();

        let mut provider = FilesystemPath::new().with_base_dir(dir.as_path());
        provider.refresh("./").unwrap();
        assert_eq!(names(provider.word_list()), vec!["Cargo.toml", "main.rs", "src/"]);
    }

    #[test]
    fn test_refresh_nested_and_tilde() {
        let dir = try_create_temp_dir().unwrap();
        std::fs::create_dir_all(dir.join("src/bin")).unwrap();
        std::fs::write(dir.join("src/lib.rs"), b"").unwrap();

        let mut provider = FilesystemPath::new()
            .with_base_dir(dir.join("src"))
            .with_home_dir(dir.as_path());
        provider.refresh("~/src/l").unwrap();
        assert_eq!(names(provider.word_list()), vec!["bin/", "lib.rs"]);

        provider.refresh("../src/").unwrap();
        assert_eq!(names(provider.word_list()), vec!["bin/", "lib.rs"]);
    }

    #[test]
    fn test_refresh_unreadable_dir_yields_empty_list() {
        let dir = try_create_temp_dir().unwrap();
        let mut provider = FilesystemPath::new().with_base_dir(dir.as_path());
        provider.refresh("missing/x").unwrap();
        assert!(provider.word_list().is_empty());
    }

    #[test]
    fn test_select_first_applicable_provider_wins() {
        let dir = try_create_temp_dir().unwrap();
        std::fs::write(dir.join("notes.txt"), b"").unwrap();

        let mut providers = ProviderList::new(StaticVocabulary::try_new(["help"]).unwrap())
            .with_provider(
                StaticVocabulary::try_new(["--version"])
                    .unwrap()
                    .with_predicate(|prefix| prefix.starts_with('-')),
            )
            .with_provider(FilesystemPath::new().with_base_dir(dir.as_path()));

        let (list, match_prefix) = providers.select("./no").unwrap();
        assert_eq!(names(list), vec!["notes.txt"]);
        assert_eq!(match_prefix, "no");

        let (list, match_prefix) = providers.select("--v").unwrap();
        assert_eq!(names(list), vec!["--version"]);
        assert_eq!(match_prefix, "--v");

        let (list, match_prefix) = providers.select("he").unwrap();
        assert_eq!(names(list), vec!["help"]);
        assert_eq!(match_prefix, "he");
    }
}
