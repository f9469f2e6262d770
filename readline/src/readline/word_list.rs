// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ReadlineError;

/// Capacity reserved by [`WordList::new`]. Storage doubles whenever it fills up.
pub const WORD_LIST_INITIAL_CAPACITY: usize = 512;

/// Ordered, growable list of owned candidate words. Duplicates are kept, insertion order
/// is preserved, and growth is fallible so a failed allocation surfaces as
/// [`ReadlineError::OutOfMemory`] instead of aborting the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl Default for WordList {
    fn default() -> Self { Self::new() }
}

impl WordList {
    #[must_use]
    pub fn new() -> Self {
        Self {
            words: Vec::with_capacity(WORD_LIST_INITIAL_CAPACITY),
        }
    }

    /// Build a list from a fixed vocabulary, in iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`ReadlineError::OutOfMemory`] if storage can't grow.
    pub fn try_from_words<I, S>(words: I) -> Result<Self, ReadlineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for word in words {
            list.append(word.as_ref())?;
        }
        Ok(list)
    }

    /// Copy `word` to the end of the list.
    ///
    /// # Errors
    ///
    /// Returns [`ReadlineError::OutOfMemory`] if storage can't grow.
    pub fn append(&mut self, word: &str) -> Result<(), ReadlineError> {
        if self.words.len() == self.words.capacity() {
            let additional = self.words.capacity().max(WORD_LIST_INITIAL_CAPACITY);
            self.words.try_reserve_exact(additional)?;
        }
        let mut owned = String::new();
        owned.try_reserve_exact(word.len())?;
        owned.push_str(word);
        self.words.push(owned);
        Ok(())
    }

    /// Remove every word, keeping the allocated storage for the next refresh.
    pub fn clear(&mut self) { self.words.clear(); }

    #[must_use]
    pub fn len(&self) -> usize { self.words.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.words.is_empty() }

    #[must_use]
    pub fn capacity(&self) -> usize { self.words.capacity() }

    pub fn iter(&self) -> std::slice::Iter<'_, String> { self.words.iter() }

    /// Words that start with `prefix`, byte for byte, in list order. An empty prefix
    /// matches everything.
    pub fn words_with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.words
            .iter()
            .map(String::as_str)
            .filter(move |word| word.as_bytes().starts_with(prefix.as_bytes()))
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}
