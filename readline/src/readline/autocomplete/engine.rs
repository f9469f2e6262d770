// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BeforePromptFn, InputBuffer, ProviderList, ReadlineError};
use smallvec::SmallVec;
use std::io::Write;

/// Most completions narrow to a handful of candidates.
const INLINE_MATCH_COUNT: usize = 8;

type MatchList<'a> = SmallVec<[&'a str; INLINE_MATCH_COUNT]>;

/// What a Tab press did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// Nothing matched (or the word under the cursor isn't UTF-8); nothing was drawn.
    NoMatch,
    /// Exactly one candidate; it replaced the partial word in place.
    Completed(String),
    /// Several candidates were printed below the line (minus `.` and `..`), then the
    /// prompt and the unchanged line were drawn again.
    Listed(Vec<String>),
}

/// Complete the word before the cursor.
///
/// The first provider that claims the word supplies the candidates and only the text
/// after the word's last `/` has to match; otherwise the default vocabulary is matched
/// against the whole word. Matching is a plain byte prefix test.
///
/// # Errors
///
/// Returns an error if a provider's word list can't grow, the buffer can't grow, or
/// writing to `term` (including from `before_prompt`) fails.
pub fn autocomplete(
    buffer: &mut InputBuffer,
    providers: &mut ProviderList,
    term: &mut dyn Write,
    before_prompt: &mut BeforePromptFn<'_>,
) -> Result<CompletionOutcome, ReadlineError> {
    let Ok(prefix) = std::str::from_utf8(buffer.current_prefix_word()) else {
        tracing::trace!(message = "completion skipped, prefix is not UTF-8");
        return Ok(CompletionOutcome::NoMatch);
    };
    let prefix = prefix.to_owned();

    let (word_list, match_prefix) = providers.select(&prefix)?;
    let matches: MatchList<'_> = word_list.words_with_prefix(match_prefix).collect();

    let outcome = match matches.as_slice() {
        [] => CompletionOutcome::NoMatch,
        [only] => {
            buffer.complete_suffix(match_prefix.len(), only.as_bytes(), term)?;
            CompletionOutcome::Completed((*only).to_owned())
        }
        many => {
            let listed: Vec<String> = many
                .iter()
                .filter(|word| !is_dot_entry(word))
                .map(|word| (*word).to_owned())
                .collect();
            term.write_all(b"\n")?;
            for word in &listed {
                term.write_all(word.as_bytes())?;
                term.write_all(b"\n")?;
            }
            before_prompt(term)?;
            buffer.render(term)?;
            CompletionOutcome::Listed(listed)
        }
    };

    tracing::debug!(message = "autocomplete", prefix = %prefix, outcome = ?outcome);
    Ok(outcome)
}

fn is_dot_entry(word: &str) -> bool { word == "." || word == ".." }
