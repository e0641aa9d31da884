// subst.rs - Global substitution with a per-match replacement callback.
//
// Two phases, strictly separated: every match is found against the one
// fixed original text first, then replacements are spliced in reverse
// (rightmost first). A splice at a higher offset never shifts a lower
// match's range, so every splice applies at still-valid offsets even when
// replacements change the string's length.

use std::convert::Infallible;

use crate::error::Error;
use crate::pattern::{Match, Pattern};

impl Pattern {
    /// Replace every non-overlapping match in `text` with the string the
    /// `replace` callback returns for it.
    ///
    /// The callback receives the current text snapshot (already rewritten
    /// to the right of this match by later-processed, more-rightward
    /// substitutions) and the match, whose captures reference the original
    /// pre-substitution text. With zero matches the input comes back
    /// unchanged, as an owned string.
    ///
    /// # Examples
    ///
    /// ```
    /// use regroup::Pattern;
    ///
    /// let re = Pattern::new(r"\d+").unwrap();
    /// let result = re.substitute("40 and 20", |_, m| {
    ///     let n = regroup::lenient_int(m.value());
    ///     format!("half of {} is {}", n, n / 2)
    /// });
    /// assert_eq!(result, "half of 40 is 20 and half of 20 is 10");
    /// ```
    pub fn substitute<F>(&self, text: &str, mut replace: F) -> String
    where
        F: FnMut(&str, &Match) -> String,
    {
        let result: Result<String, Infallible> =
            self.try_substitute(text, |current, m| Ok(replace(current, m)));
        match result {
            Ok(processed) => processed,
            Err(never) => match never {},
        }
    }

    /// Fallible variant of [`Pattern::substitute`]: the first `Err` from
    /// the callback abandons the substitution and propagates unmodified.
    pub fn try_substitute<F, E>(&self, text: &str, mut replace: F) -> Result<String, E>
    where
        F: FnMut(&str, &Match) -> Result<String, E>,
    {
        let matches: Vec<Match<'_>> = self.matches(text).collect();
        let mut processed = text.to_string();
        for m in matches.iter().rev() {
            let replacement = replace(&processed, m)?;
            processed.replace_range(m.range(), &replacement);
        }
        Ok(processed)
    }
}

/// Compile `pattern` and substitute every match in `text` in one call.
///
/// Convenience for one-shot use; compile the [`Pattern`] yourself when it
/// is reused. A malformed pattern is an [`Error::Pattern`].
pub fn substitute<F>(pattern: &str, text: &str, replace: F) -> Result<String, Error>
where
    F: FnMut(&str, &Match) -> String,
{
    Ok(Pattern::new(pattern)?.substitute(text, replace))
}
