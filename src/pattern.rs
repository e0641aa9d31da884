// pattern.rs - Compiled-pattern wrapper and match views.
//
// Wraps the regex engine with the types the mapping and substitution
// layers work in terms of: Pattern, PatternBuilder, Match, Capture.

use std::ops::Range;

use bitflags::bitflags;
use smallvec::SmallVec;

use crate::error::Error;

bitflags! {
    /// Compile-time option flags for [`Pattern::with_options`].
    ///
    /// Each flag maps onto the corresponding engine knob.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Options: u32 {
        /// Letters match regardless of case.
        const CASE_INSENSITIVE = 1 << 0;
        /// `^` and `$` match at every line boundary.
        const MULTI_LINE = 1 << 1;
        /// `.` also matches `\n`.
        const DOT_MATCHES_NEWLINE = 1 << 2;
        /// Whitespace in the pattern is ignored and `#` starts a comment.
        const IGNORE_WHITESPACE = 1 << 3;
    }
}

/// A compiled regular expression.
///
/// Immutable after compilation and freely reusable against many inputs.
///
/// # Examples
///
/// ```
/// use regroup::Pattern;
///
/// let re = Pattern::new(r"\d+").unwrap();
/// let m = re.first_match("hello 42").unwrap();
/// assert_eq!(m.value(), "42");
/// assert_eq!(m.range(), 6..8);
/// ```
pub struct Pattern {
    regex: regex::Regex,
}

impl Pattern {
    /// Compile a pattern using default options.
    pub fn new(pattern: &str) -> Result<Pattern, Error> {
        let regex = regex::Regex::new(pattern)?;
        Ok(Pattern { regex })
    }

    /// Compile a pattern with the given option flags.
    pub fn with_options(pattern: &str, options: Options) -> Result<Pattern, Error> {
        Self::builder(pattern).option(options).build()
    }

    /// Create a [`PatternBuilder`] for fine-grained control over compilation.
    pub fn builder(pattern: &str) -> PatternBuilder {
        PatternBuilder::new(pattern)
    }

    /// Check whether `text` matches the pattern anywhere.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Return the first match in `text` with all capture slots, or `None`.
    pub fn first_match<'t>(&'t self, text: &'t str) -> Option<Match<'t>> {
        let caps = self.regex.captures(text)?;
        Some(Match::from_captures(&caps, text, self))
    }

    /// Iterate over all non-overlapping matches in `text`, left to right.
    pub fn matches<'t>(&'t self, text: &'t str) -> Matches<'t> {
        Matches {
            pattern: self,
            text,
            inner: self.regex.captures_iter(text),
        }
    }

    /// Number of parenthesized capture groups (excluding the whole match).
    pub fn group_count(&self) -> usize {
        self.regex.captures_len() - 1
    }

    /// Resolve a declared group name to its slot index, or `None`.
    pub fn group_index(&self, name: &str) -> Option<usize> {
        self.regex.capture_names().position(|n| n == Some(name))
    }

    /// Iterate over the names declared by the pattern, in slot order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.regex.capture_names().flatten()
    }

    /// The pattern string this `Pattern` was compiled from.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Access the underlying engine regex for advanced usage.
    pub fn as_regex(&self) -> &regex::Regex {
        &self.regex
    }
}

impl std::fmt::Debug for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pattern")
            .field("pattern", &self.regex.as_str())
            .finish()
    }
}

// === PatternBuilder ===

/// Builder for compiling a [`Pattern`] with custom options.
///
/// # Examples
///
/// ```
/// use regroup::Pattern;
///
/// let re = Pattern::builder(r"hello world")
///     .case_insensitive(true)
///     .build()
///     .unwrap();
/// assert!(re.is_match("Hello World"));
/// ```
pub struct PatternBuilder {
    pattern: String,
    options: Options,
}

impl PatternBuilder {
    /// Create a new builder for the given pattern.
    pub fn new(pattern: &str) -> Self {
        PatternBuilder {
            pattern: pattern.to_string(),
            options: Options::empty(),
        }
    }

    /// Enable or disable case-insensitive matching.
    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.options.set(Options::CASE_INSENSITIVE, yes);
        self
    }

    /// Enable or disable `^`/`$` matching at every line boundary.
    pub fn multi_line(mut self, yes: bool) -> Self {
        self.options.set(Options::MULTI_LINE, yes);
        self
    }

    /// Enable or disable `.` matching `\n`.
    pub fn dot_matches_newline(mut self, yes: bool) -> Self {
        self.options.set(Options::DOT_MATCHES_NEWLINE, yes);
        self
    }

    /// Enable or disable extended mode (whitespace and `#` comments ignored).
    pub fn ignore_whitespace(mut self, yes: bool) -> Self {
        self.options.set(Options::IGNORE_WHITESPACE, yes);
        self
    }

    /// Set raw option flags. See [`Options`].
    pub fn option(mut self, flags: Options) -> Self {
        self.options |= flags;
        self
    }

    /// Compile the pattern into a [`Pattern`].
    pub fn build(self) -> Result<Pattern, Error> {
        let regex = regex::RegexBuilder::new(&self.pattern)
            .case_insensitive(self.options.contains(Options::CASE_INSENSITIVE))
            .multi_line(self.options.contains(Options::MULTI_LINE))
            .dot_matches_new_line(self.options.contains(Options::DOT_MATCHES_NEWLINE))
            .ignore_whitespace(self.options.contains(Options::IGNORE_WHITESPACE))
            .build()?;
        Ok(Pattern { regex })
    }
}

// === Capture ===

/// One capture slot of a match: a slice of the original input plus its
/// byte range. Offsets are byte offsets into the text at match time.
#[derive(Debug, Clone, Copy)]
pub struct Capture<'t> {
    text: &'t str,
    start: usize,
    end: usize,
}

impl<'t> Capture<'t> {
    /// Byte offset of the start of the capture.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset of the end of the capture (exclusive).
    pub fn end(&self) -> usize {
        self.end
    }

    /// Byte range of the capture.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The captured text.
    pub fn as_str(&self) -> &'t str {
        &self.text[self.start..self.end]
    }

    /// Length of the capture in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the capture is empty (zero-length).
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

// === Match ===

/// A single match with all its capture slots.
///
/// Slot 0 is the entire match; slots 1..=N correspond to the pattern's
/// parenthesized groups. A slot is `None` when its group did not
/// participate in this particular match. All slots reference the original
/// input text; a `Match` never outlives the text it was produced from.
pub struct Match<'t> {
    slots: SmallVec<[Option<Capture<'t>>; 8]>,
    pattern: &'t Pattern,
}

impl<'t> Match<'t> {
    fn from_captures(caps: &regex::Captures<'t>, text: &'t str, pattern: &'t Pattern) -> Self {
        let mut slots = SmallVec::with_capacity(caps.len());
        for i in 0..caps.len() {
            slots.push(caps.get(i).map(|m| Capture {
                text,
                start: m.start(),
                end: m.end(),
            }));
        }
        Match { slots, pattern }
    }

    /// The whole matched text (slot 0).
    pub fn value(&self) -> &'t str {
        self.whole().as_str()
    }

    /// Byte range of the whole match (slot 0).
    pub fn range(&self) -> Range<usize> {
        self.whole().range()
    }

    /// Get capture slot `i`, or `None` if the group did not participate.
    ///
    /// Slot 0 is the entire match.
    pub fn get(&self, i: usize) -> Option<Capture<'t>> {
        self.slots.get(i).copied().flatten()
    }

    /// Get the capture slot with the given name, or `None` if the pattern
    /// declares no such name or the group did not participate.
    pub fn name(&self, name: &str) -> Option<Capture<'t>> {
        self.get(self.pattern.group_index(name)?)
    }

    /// Number of capture slots (including slot 0).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if there are no slots (never the case for a real match).
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn whole(&self) -> Capture<'t> {
        // Slot 0 always participates in a successful match.
        self.slots[0].expect("slot 0 is the whole match")
    }
}

impl std::fmt::Debug for Match<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_list();
        for slot in &self.slots {
            list.entry(slot);
        }
        list.finish()
    }
}

// === Matches ===

/// Iterator over all non-overlapping matches in a text.
pub struct Matches<'t> {
    pattern: &'t Pattern,
    text: &'t str,
    inner: regex::CaptureMatches<'t, 't>,
}

impl<'t> Iterator for Matches<'t> {
    type Item = Match<'t>;

    fn next(&mut self) -> Option<Match<'t>> {
        let caps = self.inner.next()?;
        Some(Match::from_captures(&caps, self.text, self.pattern))
    }
}
